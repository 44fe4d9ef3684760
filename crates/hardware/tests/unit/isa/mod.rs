
/// Mnemonic output.
pub mod disasm;
