//! MIPS32 simulator CLI.
//!
//! This binary loads a program and runs it on one execution model. It performs:
//! 1. **Configuration:** Defaults, optionally overridden by a JSON file and by `-O`.
//! 2. **Loading:** ELF32, hex listing, or raw big-endian binary.
//! 3. **Execution:** Ticks until the program drains or the cycle budget runs out,
//!    then prints the register file and statistics.

use std::path::PathBuf;
use std::{fs, process};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use mipsim_core::config::{Config, OptLevel};
use mipsim_core::sim::{Simulator, loader};

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "MIPS32 simulator: single-cycle, pipelined, and out-of-order models",
    long_about = "Run a MIPS program on one of three execution models.\n\nLevels:\n  0  single-cycle\n  1  five-stage in-order pipeline\n  2  out-of-order engine\n\nExamples:\n  mipsim prog.hex -O 1\n  mipsim prog.elf -O 2 --json-stats\n  mipsim prog.bin --config sim.json --trace"
)]
struct Cli {
    /// Program image (ELF32, hex listing, or raw big-endian words).
    file: PathBuf,

    /// Optimization level (0, 1, or 2). Overrides the config file.
    #[arg(short = 'O', long = "opt-level")]
    opt_level: Option<u8>,

    /// Stop after this many cycles.
    #[arg(long, default_value_t = 10_000_000)]
    cycles: u64,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log every pipeline stage.
    #[arg(long)]
    trace: bool,

    /// Print statistics as JSON instead of the text summary.
    #[arg(long)]
    json_stats: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.trace);

    let config = build_config(&cli).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {e}");
        process::exit(2);
    });

    if let Err(e) = run(&cli, &config) {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    }
}

fn init_tracing(trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> mipsim_core::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json(&fs::read_to_string(path)?)?,
        None => Config::default(),
    };
    if let Some(level) = cli.opt_level {
        config.general.opt_level = OptLevel::try_from(level)?;
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: &Cli, config: &Config) -> mipsim_core::Result<()> {
    let image = loader::load_file(&cli.file, config.general.start_pc)?;
    debug!("entry {:#010x}, {} segments", image.entry, image.segments.len());

    let mut sim = Simulator::from_config(config)?;
    sim.load_program(&image)?;

    println!(
        "[*] {} on level {} ({:?})",
        cli.file.display(),
        u8::from(config.general.opt_level),
        config.general.opt_level
    );

    let result = sim.run(cli.cycles);
    if !sim.is_halted() && result.is_ok() {
        println!("[!] cycle limit reached ({} cycles)", cli.cycles);
    }

    println!();
    sim.regs.dump();
    if cli.json_stats {
        println!("{}", serde_json::to_string_pretty(&sim.stats)?);
    } else {
        sim.stats.print();
    }
    result.map(|_| ())
}
