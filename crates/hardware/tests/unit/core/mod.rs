
/// Sub-word loads and stores on every model.
pub mod sub_word;
