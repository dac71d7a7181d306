pub mod error;
pub mod grouper;
pub mod line_clamp;
pub mod measurer;
pub mod tokenizer;
pub mod truncator;
