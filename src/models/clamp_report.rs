use bincode::{Decode, Encode};

use super::clamp_outcome::ClampOutcome;

/// A settled pass, as published to the rest of the program.
#[derive(Debug, Clone, Encode, Decode, PartialEq)]
pub struct ClampReport {
    pub columns: u16,
    pub clamped: bool,
    pub text: String,
    pub lines: Vec<String>,
}

impl ClampReport {
    pub fn new(columns: u16, outcome: &ClampOutcome, lines: Vec<String>) -> Self {
        Self {
            columns,
            clamped: outcome.is_clamped(),
            text: outcome.text().map(str::to_owned).unwrap_or_default(),
            lines,
        }
    }
}
