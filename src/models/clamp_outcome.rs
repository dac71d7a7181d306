pub const ELLIPSIS: &str = "...";

/// Result of one computation pass.
#[derive(Debug, Clone, PartialEq)]
pub enum ClampOutcome {
    /// The text fits; the source was restored verbatim.
    NoOverflow { text: String },
    /// The text overflowed `realized_lines` and was cut before the ellipsis.
    Clamped { text: String, realized_lines: usize },
    /// No word was found at the overflow point, the element keeps its
    /// measured fragments.
    Unresolved { realized_lines: usize },
}

impl ClampOutcome {
    pub fn text(&self) -> Option<&str> {
        match self {
            ClampOutcome::NoOverflow { text } | ClampOutcome::Clamped { text, .. } => {
                Some(text.as_str())
            }
            ClampOutcome::Unresolved { .. } => None,
        }
    }

    pub fn is_clamped(&self) -> bool {
        matches!(self, ClampOutcome::Clamped { .. })
    }
}
