use crate::engine::error::ClampError;

pub const DEFAULT_ALLOWED_LINES: usize = 3;

/// Inputs of one computation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ClampConfig {
    allowed_lines: usize,
    source_text: Option<String>,
}

impl ClampConfig {
    pub fn new(allowed_lines: usize) -> Result<Self, ClampError> {
        if allowed_lines == 0 {
            return Err(ClampError::InvalidLineCount(allowed_lines));
        }
        Ok(Self {
            allowed_lines,
            source_text: None,
        })
    }

    /// Clamp `text` instead of the element's current content.
    pub fn with_source_text(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    pub fn allowed_lines(&self) -> usize {
        self.allowed_lines
    }

    pub fn source_text(&self) -> Option<&str> {
        self.source_text.as_deref()
    }
}

impl Default for ClampConfig {
    fn default() -> Self {
        Self {
            allowed_lines: DEFAULT_ALLOWED_LINES,
            source_text: None,
        }
    }
}
