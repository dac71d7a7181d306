use crate::layout::provider::{FragmentHandle, FragmentStyle};

const NBSP: &str = "\u{00A0}";

/// A word or a collapsed whitespace run of the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFragment {
    pub index: usize,
    content: String,
    is_whitespace: bool,
    measured_width: Option<f32>,
    handle: Option<FragmentHandle>,
}

impl TextFragment {
    pub fn word(index: usize, content: &str) -> Self {
        Self {
            index,
            content: content.to_owned(),
            is_whitespace: false,
            measured_width: None,
            handle: None,
        }
    }

    /// Whitespace runs collapse to a single space.
    pub fn whitespace(index: usize) -> Self {
        Self {
            index,
            content: String::from(" "),
            is_whitespace: true,
            measured_width: None,
            handle: None,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_whitespace(&self) -> bool {
        self.is_whitespace
    }

    /// Text handed to the layout; whitespace becomes a non-breaking space so
    /// it keeps a measurable width.
    pub fn display_text(&self) -> String {
        if self.is_whitespace {
            NBSP.to_owned()
        } else {
            self.content.clone()
        }
    }

    pub fn style(&self) -> FragmentStyle {
        if self.is_whitespace {
            FragmentStyle::Normal
        } else {
            FragmentStyle::NoWrap
        }
    }

    /// Zero until the fragment has been measured.
    pub fn measured_width(&self) -> f32 {
        self.measured_width.unwrap_or_default()
    }

    pub fn is_measured(&self) -> bool {
        self.measured_width.is_some()
    }

    pub fn handle(&self) -> Option<FragmentHandle> {
        self.handle
    }

    pub(crate) fn record_measurement(&mut self, handle: FragmentHandle, width: f32) {
        self.handle = Some(handle);
        self.measured_width = Some(width);
    }
}
