use log::{debug, info};

use crate::{
    layout::provider::HostElement,
    models::{clamp_config::ClampConfig, clamp_outcome::ClampOutcome},
};

use super::{
    error::ClampError,
    grouper::group_by_line,
    measurer::measure_fragments,
    tokenizer::tokenize,
    truncator::{truncate, DEFAULT_SAFETY_MARGIN},
};

/// Runs measurement passes against a host element.
///
/// Nothing is cached between passes: every call tokenizes, measures and
/// groups the text from scratch against the element's current width.
#[derive(Debug, Clone, Copy)]
pub struct LineClamp {
    safety_margin: f32,
}

impl LineClamp {
    pub fn new() -> Self {
        Self {
            safety_margin: DEFAULT_SAFETY_MARGIN,
        }
    }

    pub fn with_safety_margin(mut self, safety_margin: f32) -> Self {
        self.safety_margin = safety_margin;
        self
    }

    pub fn safety_margin(&self) -> f32 {
        self.safety_margin
    }

    /// Clamps `source` inside `element` to the configured number of lines and
    /// writes the result back into the element.
    pub fn run<E: HostElement + ?Sized>(
        &self,
        element: &mut E,
        config: &ClampConfig,
        source: &str,
    ) -> Result<ClampOutcome, ClampError> {
        let allowed_lines = config.allowed_lines();
        element.clear();
        let mut fragments = tokenize(source);
        measure_fragments(element, &mut fragments);
        let groups = group_by_line(&*element, &fragments)?;
        let realized_lines = groups.len();

        let container_width = element.container_width();
        let overflows_sideways = !groups.is_empty()
            && groups
                .get(realized_lines.min(allowed_lines) - 1)
                .is_some_and(|line| line.content_width() > container_width);
        if overflows_sideways {
            debug!("last visible line runs past {container_width}, cutting it");
        }

        if realized_lines <= allowed_lines && !overflows_sideways {
            debug!("{realized_lines} line(s) fit in {allowed_lines}, restoring text");
            element.set_text_content(source);
            return Ok(ClampOutcome::NoOverflow {
                text: source.to_owned(),
            });
        }

        match truncate(
            element,
            &fragments,
            &groups,
            allowed_lines,
            self.safety_margin,
        ) {
            Some(truncation) => {
                info!(
                    "clamped {realized_lines} lines to {allowed_lines}: '{}'",
                    truncation.text
                );
                element.set_text_content(&truncation.text);
                Ok(ClampOutcome::Clamped {
                    text: truncation.text,
                    realized_lines,
                })
            }
            None => Ok(ClampOutcome::Unresolved { realized_lines }),
        }
    }
}

impl Default for LineClamp {
    fn default() -> Self {
        Self::new()
    }
}
