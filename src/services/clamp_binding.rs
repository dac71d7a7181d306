use log::{debug, info};

use crate::{
    engine::{error::ClampError, line_clamp::LineClamp},
    layout::provider::HostElement,
    models::{clamp_config::ClampConfig, clamp_outcome::ClampOutcome},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    /// The element is hidden while a pass is in flight.
    Measuring,
    /// The element shows the final text.
    Settled,
    TornDown,
}

/// Keeps one element clamped across its lifetime: first pass on mount,
/// a fresh pass on every resize, nothing after teardown.
pub struct ClampBinding<E: HostElement> {
    element: E,
    config: ClampConfig,
    engine: LineClamp,
    source: Option<String>,
    state: BindingState,
    last_outcome: Option<ClampOutcome>,
}

impl<E: HostElement> ClampBinding<E> {
    /// Hides the element until the first pass has settled.
    pub fn new(mut element: E, config: ClampConfig, engine: LineClamp) -> Self {
        element.set_visible(false);
        element.apply_clamp_styles();

        Self {
            element,
            config,
            engine,
            source: None,
            state: BindingState::Measuring,
            last_outcome: None,
        }
    }

    /// Captures the source text and runs the first pass.
    pub fn mount(&mut self) -> Result<ClampOutcome, ClampError> {
        self.ensure_live()?;

        let source = match self.config.source_text() {
            Some(text) => text.to_owned(),
            None => self.element.text_content(),
        };
        info!(
            "mounting clamp of {} line(s) over {} chars",
            self.config.allowed_lines(),
            source.chars().count()
        );
        self.source = Some(source);
        self.recompute()
    }

    /// Throws away the previous pass and clamps again at the current width.
    pub fn on_resize(&mut self) -> Result<ClampOutcome, ClampError> {
        self.ensure_live()?;

        if self.source.is_none() {
            debug!("resize before mount, mounting instead");
            return self.mount();
        }
        self.recompute()
    }

    pub fn teardown(&mut self) {
        if self.state != BindingState::TornDown {
            info!("tearing down clamp binding");
            self.state = BindingState::TornDown;
        }
    }

    fn ensure_live(&self) -> Result<(), ClampError> {
        if self.state == BindingState::TornDown {
            debug!("ignoring trigger on a torn down binding");
            return Err(ClampError::TornDown);
        }
        Ok(())
    }

    fn recompute(&mut self) -> Result<ClampOutcome, ClampError> {
        self.state = BindingState::Measuring;
        self.element.set_visible(false);

        let source = self.source.clone().unwrap_or_default();
        self.element.set_text_content(&source);

        let result = if source.is_empty() {
            Ok(ClampOutcome::NoOverflow { text: source })
        } else {
            self.engine.run(&mut self.element, &self.config, &source)
        };

        self.element.set_visible(true);
        self.state = BindingState::Settled;

        let outcome = result?;
        self.last_outcome = Some(outcome.clone());
        Ok(outcome)
    }

    pub fn state(&self) -> BindingState {
        self.state
    }

    pub fn last_outcome(&self) -> Option<&ClampOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    /// For hosts that change the element's geometry before `on_resize`.
    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }
}
