//! Multi-line text clamping with an ellipsis.
//!
//! A [`LineClamp`] pass splits text into words and whitespace runs, attaches
//! them to a live inline layout through [`MeasurementProvider`], groups them by
//! the line they landed on and, when more lines were realized than allowed,
//! cuts the text at a grapheme boundary so it ends in `"..."` on the last
//! allowed line. [`ClampBinding`] keeps an element clamped across mount,
//! resizes and teardown.

pub mod engine;
pub mod event_bus;
pub mod helpers;
pub mod layout;
pub mod models;
pub mod services;

pub use engine::{error::ClampError, line_clamp::LineClamp, truncator::DEFAULT_SAFETY_MARGIN};
pub use layout::{
    cell_surface::CellSurface,
    provider::{FragmentHandle, FragmentStyle, HostElement, MeasurementProvider, Placement},
};
pub use models::{
    clamp_config::ClampConfig,
    clamp_outcome::{ClampOutcome, ELLIPSIS},
};
pub use services::clamp_binding::{BindingState, ClampBinding};
