use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ClampError {
    #[error("allowed lines must be at least 1, got {0}")]
    InvalidLineCount(usize),

    #[error("fragment {0} is no longer attached to the element")]
    DetachedFragment(usize),

    #[error("clamp binding was used after teardown")]
    TornDown,
}
