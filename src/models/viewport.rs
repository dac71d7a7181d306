use bincode::{Decode, Encode};

#[derive(Debug, Clone, Copy, Encode, Decode, PartialEq, Eq)]
pub struct Viewport {
    pub columns: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }
}

/// Notifications a host sends to a mounted clamp.
#[derive(Debug, Clone, Encode, Decode, PartialEq)]
pub enum HostEvent {
    Resized(Viewport),
    Teardown,
}
