/// Post titles of the sample blog listing, clamped to three lines.
pub const SAMPLE_TITLES: [&str; 3] = [
    "This is a text that has no overflow, just standard wrapping",
    "This is a text that exceeds the height of its container and an ellipsis should be inserted",
    "Another example of a text that exceeds the height of its container.",
];

/// Width of a post card in the sample listing.
pub const SAMPLE_COLUMNS: u16 = 24;
