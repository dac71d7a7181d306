pub mod args;
pub mod clamp_config;
pub mod clamp_outcome;
pub mod clamp_report;
pub mod config;
pub mod fragment;
pub mod line_group;
pub mod sample_posts;
pub mod viewport;
