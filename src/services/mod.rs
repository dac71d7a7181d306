pub mod clamp_binding;
pub mod clamp_service;
pub mod display;
pub mod resize_monitor;
pub mod runnable;
