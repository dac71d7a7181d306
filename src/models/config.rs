use std::fs::{self, File};

use toml::{Table, Value};

use crate::{
    engine::truncator::DEFAULT_SAFETY_MARGIN, helpers, models::clamp_config::DEFAULT_ALLOWED_LINES,
};

use super::args::Args;

/// Settings from `config.toml`, overridden by command line arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub allowed_lines: usize,
    pub safety_margin: f32,
    pub settle_delay_ms: u64,
    pub resize_debounce_ms: u64,
    pub poll_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allowed_lines: DEFAULT_ALLOWED_LINES,
            safety_margin: DEFAULT_SAFETY_MARGIN,
            settle_delay_ms: 100,
            resize_debounce_ms: 0,
            poll_interval_ms: 100,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_dir = helpers::dir::get_and_create_dir(dirs::config_dir)?;
        let config_path = config_dir.join("config.toml");

        if File::create_new(&config_path).is_ok() {
            log::info!("No config file found, new created");
        }

        Config::parse(&fs::read_to_string(config_path)?)
    }

    pub fn parse(file_str: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let table: Table = file_str.parse()?;

        let mut config = Config::default();
        table.iter().for_each(|(k, v)| match k.as_str() {
            "allowed_lines" => {
                if let Some(lines) = positive_integer(k, v) {
                    config.allowed_lines = lines as usize;
                }
            }
            "safety_margin" => match v.as_float().or_else(|| v.as_integer().map(|i| i as f64)) {
                Some(margin) if margin >= 0.0 => config.safety_margin = margin as f32,
                _ => log::warn!("'{k}' expects a non-negative number, got '{v}'"),
            },
            "settle_delay_ms" => {
                if let Some(ms) = non_negative_integer(k, v) {
                    config.settle_delay_ms = ms;
                }
            }
            "resize_debounce_ms" => {
                if let Some(ms) = non_negative_integer(k, v) {
                    config.resize_debounce_ms = ms;
                }
            }
            "poll_interval_ms" => {
                if let Some(ms) = positive_integer(k, v) {
                    config.poll_interval_ms = ms;
                }
            }
            _ => log::warn!("Got unknown key while parsing config: '{k}'"),
        });

        Ok(config)
    }

    pub fn apply_args(&mut self, args: &Args) {
        if let Some(lines) = args.lines {
            self.allowed_lines = lines;
        }
        if let Some(margin) = args.margin {
            self.safety_margin = margin;
        }
        if let Some(ms) = args.settle_delay_ms {
            self.settle_delay_ms = ms;
        }
        if let Some(ms) = args.debounce_ms {
            self.resize_debounce_ms = ms;
        }
    }
}

fn non_negative_integer(k: &str, v: &Value) -> Option<u64> {
    match v.as_integer() {
        Some(i) if i >= 0 => Some(i as u64),
        _ => {
            log::warn!("'{k}' expects a non-negative integer, got '{v}'");
            None
        }
    }
}

fn positive_integer(k: &str, v: &Value) -> Option<u64> {
    match non_negative_integer(k, v) {
        Some(0) => {
            log::warn!("'{k}' must be at least 1");
            None
        }
        other => other,
    }
}
