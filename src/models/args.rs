use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(version, about)]
pub struct Args {
    /// Text to clamp, read from stdin when omitted
    pub text: Option<String>,

    /// Maximum number of visible lines
    #[arg(short, long)]
    pub lines: Option<usize>,

    /// Container width in columns, defaults to the terminal width
    #[arg(short, long)]
    pub width: Option<u16>,

    /// Columns kept free after the ellipsis on the last line
    #[arg(long)]
    pub margin: Option<f32>,

    /// Delay before the first pass, in ms
    #[arg(long)]
    pub settle_delay_ms: Option<u64>,

    /// Quiet period after the last resize before clamping again, in ms
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Keep running and clamp again whenever the terminal is resized
    #[arg(long, default_value_t = false)]
    pub watch: bool,

    /// Clamp the sample post titles
    #[arg(long, default_value_t = false)]
    pub demo: bool,
}
