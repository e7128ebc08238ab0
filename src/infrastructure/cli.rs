use clap::Parser;

use crate::utils::version;

pub const DEFAULT_TICK_RATE: f64 = 4.0;
pub const DEFAULT_FRAME_RATE: f64 = 60.0;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(short, long, value_name = "FLOAT", help = "Tick rate, i.e. number of ticks per second")]
    pub tick_rate: Option<f64>,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second"
    )]
    pub frame_rate: Option<f64>,
}

impl Cli {
    /// Command line flag, then config value, then built-in default
    pub fn resolve_rates(&self, config_tick: Option<f64>, config_frame: Option<f64>) -> (f64, f64) {
        (
            self.tick_rate.or(config_tick).unwrap_or(DEFAULT_TICK_RATE),
            self.frame_rate.or(config_frame).unwrap_or(DEFAULT_FRAME_RATE),
        )
    }
}
