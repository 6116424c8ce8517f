use clap::Parser;
use std::path::PathBuf;

use crate::sim::config::DEFAULT_TIME_STEP;

/// Interactive spring-mass graph layout viewer
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Graph file to load (JSON); the bundled demo graph is used when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Start with the solver running
    #[arg(long)]
    pub solver: bool,

    /// Initial time-step scalar
    #[arg(long, default_value_t = DEFAULT_TIME_STEP)]
    pub time_step: f32,
}
