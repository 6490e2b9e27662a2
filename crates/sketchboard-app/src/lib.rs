//! Sketchboard Application
//!
//! Headless host for the drawing engine: loads configuration, replays
//! session scripts over a software pixel buffer and exports PNG files.

mod cli;
mod config;
mod error;
mod session;

pub use cli::{Cli, run};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use session::{HostCommand, Session, SessionAction, load_script, parse_script};
