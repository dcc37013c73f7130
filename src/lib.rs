pub mod ai;
pub mod cli;
pub mod config;
pub mod prompts;
pub mod results;

pub use cli::{BatchHandler, Cli, Commands};
pub use config::Settings;
pub use results::ResponseRecord;
