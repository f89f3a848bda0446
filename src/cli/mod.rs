//! CLI layer - argument parsing, presentation, and the interactive runner

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

pub use app::{run_session, SessionOptions};
pub use args::{Cli, Commands, ConfigAction};
pub use presenter::Presenter;
