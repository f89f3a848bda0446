//! DNA CLI entry point

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use dna_session::cli::{
    app::{list_prompts, load_merged_config, run_session, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
    SessionOptions,
};
use dna_session::domain::config::AppConfig;
use dna_session::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Prompts) => {
            list_prompts(&presenter);
            return ExitCode::SUCCESS;
        }
        None => {}
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        output_dir: cli.output_dir.clone(),
        settle_delay_ms: cli.settle_delay_ms,
        silent: if cli.silent { Some(true) } else { None },
        no_export: if cli.no_export { Some(true) } else { None },
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    let options = SessionOptions {
        silent: config.silent_or_default(),
        output_dir: config.output_dir_or_default(),
        settle_delay: Duration::from_millis(config.settle_delay_ms_or_default()),
        export: !config.no_export_or_default(),
    };

    run_session(options).await
}
