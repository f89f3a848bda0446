//! Config subcommand handling

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;

use super::args::ConfigAction;
use super::presenter::Presenter;

/// Handle `dna config <action>`
pub async fn handle_config_command(
    action: ConfigAction,
    store: &impl ConfigStore,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Show => {
            let config = store.load().await?;
            let display = |value: Option<String>| value.unwrap_or_else(|| "(unset)".to_string());
            presenter.key_value("output_dir", &display(config.output_dir));
            presenter.key_value(
                "settle_delay_ms",
                &display(config.settle_delay_ms.map(|v| v.to_string())),
            );
            presenter.key_value("silent", &display(config.silent.map(|v| v.to_string())));
            presenter.key_value(
                "no_export",
                &display(config.no_export.map(|v| v.to_string())),
            );
            Ok(())
        }
        ConfigAction::Path => {
            presenter.output(&store.path().display().to_string());
            Ok(())
        }
        ConfigAction::Init => {
            store.init().await?;
            presenter.success(&format!("Config written to {}", store.path().display()));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::XdgConfigStore;

    #[tokio::test]
    async fn init_then_show_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        handle_config_command(ConfigAction::Init, &store, &presenter)
            .await
            .unwrap();
        handle_config_command(ConfigAction::Show, &store, &presenter)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn double_init_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        handle_config_command(ConfigAction::Init, &store, &presenter)
            .await
            .unwrap();
        let err = handle_config_command(ConfigAction::Init, &store, &presenter)
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists(_)));
    }
}
