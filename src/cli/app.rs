//! Interactive session runner
//!
//! The terminal is the external renderer: it only observes controller
//! snapshots and invokes the controller entry points. Start/stop triggers
//! exist only in the wait and recording phases, and the controller guards
//! the transitions regardless.

use std::process::ExitCode;
use std::time::Duration;

use colored::*;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

use crate::application::ports::{ConfigStore, MediaCapture, ReportExporter};
use crate::application::{SessionController, SessionSnapshot};
use crate::domain::config::AppConfig;
use crate::domain::prompt::{prompt_at, prompt_count, PROMPTS};
use crate::domain::session::SessionPhase;
use crate::infrastructure::{
    CpalCapture, FileReportExporter, NoopCapture, TemplateTranscriber, XdgConfigStore,
};

use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Resolved options for one session run
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Use the no-op capture adapter instead of real audio hardware
    pub silent: bool,
    /// Directory the report is exported to
    pub output_dir: String,
    /// Delay between turns
    pub settle_delay: Duration,
    /// Whether to write the report file at the end
    pub export: bool,
}

/// Line-oriented console input, one buffered reader for the whole run
struct Console<R> {
    reader: R,
}

impl Console<BufReader<Stdin>> {
    fn new() -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
        }
    }
}

impl<R: AsyncBufRead + Unpin> Console<R> {
    /// Read one line, trimmed. `None` when the input is closed.
    async fn line(&mut self) -> Option<String> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).await.unwrap_or(0);
        if read == 0 {
            return None;
        }
        Some(line.trim().to_string())
    }

    async fn wait_enter(&mut self, presenter: &Presenter, message: &str) {
        presenter.info(message);
        let _ = self.line().await;
    }

    /// Ask whether to retry after an error; anything but `q` retries.
    /// Closed input reads as quit, so a persistent failure cannot loop
    /// without a user.
    async fn ask_retry(&mut self, presenter: &Presenter) -> bool {
        presenter.info("Pressione 'r' para tentar novamente ou 'q' para sair");
        match self.line().await {
            Some(answer) => answer != "q",
            None => false,
        }
    }
}

/// Load the file config and merge CLI overrides on top
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            Presenter::new().warn(&format!("Could not load config file: {}", e));
            AppConfig::empty()
        }
    };
    file_config.merge(cli_config)
}

/// Run a full interactive session
pub async fn run_session(options: SessionOptions) -> ExitCode {
    let transcriber = TemplateTranscriber::new();
    if options.silent {
        let controller = SessionController::new(NoopCapture::new(), transcriber)
            .with_settle_delay(options.settle_delay);
        drive(controller, options).await
    } else {
        let controller = SessionController::new(CpalCapture::new(), transcriber)
            .with_settle_delay(options.settle_delay);
        drive(controller, options).await
    }
}

/// List the prompt catalog
pub fn list_prompts(presenter: &Presenter) {
    for prompt in PROMPTS {
        presenter.key_value(
            &format!("{}. [{}]", prompt.id(), prompt.domain().label()),
            prompt.text(),
        );
    }
}

async fn drive<M: MediaCapture>(
    controller: SessionController<M, TemplateTranscriber>,
    options: SessionOptions,
) -> ExitCode {
    let mut presenter = Presenter::new();
    let mut console = Console::new();

    print_welcome(&presenter);
    console
        .wait_enter(&presenter, "Pressione Enter para iniciar a análise")
        .await;

    // Initialization plays the first prompt before returning
    print_prompt_card(&presenter, 0);
    presenter.start_spinner("Reproduzindo pergunta...");
    let mut result = controller.initialize().await;
    while let Err(e) = result {
        presenter.spinner_fail(&e.to_string());
        if !console.ask_retry(&presenter).await {
            controller.restart().await;
            return ExitCode::from(EXIT_ERROR);
        }
        presenter.start_spinner("Tentando novamente...");
        result = controller.retry_after_error().await;
    }
    presenter.spinner_success("Pronto para gravar");

    loop {
        let snapshot = controller.snapshot().await;
        match snapshot.phase {
            SessionPhase::WaitingForUser => {
                console
                    .wait_enter(&presenter, "Pressione Enter para gravar sua resposta")
                    .await;
                if let Err(e) = controller.start_turn().await {
                    presenter.error(&e.to_string());
                    if !recover(&controller, &mut presenter, &mut console).await {
                        controller.restart().await;
                        return ExitCode::from(EXIT_ERROR);
                    }
                }
            }
            SessionPhase::Recording => {
                presenter.start_timer("Gravando... pressione Enter para concluir");
                let _ = console.line().await;
                presenter.stop_spinner();
                presenter.start_spinner("Analisando padrões...");
                match controller.stop_turn().await {
                    Ok(()) => {
                        let snapshot = controller.snapshot().await;
                        presenter.spinner_success("Resposta analisada");
                        print_live_stats(&presenter, &snapshot);
                        if snapshot.phase != SessionPhase::Finished {
                            print_prompt_card(&presenter, snapshot.current_index);
                        }
                    }
                    Err(e) => {
                        presenter.spinner_fail(&e.to_string());
                        if !recover(&controller, &mut presenter, &mut console).await {
                            controller.restart().await;
                            return ExitCode::from(EXIT_ERROR);
                        }
                    }
                }
            }
            SessionPhase::Finished => break,
            // Recovery can fall back to a full restart
            SessionPhase::Idle => {
                presenter.start_spinner("Reiniciando sessão...");
                match controller.initialize().await {
                    Ok(()) => {
                        presenter.spinner_success("Pronto para gravar");
                        print_prompt_card(&presenter, 0);
                    }
                    Err(e) => {
                        presenter.spinner_fail(&e.to_string());
                        if !console.ask_retry(&presenter).await {
                            controller.restart().await;
                            return ExitCode::from(EXIT_ERROR);
                        }
                    }
                }
            }
            // Transient phases; the controller calls above block through
            // playback and processing, so these barely surface here.
            _ => tokio::time::sleep(Duration::from_millis(50)).await,
        }
    }

    let snapshot = controller.snapshot().await;
    let report = snapshot.final_report.unwrap_or_default();
    presenter.output(&report);

    if options.export {
        let exporter = FileReportExporter::new(&options.output_dir);
        match exporter.export(&report).await {
            Ok(path) => presenter.success(&format!("Relatório salvo em {}", path.display())),
            Err(e) => presenter.warn(&format!("Falha ao salvar relatório: {}", e)),
        }
    }

    // Release the capture device before exiting
    controller.restart().await;
    ExitCode::from(EXIT_SUCCESS)
}

/// Retry loop after a failed turn; returns false when the user quits
async fn recover<M: MediaCapture, R: AsyncBufRead + Unpin>(
    controller: &SessionController<M, TemplateTranscriber>,
    presenter: &mut Presenter,
    console: &mut Console<R>,
) -> bool {
    loop {
        if !console.ask_retry(presenter).await {
            return false;
        }
        presenter.start_spinner("Recuperando...");
        match controller.retry_after_error().await {
            Ok(()) => {
                presenter.spinner_success("Sessão recuperada");
                return true;
            }
            Err(e) => presenter.spinner_fail(&e.to_string()),
        }
    }
}

fn print_welcome(presenter: &Presenter) {
    presenter.output(&format!(
        "\n{}\n{}\n",
        "DNA - Deep Narrative Analysis".bold(),
        "Análise psicológica através de narrativa pessoal".dimmed()
    ));
    presenter.info(&format!(
        "{} perguntas, ~10 minutos. Cada resposta é gravada e analisada.",
        prompt_count()
    ));
}

fn print_prompt_card(presenter: &Presenter, index: usize) {
    let Some(prompt) = prompt_at(index) else {
        return;
    };
    presenter.output(&format!(
        "\n{} {}\n{}\n",
        presenter.format_turn(index + 1, prompt_count()).bold(),
        format!("[{}]", prompt.domain().label()).cyan(),
        prompt.text()
    ));
}

fn print_live_stats(presenter: &Presenter, snapshot: &SessionSnapshot) {
    let profile = &snapshot.profile;
    let leading = profile
        .dominant_trait()
        .map(|(k, _)| k.as_str())
        .unwrap_or("N/A");
    presenter.info(&format!(
        "Respostas: {} | Metáforas: {} | Padrões: {} | Traço: {}",
        profile.responses(),
        profile.metrics.metaphor_count,
        profile.metrics.contradiction_count,
        leading
    ));
}
