use anyhow::Result;
use clap::Parser;
use gemini_memo::app::AppState;
use gemini_memo::cli::{Cli, Commands};
use gemini_memo::clipboard::{ClipboardSink, MemoSink, StdoutSink};
use gemini_memo::config::Config;
use gemini_memo::logging;
use gemini_memo::notify::{ConsoleNotifier, Notifier};
use gemini_memo::pipeline::{build_summarizer, process_text, read_text};
use gemini_memo::summary::{MemoError, Summarizer, SystemClock};
use gemini_memo::ui::{self, theme::Theme};
use std::io;
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Summarize { text, print }) => {
            logging::init_stderr();
            handle_summarize(cli.key_file.as_deref(), text, print)
        }
        None => {
            logging::init_file()?;
            handle_tui(cli.key_file.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn startup(config: &Config, key_flag: Option<&Path>) -> Result<Summarizer, MemoError> {
    let key_path = config
        .resolve_key_path(key_flag)
        .map_err(|e| MemoError::configuration(e.to_string()))?;
    build_summarizer(config, &key_path)
}

fn handle_tui(key_flag: Option<&Path>) -> Result<()> {
    info!("Starting gmemo");

    let state = match Config::load() {
        Ok(config) => {
            let result = startup(&config, key_flag);
            if let Err(e) = &result {
                error!(error = %e, "Startup failed");
            }
            AppState::from_startup(&config, result, Box::new(ClipboardSink::new()), Box::new(SystemClock))
        }
        Err(e) => {
            error!(error = %e, "Failed to load config");
            AppState::startup_failed(&e, Box::new(ClipboardSink::new()), Box::new(SystemClock), Theme::default())
        }
    };

    let state = ui::run_tui(state)?;

    if let Some(memo) = state.memo_to_hold() {
        hold_clipboard(memo);
    }

    info!("gmemo exiting");
    Ok(())
}

/// The TUI's clipboard handle is gone once it exits; serve the memo until it is pasted.
fn hold_clipboard(memo: &str) {
    let mut sink = ClipboardSink::until_pasted();
    if cfg!(target_os = "linux") {
        eprintln!("The memo stays on the clipboard until it is pasted (Ctrl+C to give up).");
    }
    if let Err(e) = sink.deliver(memo) {
        error!(error = %e, "Failed to hold the clipboard after exit");
        eprintln!("✗ {}: {e}\n\n{memo}", e.kind());
    }
}

fn handle_summarize(key_flag: Option<&Path>, text: Option<String>, print: bool) -> Result<ExitCode> {
    let mut notifier = ConsoleNotifier::new(print);

    let summarizer = match Config::load().and_then(|config| startup(&config, key_flag)) {
        Ok(summarizer) => summarizer,
        Err(e) => {
            error!(error = %e, "Startup failed");
            notifier.report_error(e.kind(), &e.to_string());
            return Ok(ExitCode::FAILURE);
        }
    };

    let edit = || dialoguer::Editor::new().edit("").map_err(|dialoguer::Error::IO(e)| e);
    let Some(text) = read_text(text, &mut io::stdin(), edit, &mut notifier) else {
        return Ok(ExitCode::FAILURE);
    };

    // This process exits right after delivery, so the clipboard must be held until pasted.
    let mut sink: Box<dyn MemoSink> = if print {
        Box::new(StdoutSink)
    } else {
        Box::new(ClipboardSink::until_pasted())
    };

    let outcome = process_text(&summarizer, &text, &SystemClock, sink.as_mut(), &mut notifier);

    Ok(if outcome.is_delivered() {
        ExitCode::SUCCESS
    } else {
        if let Some(memo) = outcome.memo() {
            eprintln!("\n{memo}");
        }
        ExitCode::FAILURE
    })
}
