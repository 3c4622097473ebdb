use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use promptkit::{Prompt, PromptBackend, PromptError, PromptOptions};
use promptkit_dialoguer::DialoguerBackend;
use promptkit_requestty::RequesttyBackend;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Backend {
    Dialoguer,
    Requestty,
}

/// Pick items from a list by toggling them, then finish with "Done".
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Prompt renderer to use.
    #[arg(long, value_enum, default_value_t = Backend::Dialoguer)]
    backend: Backend,

    /// Disable colors (dialoguer only).
    #[arg(long)]
    plain: bool,

    /// Label shown above the list.
    #[arg(long, default_value = promptkit::DEFAULT_MULTI_SELECT_LABEL)]
    label: String,

    /// Label of the entry that finishes the selection.
    #[arg(long, default_value = promptkit::DEFAULT_DONE_LABEL)]
    done_label: String,

    /// Also ask for a name, an age and a confirmation before the list.
    #[arg(long)]
    profile: bool,

    /// Items to choose from.
    #[arg(default_values_t = ["cheese".to_string(), "ham".to_string(), "mushrooms".to_string()])]
    items: Vec<String>,
}

fn run<B: PromptBackend>(prompt: &Prompt<B>, args: &Args) -> Result<(), PromptError> {
    if args.profile {
        let name = prompt.ask_string(&["What is your name?"])?;
        let age = prompt.ask_int("How old are you?", 30)?;
        if !prompt.ask_bool(&format!("Continue as {name} ({age})?"))? {
            println!("Nothing to do.");
            return Ok(());
        }
    }

    let selected = prompt.select_multiple(args.items.iter().cloned())?;
    info!(count = selected.len(), "selection complete");

    if selected.is_empty() {
        println!("Nothing selected.");
    } else {
        for item in selected {
            println!("{item}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let options = PromptOptions::default()
        .with_multi_select_label(args.label.as_str())
        .with_done_label(args.done_label.as_str());

    let result = match args.backend {
        Backend::Dialoguer => {
            let backend = if args.plain {
                DialoguerBackend::plain()
            } else {
                DialoguerBackend::new()
            };
            run(&Prompt::new(backend).with_options(options), &args)
        }
        Backend::Requestty => {
            let prompt = Prompt::new(RequesttyBackend::new()).with_options(options);
            run(&prompt, &args)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_cancelled() => {
            eprintln!("Cancelled.");
            ExitCode::from(130)
        }
        Err(err) if err.is_aborted() => {
            eprintln!("Selection abandoned: {err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
