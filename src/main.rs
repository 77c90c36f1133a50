//! aidesk - terminal AI assistant
//!
//! Generate responses, translate text, open websites and search music
//! platforms, one-shot or in an interactive session.

use aidesk::assistant::{self, Assistant};
use aidesk::config::{Config, Secrets};
use aidesk::dispatcher::Outcome;
use aidesk::error::AssistError;
use aidesk::input::{self, InputMethod};
use aidesk::session::{self, RunReport, Session, SessionCommand};
use aidesk::tables::{LookupTable, LANGUAGES};
use aidesk::task::{Task, TaskInputs};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config.json (defaults to the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask the generative model a question
    Generate {
        /// Record the question from the microphone instead
        #[arg(long)]
        audio: bool,
        question: Vec<String>,
    },
    /// Translate text into another language
    Translate {
        /// Target language code or name (e.g. 'es' or 'Spanish')
        #[arg(short, long)]
        to: String,
        text: Vec<String>,
    },
    /// Open a known website
    Open { website: Vec<String> },
    /// Search for a song on a music platform
    Play {
        /// Spotify, YouTube or Apple Music
        #[arg(short, long)]
        platform: String,
        song: Vec<String>,
    },
    /// List known websites
    Sites,
    /// List known music platforms
    Platforms,
    /// List language names accepted by translate
    Languages,
    /// Interactive session (default)
    Interactive,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    dotenvy::dotenv().ok();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Setup logging
    let level = if args.verbose {
        Level::DEBUG
    } else {
        config.log_level.parse().unwrap_or(Level::INFO)
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    debug!("aidesk v{} starting", env!("CARGO_PKG_VERSION"));

    let secrets = Secrets::from_env();
    for warning in assistant::startup_warnings(&config, &secrets) {
        report_warning(&warning);
    }

    let assistant = Assistant::from_config(&config, &secrets)?;

    let code = match args.command.unwrap_or(Command::Interactive) {
        Command::Generate { audio, question } => {
            let method = if audio {
                InputMethod::Audio
            } else {
                InputMethod::Text
            };
            let acquired =
                input::acquire(method, &question.join(" "), assistant.recognizer()).await;
            if let Some(notice) = &acquired.notice {
                report_error(notice);
            }
            let inputs = TaskInputs::question(acquired.text);
            run_once(&assistant, Task::GenerateResponse, &inputs).await
        }
        Command::Translate { to, text } => {
            let inputs = TaskInputs::translation(text.join(" "), to);
            run_once(&assistant, Task::TranslateText, &inputs).await
        }
        Command::Open { website } => {
            let inputs = TaskInputs::website(website.join(" "));
            run_once(&assistant, Task::OpenWebsite, &inputs).await
        }
        Command::Play { platform, song } => {
            let inputs = TaskInputs::music(platform, song.join(" "));
            run_once(&assistant, Task::PlayMusic, &inputs).await
        }
        Command::Sites => list_table(assistant.dispatcher.websites()),
        Command::Platforms => list_table(assistant.dispatcher.platforms()),
        Command::Languages => list_table(&LANGUAGES),
        Command::Interactive => interactive(&assistant).await?,
    };

    Ok(code)
}

async fn run_once(assistant: &Assistant, task: Task, inputs: &TaskInputs) -> ExitCode {
    match assistant.dispatcher.dispatch(task, inputs).await {
        Ok(outcome) => {
            print_outcome(&outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn list_table(table: &LookupTable) -> ExitCode {
    for (name, target) in table.iter() {
        println!("{:<14} {}", name, target);
    }
    ExitCode::SUCCESS
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Response(_) | Outcome::Translation(_) => println!("{}", outcome),
        Outcome::Opened { .. } | Outcome::Playing { .. } => println!("✅ {}", outcome),
    }
}

fn report_error(err: &AssistError) {
    eprintln!("❌ {}", err);
}

/// Printed regardless of the configured log level
fn report_warning(warning: &str) {
    eprintln!("⚠️ {}", warning);
}

fn print_report(report: &RunReport) {
    if let Some(notice) = &report.notice {
        report_error(notice);
    }
    match &report.result {
        Ok(outcome) => print_outcome(outcome),
        Err(e) => report_error(e),
    }
}

async fn interactive(assistant: &Assistant) -> Result<ExitCode> {
    let mut session = Session::default();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("aidesk - type 'help' for commands");
    for task in Task::ALL {
        if !assistant.dispatcher.is_available(task) {
            println!("  ({} is disabled)", task);
        }
    }

    loop {
        print!("[{}] > ", session.task());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match session::parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                report_error(&e);
                continue;
            }
        };

        match command {
            SessionCommand::Task(task) => {
                session.select(task);
                println!("{}", session.summary());
            }
            SessionCommand::Set(field, value) => {
                if let Err(e) = session.set(field, value) {
                    report_error(&e);
                }
            }
            SessionCommand::Input(method) => session.set_method(method),
            SessionCommand::Listen => match session.listen(assistant.recognizer()).await {
                Ok(Some(notice)) => report_error(&notice),
                Ok(None) => println!("Recognized: {}", session.inputs().question),
                Err(e) => report_error(&e),
            },
            SessionCommand::Run => {
                info!("{}...", session.task().action());
                let report = session
                    .run(&assistant.dispatcher, assistant.recognizer())
                    .await;
                print_report(&report);
            }
            SessionCommand::Clear => {
                session.clear();
                println!("Cleared {}", session.task());
            }
            SessionCommand::Show => println!("{}", session.summary()),
            SessionCommand::Tasks => {
                for (i, task) in Task::ALL.iter().enumerate() {
                    println!("  {}. {}", i + 1, task);
                }
            }
            SessionCommand::Help => println!("{}", session::HELP),
            SessionCommand::Quit => break,
        }
    }

    Ok(ExitCode::SUCCESS)
}
