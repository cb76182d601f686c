//! buddy-chat - a chat widget client with safe message rendering
//!
//! Architecture:
//! - Main thread: reads input, renders the transcript
//! - Backend thread: runs a Tokio runtime for the HTTP call to the chat endpoint
//! - Communication via crossbeam channels

use std::io::{self, BufReader, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::{debug, error};

use buddy_chat::app::ChatApp;
use buddy_chat::config::{self, Settings};
use buddy_chat::error::ChatError;
use buddy_chat::input::{HtmlSink, LineSource};
use buddy_chat::logging;

#[derive(Parser, Debug)]
#[command(name = "buddy-chat", about = "Chat with BUDDY and render messages as HTML", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to settings file (overrides the platform config directory)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Chat endpoint URL
    #[arg(long, env = "BUDDY_ENDPOINT", global = true)]
    endpoint: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one message and print the markup
    Render {
        /// Message text; read from stdin when omitted
        text: Option<String>,
    },
    /// Chat interactively, one message per stdin line
    Chat,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("buddy-chat: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), ChatError> {
    let mut settings = match &cli.config {
        Some(path) => config::load_settings_from(path)?,
        None => config::load_settings()?,
    };
    if let Some(endpoint) = cli.endpoint {
        settings.endpoint = endpoint;
    }
    debug!(endpoint = %settings.endpoint, keywords = settings.keywords.len(), "settings loaded");

    match cli.command {
        Command::Render { text } => render(&settings, text),
        Command::Chat => chat(&settings),
    }
}

fn render(settings: &Settings, text: Option<String>) -> Result<(), ChatError> {
    let raw = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    println!("{}", settings.renderer()?.render(&raw));
    Ok(())
}

fn chat(settings: &Settings) -> Result<(), ChatError> {
    let mut app = ChatApp::new(settings)?;
    let mut source = LineSource::new(BufReader::new(io::stdin()));
    let mut sink = HtmlSink::new(io::stdout(), io::stderr());
    let wait = settings.request_timeout() + Duration::from_secs(1);

    let result = app.run(&mut source, &mut sink, wait);
    app.shutdown();
    result
}
