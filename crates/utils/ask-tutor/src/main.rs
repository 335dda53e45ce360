//! # Ask Tutor
//!
//! Terminal host for the docs tutor conversation core. Talks to the same chat
//! backend as the browser widget, so it doubles as a quick way to poke at a
//! running backend without a docs site.
//!
//! ## Usage
//!
//! ```bash
//! TUTOR_API_URL=http://localhost:8000 TUTOR_CHAPTER_SLUG=module-1/nodes \
//!     cargo run --package ask-tutor --bin ask_tutor
//! ```
//!
//! Lines are sent as questions. `/select <text>` stands in for highlighting
//! text on a page; see `/help` for the rest.

mod command;

use std::cell::RefCell;

use lib_core::{
    ConversationClient, HttpTransport, SelectionObserver, SendOutcome, Session, Turn, WidgetConfig,
};
use shared::utils::{format_source_label, selection_preview};
use tokio::io::{AsyncBufReadExt, BufReader};

use command::Command;

fn init_tracing() -> anyhow::Result<()> {
    // Quiet by default, the conversation goes to stdout
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "warn".to_string())
        .to_lowercase();

    let filter = match log_level.as_str() {
        "trace" => tracing_subscriber::EnvFilter::new("trace"),
        "debug" => tracing_subscriber::EnvFilter::new("debug"),
        "info" => tracing_subscriber::EnvFilter::new("info"),
        "error" => tracing_subscriber::EnvFilter::new("error"),
        _ => tracing_subscriber::EnvFilter::new("warn"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn print_turn(turn: &Turn) {
    println!();
    println!("tutor> {}", turn.content());
    if let Some(sources) = turn.sources().filter(|s| !s.is_empty()) {
        let labels: Vec<String> = sources.iter().map(|s| format_source_label(s)).collect();
        println!("        Sources: {}", labels.join(", "));
    }
    println!();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    let config = WidgetConfig::from_env()?;

    println!("============================================");
    println!("  Docs Tutor");
    println!("============================================");
    println!("Backend: {}", config.chat_endpoint());
    if let Some(slug) = &config.chapter_slug {
        println!("Chapter: {}", slug);
    }
    println!("Type /help for commands.");
    println!();

    let transport = HttpTransport::new(&config)?;
    let client = ConversationClient::new(transport, config);
    let session = RefCell::new(Session::new());
    let observer = SelectionObserver;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match command::parse(&line) {
            Command::Ask(question) => {
                if question.trim().is_empty() {
                    continue;
                }
                match client.send_message(&session, question).await {
                    SendOutcome::Answered | SendOutcome::Failed => {
                        if let Some(turn) = session.borrow().turns().last() {
                            print_turn(turn);
                        }
                    }
                    SendOutcome::Ignored | SendOutcome::Unmounted => {}
                }
            }
            Command::Select(text) => {
                let source = || Some(text.to_string());
                if observer.on_selection_end(&source, &session) {
                    if let Some(selected) = session.borrow().pending_selection() {
                        println!("Selected: \"{}\"", selection_preview(selected));
                    }
                } else {
                    println!("Selection too short, ignored.");
                }
            }
            Command::Unselect => {
                session.borrow_mut().set_pending_selection(None);
                println!("Selection dismissed.");
            }
            Command::Clear => {
                session.borrow_mut().clear();
                println!("Conversation cleared.");
            }
            Command::Help => println!("{}", command::HELP),
            Command::Quit => break,
            Command::Unknown(name) => println!("Unknown command /{}. Type /help.", name),
        }
    }

    if let Some(id) = session.borrow().session_id() {
        tracing::info!(session_id = %id, "Conversation ended");
    }
    println!("Bye.");
    Ok(())
}
