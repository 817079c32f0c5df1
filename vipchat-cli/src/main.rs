//! CLI entry point for vipchat

use anyhow::Result;
use chrono::{DateTime, Local, Utc};
use clap::{Parser, Subcommand};
use console::style;
use dialoguer::{Confirm, Input};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use vipchat_chat::ChatEngine;
use vipchat_core::config::{Config, ConfigLoader};
use vipchat_core::session::{ChatMessage, Role, SessionStore};
use vipchat_core::utils::{expand_home, truncate_chars};
use vipchat_core::{constants, logging};
use vipchat_responder::CannedResponder;

#[derive(Parser)]
#[command(name = "vipchat")]
#[command(about = "Zenith Comp AI Assistant in the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration directory
    #[arg(short, long, global = true)]
    config_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat
    Chat {
        /// Session id to resume
        #[arg(short, long)]
        session: Option<String>,
    },
    /// Manage chat history
    Sessions {
        #[command(subcommand)]
        command: SessionCommands,
    },
}

#[derive(Subcommand)]
enum SessionCommands {
    /// List saved sessions, newest first
    List,
    /// Show the messages of a session
    Show { id: String },
    /// Delete a session and its messages
    Delete { id: String },
    /// Delete all chat history
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let loader = match &cli.config_dir {
        Some(dir) => ConfigLoader::with_dir(dir),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;
    let _guard = logging::init_logging(&config.logging);

    let store = SessionStore::open(expand_home(&config.storage.data_dir));

    match cli.command {
        Commands::Chat { session } => run_chat(store, &config, session).await,
        Commands::Sessions { command } => run_sessions(store, &config, command),
    }
}

async fn run_chat(store: SessionStore, config: &Config, session: Option<String>) -> Result<()> {
    println!(
        "{}",
        style(format!("== {} ==", constants::APP_NAME)).bold().blue()
    );
    println!("{}", style(constants::BRAND_TAGLINE).dim());
    println!(
        "{}",
        style("พิมพ์ข้อความเพื่อเริ่มการสนทนา (/new เริ่มแชทใหม่, /exit ออก)").dim()
    );
    println!();

    let mut engine = ChatEngine::new(
        store,
        Arc::new(CannedResponder::new()),
        config.chat.clone(),
    );
    if let Some(id) = session {
        engine = engine.with_session(id);
        for message in engine.messages() {
            render_message(&message);
        }
    }

    loop {
        let line: String = match Input::<String>::new()
            .with_prompt(style("คุณ").cyan().bold().to_string())
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            Err(_) => break,
        };

        match line.trim() {
            "" => continue,
            "/exit" | "/quit" => break,
            "/new" => {
                engine = ChatEngine::new(
                    SessionStore::open(expand_home(&config.storage.data_dir)),
                    Arc::new(CannedResponder::new()),
                    config.chat.clone(),
                );
                println!("{}", style("เริ่มการสนทนาใหม่แล้ว").dim());
                continue;
            }
            text => {
                let spinner = typing_spinner();
                let outcome = engine.send(text).await;
                spinner.finish_and_clear();

                match outcome {
                    Ok(outcome) => render_message(&outcome.reply),
                    Err(e) => println!("{}", style(e.to_string()).red()),
                }
            }
        }
    }

    if let Some(id) = engine.session_id() {
        info!(session_id = %id, "chat ended");
        println!("{}", style(format!("บันทึกไว้ใน session {}", id)).dim());
    }
    Ok(())
}

fn run_sessions(mut store: SessionStore, config: &Config, command: SessionCommands) -> Result<()> {
    match command {
        SessionCommands::List => {
            let sessions = store.list_sessions();
            if sessions.is_empty() {
                println!("{}", style("ยังไม่มีประวัติการสนทนา").dim());
                return Ok(());
            }
            for summary in sessions {
                println!(
                    "{}  {}  {}",
                    style(&summary.id).green(),
                    style(truncate_chars(&summary.title, 30)).bold(),
                    style(relative_time(summary.timestamp)).dim()
                );
                println!("    {}", style(truncate_chars(&summary.preview, 40)).dim());
            }
        }
        SessionCommands::Show { id } => {
            let messages = store.load_messages(&id);
            if messages.is_empty() {
                println!("{}", style(format!("ไม่พบ session {}", id)).dim());
                return Ok(());
            }
            // Display window mirrors the UI's history cap
            let start = messages.len().saturating_sub(config.chat.max_messages_history);
            for message in &messages[start..] {
                render_message(message);
            }
        }
        SessionCommands::Delete { id } => {
            store.delete_session(&id);
            println!("ลบ session {} แล้ว", style(&id).green());
        }
        SessionCommands::Clear { yes } => {
            let confirmed = yes
                || Confirm::new()
                    .with_prompt("คุณต้องการลบประวัติการสนทนาทั้งหมดหรือไม่?")
                    .default(false)
                    .interact()?;
            if confirmed {
                store.clear_all();
                println!("{}", style("ลบประวัติการสนทนาทั้งหมดแล้ว").bold());
            }
        }
    }
    Ok(())
}

fn render_message(message: &ChatMessage) {
    let time = message
        .timestamp
        .with_timezone(&Local)
        .format("%H:%M")
        .to_string();

    match message.role {
        Role::User => {
            println!(
                "{} {}  {}",
                style("คุณ").cyan().bold(),
                style(time).dim(),
                message.content
            );
        }
        Role::Assistant => {
            println!(
                "{} {}  {}",
                style("Zenith AI").green().bold(),
                style(time).dim(),
                message.content
            );
        }
        Role::System => {
            println!("{}", style(&message.content).red());
        }
    }
    println!();
}

fn typing_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("static template is valid"),
    );
    spinner.set_message("กำลังพิมพ์...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

/// Relative time label for the session list
fn relative_time(timestamp: DateTime<Utc>) -> String {
    let local = timestamp.with_timezone(&Local);
    let days = (Local::now().date_naive() - local.date_naive()).num_days();

    if days <= 0 {
        local.format("%H:%M").to_string()
    } else if days == 1 {
        "เมื่อวาน".to_string()
    } else if days < 7 {
        format!("{} วันที่แล้ว", days)
    } else {
        local.format("%-d %b").to_string()
    }
}
