//! brelinx CLI: chat with the site assistant, classify messages, build the contact link, flip the theme.
//! Config from env (.env supported).

use anyhow::{Context, Result};
use brelinx_chatbot::{
    build_orchestrator, init_tracing, ChatbotConfig, ConversationLog, KnowledgeBase, PendingReply,
};
use brelinx_cli::{load_config, Cli, Commands, TerminalView, ThemeAction};
use clap::Parser;
use site::{ContactForm, NotificationCenter, NotificationKind, ThemeStore};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config()?;
    init_tracing(&config.log_file, config.console_level()?).context("Initialize logging")?;
    info!(command = ?cli.command, "brelinx started");

    match cli.command {
        Commands::Chat => run_chat(&config).await,
        Commands::Ask { text } => handle_ask(&config, &text).await,
        Commands::Classify { text } => {
            let knowledge = KnowledgeBase::builtin()?;
            println!("{}", knowledge.classify(&text));
            Ok(())
        }
        Commands::Contact {
            name,
            email,
            message,
        } => handle_contact(&config, ContactForm::new(name, email, message)),
        Commands::Theme { action } => handle_theme(&config, action),
    }
}

/// Interactive loop over stdin. Each line is one message; a bare number picks a quick reply.
/// Pending replies still in flight when the session ends are aborted.
async fn run_chat(config: &ChatbotConfig) -> Result<()> {
    let view = Arc::new(TerminalView::new(std::io::stdout()));
    let orchestrator = build_orchestrator(config, view.clone())?;
    let mut pending: Vec<PendingReply> = Vec::new();

    println!("Chat with Brelinx. Type /quit to leave.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Read stdin")? {
        if line.trim() == "/quit" {
            break;
        }
        let scheduled = match view.quick_reply_choice(&line) {
            Some(reply) => orchestrator.handle_quick_reply(&reply).await,
            None => orchestrator.handle_user_message(&line).await,
        };
        match scheduled {
            Ok(Some(reply)) => pending.push(reply),
            Ok(None) => {}
            Err(e) => error!(error = %e, "Failed to handle message"),
        }
        pending.retain(|p| !p.is_finished());
    }

    for reply in &pending {
        reply.abort();
    }
    info!(aborted = pending.len(), "Chat session ended");
    Ok(())
}

/// Sends one message through the orchestrator and prints the reply with its quick replies.
async fn handle_ask(config: &ChatbotConfig, text: &str) -> Result<()> {
    let log = Arc::new(ConversationLog::new());
    let orchestrator = build_orchestrator(config, log.clone())?;

    let Some(pending) = orchestrator.handle_user_message(text).await? else {
        anyhow::bail!("Nothing to send: message is empty");
    };
    let reply = pending
        .wait()
        .await
        .context("Reply was not rendered")?;

    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", reply.content)?;
    for quick in &reply.quick_replies {
        writeln!(out, "  - {} ({})", quick.label, quick.message)?;
    }
    Ok(())
}

fn handle_contact(config: &ChatbotConfig, form: ContactForm) -> Result<()> {
    let mut notifications = NotificationCenter::new();
    match form.whatsapp_url(&config.whatsapp_number) {
        Ok(url) => {
            notifications.show("Redirecting to WhatsApp...", NotificationKind::Success);
            if let Some(n) = notifications.current() {
                eprintln!("{}", n.message);
            }
            println!("{}", url);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn handle_theme(config: &ChatbotConfig, action: ThemeAction) -> Result<()> {
    let store = ThemeStore::new(&config.theme_pref_path);
    let theme = match action {
        ThemeAction::Show => store.load(),
        ThemeAction::Toggle => store
            .toggle()
            .with_context(|| format!("Save theme preference to {}", config.theme_pref_path))?,
    };
    println!("{} ({})", theme, theme.icon());
    Ok(())
}
