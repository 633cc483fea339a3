//! CLI parser and config loading.

use anyhow::Result;
use brelinx_chatbot::ChatbotConfig;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "brelinx")]
#[command(about = "Brelinx site assistant CLI", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Chat with the assistant interactively (type a quick-reply number to pick it, /quit to leave).
    Chat,
    /// Send one message and print the reply once it arrives.
    Ask {
        /// Message text
        text: String,
    },
    /// Print the topic a message resolves to.
    Classify {
        text: String,
    },
    /// Build the WhatsApp link the contact form redirects to.
    Contact {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        message: String,
    },
    /// Show or toggle the saved light/dark theme.
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Toggle,
}

/// Load and validate config from environment.
pub fn load_config() -> Result<ChatbotConfig> {
    let config = ChatbotConfig::load()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ask() {
        let cli = Cli::try_parse_from(["brelinx", "ask", "what services do you offer"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Ask {
                text: "what services do you offer".to_string()
            }
        );
    }

    #[test]
    fn test_parse_contact_requires_all_fields() {
        assert!(Cli::try_parse_from(["brelinx", "contact", "-n", "Jane", "-e", "j@x.io"]).is_err());
        let cli = Cli::try_parse_from([
            "brelinx", "contact", "-n", "Jane", "-e", "j@x.io", "-m", "Hi",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Contact { .. }));
    }

    #[test]
    fn test_parse_theme_toggle() {
        let cli = Cli::try_parse_from(["brelinx", "theme", "toggle"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Theme {
                action: ThemeAction::Toggle
            }
        );
    }
}
