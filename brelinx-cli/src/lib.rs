//! # brelinx-cli
//!
//! CLI foundation: argument parsing, config loading, terminal rendering of the conversation.

pub mod cli;
pub mod terminal_view;

pub use brelinx_chatbot::ChatbotConfig;
pub use cli::{load_config, Cli, Commands, ThemeAction};
pub use terminal_view::TerminalView;
