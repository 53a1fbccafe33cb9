//! # faqchat: A CLI for `faqchat`
//!
//! Browse the FAQ corpora and ask the FAQ assistant from a terminal.

mod commands;
mod repl;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use faqchat::{
    constants::{DEFAULT_API_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE},
    ChatConfig, Language,
};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Directory holding one `faq.<lang>.json` file per language
    #[arg(long, global = true, env = "FAQCHAT_CORPUS_DIR", default_value = "data")]
    corpus_dir: PathBuf,

    #[command(flatten)]
    chat: ChatArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct ChatArgs {
    /// The chat-completions endpoint
    #[arg(long, global = true, env = "FAQCHAT_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
    /// The model name sent with every request
    #[arg(long, global = true, env = "FAQCHAT_MODEL", default_value = DEFAULT_MODEL)]
    model: String,
    #[arg(long, global = true, env = "FAQCHAT_TEMPERATURE", default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f32,
    /// The bearer credential for the chat-completions endpoint
    #[arg(long, global = true, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

impl From<ChatArgs> for ChatConfig {
    fn from(args: ChatArgs) -> Self {
        ChatConfig {
            api_url: args.api_url,
            model: args.model,
            temperature: args.temperature,
            api_key: args.api_key,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the FAQ entries of a language, grouped by category
    List(ListArgs),
    /// Ask a single question and print the answer
    Ask(AskArgs),
    /// Start an interactive conversation on stdin
    Chat(ReplArgs),
}

#[derive(Parser, Debug)]
struct ListArgs {
    #[arg(long, default_value = "ja")]
    lang: Language,
    /// Only show entries whose question or answer contains this text
    #[arg(long)]
    search: Option<String>,
}

#[derive(Parser, Debug)]
struct AskArgs {
    /// The question to ask
    question: String,
    #[arg(long, default_value = "ja")]
    lang: Language,
}

#[derive(Parser, Debug)]
struct ReplArgs {
    /// The starting language; switch with `/lang <ja|en>`
    #[arg(long, default_value = "ja")]
    lang: Language,
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout only carries answers.
    let subscriber = fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let chat_config = ChatConfig::from(cli.chat);

    match cli.command {
        Commands::List(args) => {
            commands::handle_list(&cli.corpus_dir, args.lang, args.search.as_deref())
        }
        Commands::Ask(args) => {
            commands::handle_ask(&cli.corpus_dir, chat_config, args.lang, &args.question).await
        }
        Commands::Chat(args) => commands::handle_chat(&cli.corpus_dir, chat_config, args.lang).await,
    }
}
