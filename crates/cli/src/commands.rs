//! # Command Handlers

use crate::repl::{parse_line, ReplCommand, HELP};
use anyhow::{ensure, Context, Result};
use faqchat::{
    CategoryOrder, ChatConfig, Conversation, FallbackMessages, FaqAssistant, FaqCorpus,
    FaqLibrary, Language, OpenAiProvider,
};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

fn corpus_path(corpus_dir: &Path, language: Language) -> PathBuf {
    corpus_dir.join(format!("faq.{language}.json"))
}

fn load_corpus(corpus_dir: &Path, language: Language) -> Result<FaqCorpus> {
    let path = corpus_path(corpus_dir, language);
    FaqCorpus::from_path(&path)
        .with_context(|| format!("Failed to load the {} FAQ", language.name()))
}

/// Loads every language that has a corpus file in `corpus_dir`.
fn load_library(corpus_dir: &Path) -> Result<FaqLibrary> {
    let mut library = FaqLibrary::new();
    for language in Language::ALL {
        if corpus_path(corpus_dir, language).exists() {
            library.insert(language, load_corpus(corpus_dir, language)?);
        } else {
            warn!(%language, dir = %corpus_dir.display(), "No FAQ corpus file for language");
        }
    }
    Ok(library)
}

fn build_assistant(
    library: Arc<FaqLibrary>,
    config: &ChatConfig,
    language: Language,
) -> Result<FaqAssistant> {
    let provider = OpenAiProvider::new(config.clone())?
        .with_fallbacks(FallbackMessages::for_language(language));
    Ok(FaqAssistant::new(library, Box::new(provider)))
}

/// Prints the FAQ for `language`, grouped by category in alphabetical order.
pub fn handle_list(corpus_dir: &Path, language: Language, search: Option<&str>) -> Result<()> {
    let corpus = load_corpus(corpus_dir, language)?;
    let matches = corpus.search(search.unwrap_or("").trim());
    info!(%language, matched = matches.len(), total = corpus.len(), "Listing FAQs");

    if matches.is_empty() {
        println!("No matching FAQ entries.");
        return Ok(());
    }

    let mut stdout = std::io::stdout().lock();
    for group in faqchat::corpus::group_entries(matches, CategoryOrder::Alphabetical) {
        writeln!(stdout, "== {} ==", group.category)?;
        for entry in group.entries {
            writeln!(stdout, "Q: {}", entry.question)?;
            writeln!(stdout, "A: {}", entry.answer)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

/// Answers one question and prints the reply. Failures end the process with an error.
pub async fn handle_ask(
    corpus_dir: &Path,
    config: ChatConfig,
    language: Language,
    question: &str,
) -> Result<()> {
    ensure!(!question.trim().is_empty(), "The question must not be empty.");

    let library = FaqLibrary::new().with_corpus(language, load_corpus(corpus_dir, language)?);
    let assistant = build_assistant(Arc::new(library), &config, language)?;

    let reply = assistant.answer(language, &[], question).await?;
    println!("{reply}");
    Ok(())
}

/// Runs a conversation over stdin until `/quit` or end of input.
///
/// Failed turns stay in the transcript, flagged, and are never sent back to
/// the model.
pub async fn handle_chat(corpus_dir: &Path, config: ChatConfig, language: Language) -> Result<()> {
    let library = Arc::new(load_library(corpus_dir)?);
    let mut assistants = HashMap::new();
    for lang in library.languages() {
        assistants.insert(lang, build_assistant(library.clone(), &config, lang)?);
    }

    let mut language = language;
    let mut conversation = Conversation::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("[{}] {HELP}", language.name());
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_line(&line) {
            ReplCommand::Nothing => {}
            ReplCommand::Quit => break,
            ReplCommand::Help => println!("{HELP}"),
            ReplCommand::Clear => {
                conversation.clear();
                println!("Conversation cleared.");
            }
            ReplCommand::SetLanguage(lang) => {
                language = lang;
                println!("Language set to {}.", language.name());
            }
            ReplCommand::Invalid(reason) => println!("{reason}"),
            ReplCommand::Ask(question) => match assistants.get(&language) {
                Some(assistant) => {
                    let turn = assistant.ask(&mut conversation, language, &question).await;
                    if turn.is_error {
                        println!("[error] {}", turn.content);
                    } else {
                        println!("{}", turn.content);
                    }
                }
                None => println!(
                    "No FAQ is loaded for {}. Use /lang to switch.",
                    language.name()
                ),
            },
        }
    }

    info!(turns = conversation.len(), "Chat session ended");
    Ok(())
}
