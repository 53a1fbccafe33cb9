//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic
//! for building it at startup. The state holds the configuration and one
//! `FaqAssistant` per language, each sharing the loaded FAQ library.

use crate::config::AppConfig;
use faqchat::{
    ChatProvider, FallbackMessages, FaqAssistant, FaqLibrary, Language, OpenAiProvider,
};
use std::{collections::HashMap, sync::Arc};
use tracing::info;

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration, loaded from `config.yml`.
    pub config: Arc<AppConfig>,
    /// The FAQ corpora, one per language.
    pub library: Arc<FaqLibrary>,
    /// An assistant per loaded language. Each one carries a provider whose
    /// fallback sentences are in that language.
    pub assistants: Arc<HashMap<Language, FaqAssistant>>,
}

impl AppState {
    /// Builds the state around an already constructed provider, used for every language.
    pub fn with_provider(
        config: AppConfig,
        library: FaqLibrary,
        provider: Box<dyn ChatProvider>,
    ) -> Self {
        let library = Arc::new(library);
        let assistants = library
            .languages()
            .into_iter()
            .map(|lang| {
                let assistant = FaqAssistant::new(library.clone(), provider.clone())
                    .with_digest_options(config.digest);
                (lang, assistant)
            })
            .collect();

        Self {
            config: Arc::new(config),
            library,
            assistants: Arc::new(assistants),
        }
    }

    /// Looks up the assistant for `language`.
    pub fn assistant(&self, language: Language) -> Option<&FaqAssistant> {
        self.assistants.get(&language)
    }
}

/// Builds the shared application state from the configuration.
///
/// - Loads one FAQ corpus file per configured language.
/// - Instantiates an `OpenAiProvider` per language with localized fallbacks.
///
/// A missing credential is not an error here; chat requests report it instead.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let library = FaqLibrary::from_paths(config.corpora.iter().map(|(lang, path)| (*lang, path)))?;
    build_app_state_with_library(config, library)
}

/// Like `build_app_state`, but with a library the caller has already loaded.
pub fn build_app_state_with_library(
    config: AppConfig,
    library: FaqLibrary,
) -> anyhow::Result<AppState> {
    if config.chat.api_key().is_none() {
        tracing::warn!("No chat credential configured. /chat will answer 503 until one is set.");
    }

    let library = Arc::new(library);
    let mut assistants = HashMap::new();
    for lang in library.languages() {
        let provider = OpenAiProvider::new(config.chat.clone())?
            .with_fallbacks(FallbackMessages::for_language(lang));
        let assistant = FaqAssistant::new(library.clone(), Box::new(provider))
            .with_digest_options(config.digest);
        info!(
            language = %lang,
            faq_count = library.get(lang)?.len(),
            model = %config.chat.model,
            "Initialized FAQ assistant."
        );
        assistants.insert(lang, assistant);
    }

    Ok(AppState {
        config: Arc::new(config),
        library,
        assistants: Arc::new(assistants),
    })
}
