use thiserror::Error;

/// Errors raised by a single chat-completion exchange.
///
/// Every variant is scoped to one `complete` call. None of them is retried by
/// the library; the caller decides whether to resubmit.
#[derive(Error, Debug)]
pub enum ChatError {
    /// The provider is missing required configuration (usually the API key).
    /// Raised before any network activity.
    #[error("{0}")]
    Configuration(String),
    /// The request never produced a usable response: the network failed, the
    /// service answered with a non-success status, or the body was malformed.
    #[error("{message}")]
    Transport {
        status: Option<u16>,
        message: String,
    },
    /// The outgoing message list violates the chat-completion ordering rules.
    #[error("Invalid chat request: {0}")]
    InvalidRequest(String),
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
}

impl ChatError {
    /// The HTTP status reported by the service, if the failure carried one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ChatError::Transport { status, .. } => *status,
            _ => None,
        }
    }

    /// Whether the failure was detected locally, before a request was sent.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            ChatError::Configuration(_) | ChatError::InvalidRequest(_)
        )
    }
}

/// Errors raised while loading or validating an FAQ corpus.
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Failed to read FAQ corpus '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse FAQ corpus: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate FAQ id '{0}'")]
    DuplicateId(String),
    #[error("FAQ entry '{0}' has an empty category")]
    EmptyCategory(String),
    #[error("No FAQ corpus loaded for language '{0}'")]
    MissingLanguage(String),
}

/// Errors raised while answering a question end to end.
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),
    #[error(transparent)]
    Chat(#[from] ChatError),
}
