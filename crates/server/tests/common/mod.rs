//! # Common Test Utilities
//!
//! This module centralizes the test harness used across the `faqchat-server`
//! integration tests.
//!
//! - `TestApp`: spawns a real server on a random port. Its chat provider points
//!   at an `httpmock::MockServer` standing in for the chat-completion service.
//! - Helpers for building configurations and writing corpus files.

// Allow unused code because this is a test utility module, and not all
// functions might be used by every test file that includes it.
#![allow(unused)]

use anyhow::Result;
use faqchat::{ChatConfig, FaqLibrary};
use faqchat_server::{
    config::AppConfig,
    router,
    state::{build_app_state_with_library, AppState},
};
use faqchat_test_utils::sample_library;
use axum::serve;
use httpmock::MockServer;
use reqwest::Client;
use std::net::SocketAddr;
use tokio::{net::TcpListener, task::JoinHandle};

pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";
pub const TEST_API_KEY: &str = "sk-test";

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    pub app_state: AppState,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

/// A configuration whose chat endpoint is the given mock server.
pub fn config_for(mock_server: &MockServer, api_key: Option<&str>) -> AppConfig {
    AppConfig {
        port: 0,
        chat: ChatConfig {
            api_url: mock_server.url(COMPLETIONS_PATH),
            model: "mock-chat-model".to_string(),
            temperature: 0.7,
            api_key: api_key.map(String::from),
        },
        ..AppConfig::default()
    }
}

impl TestApp {
    /// Spawns the server with the sample corpora and a configured credential.
    pub async fn spawn() -> Result<Self> {
        let mock_server = MockServer::start_async().await;
        let config = config_for(&mock_server, Some(TEST_API_KEY));
        Self::spawn_with(config, sample_library()?, mock_server).await
    }

    /// Spawns the server with the sample corpora but no credential at all.
    pub async fn spawn_without_credential() -> Result<Self> {
        let mock_server = MockServer::start_async().await;
        let config = config_for(&mock_server, None);
        Self::spawn_with(config, sample_library()?, mock_server).await
    }

    pub async fn spawn_with(
        config: AppConfig,
        library: FaqLibrary,
        mock_server: MockServer,
    ) -> Result<Self> {
        let app_state = build_app_state_with_library(config, library)?;
        Self::spawn_with_state(app_state, mock_server).await
    }

    pub async fn spawn_with_state(app_state: AppState, mock_server: MockServer) -> Result<Self> {
        dotenvy::dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let app_state_for_harness = app_state.clone();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = router::create_router(app_state);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            app_state: app_state_for_harness,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
