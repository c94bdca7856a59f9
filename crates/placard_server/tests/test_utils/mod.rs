//! Test utilities for placard_server tests.

#![allow(dead_code)]

use async_trait::async_trait;
use placard_core::{Content, ContentBlock, GenerateRequest, GenerateResponse};
use placard_error::{ModelsError, ModelsErrorKind, PlacardResult};
use placard_interface::PlacardDriver;
use placard_server::{AppState, PlacardConfig, create_router};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Driver that echoes the last user turn and records requests.
#[derive(Debug, Default)]
pub struct EchoDriver {
    requests: Mutex<Vec<GenerateRequest>>,
    failing: AtomicBool,
}

impl EchoDriver {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().expect("Lock poisoned").clone()
    }
}

#[async_trait]
impl PlacardDriver for EchoDriver {
    async fn generate(&self, request: &GenerateRequest) -> PlacardResult<GenerateResponse> {
        self.requests
            .lock()
            .expect("Lock poisoned")
            .push(request.clone());

        if self.failing.load(Ordering::SeqCst) {
            return Err(ModelsError::new(ModelsErrorKind::Driver(
                "upstream overloaded".to_string(),
            ))
            .into());
        }

        let prompt = request
            .messages()
            .last()
            .map(|m| m.content().text())
            .unwrap_or_default();
        Ok(GenerateResponse::new(Content::Blocks(vec![
            ContentBlock::text(format!("reply to: {}", prompt)),
        ])))
    }

    fn provider_name(&self) -> &'static str {
        "echo"
    }

    fn model_name(&self) -> &str {
        "echo-1"
    }
}

/// Serves a router on an ephemeral port and returns its base URL.
pub async fn spawn(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Server failed");
    });
    format!("http://{}", addr)
}

/// Starts the API over an [`EchoDriver`] with default configuration.
pub async fn spawn_api() -> (String, Arc<EchoDriver>) {
    let driver = Arc::new(EchoDriver::default());
    let state = AppState::with_driver(&PlacardConfig::default(), driver.clone())
        .expect("Failed to build state");
    (spawn(create_router(state)).await, driver)
}
