//! Test utilities for placard_design tests.
//!
//! Provides a scripted driver that answers like a well-behaved design model.

#![allow(dead_code)]

use async_trait::async_trait;
use placard_core::{Content, ContentBlock, GenerateRequest, GenerateResponse};
use placard_error::{ModelsError, ModelsErrorKind, PlacardResult};
use placard_interface::PlacardDriver;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Driver that records every request and answers based on the last user turn.
#[derive(Debug, Default)]
pub struct ScriptedDriver {
    requests: Mutex<Vec<GenerateRequest>>,
    failing: AtomicBool,
    empty: AtomicBool,
    latency: Option<Duration>,
}

impl ScriptedDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Driver that yields to the runtime for `latency` inside every call.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency: Some(latency),
            ..Self::default()
        }
    }

    /// Makes every following call answer with no content at all.
    pub fn set_empty(&self, empty: bool) {
        self.empty.store(empty, Ordering::SeqCst);
    }

    /// Makes every following call fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().expect("Lock poisoned").clone()
    }

    pub fn last_request(&self) -> GenerateRequest {
        self.requests().pop().expect("At least one request")
    }
}

#[async_trait]
impl PlacardDriver for ScriptedDriver {
    async fn generate(&self, request: &GenerateRequest) -> PlacardResult<GenerateResponse> {
        self.requests
            .lock()
            .expect("Lock poisoned")
            .push(request.clone());

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        if self.empty.load(Ordering::SeqCst) {
            return Ok(GenerateResponse::new(Content::Blocks(Vec::new())));
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(
                ModelsError::new(ModelsErrorKind::Driver("model unavailable".to_string())).into(),
            );
        }

        let prompt = request
            .messages()
            .last()
            .map(|m| m.content().text())
            .unwrap_or_default();

        let reply = if let Some(rest) = prompt.strip_prefix("I choose option ") {
            let option = rest.split('.').next().unwrap_or_default();
            Content::Blocks(vec![ContentBlock::text(format!(
                "\\documentclass[a4paper]{{article}}\n% style option {}\n\\begin{{document}}\nWinter Event\n\\end{{document}}",
                option
            ))])
        } else if prompt.starts_with("Here is the current LaTeX code:") {
            Content::Blocks(vec![ContentBlock::text(
                "\\documentclass[a4paper]{article}\n% updated\n\\begin{document}\nWinter Event\n\\end{document}",
            )])
        } else if prompt.contains("brand guideline document") {
            Content::Blocks(vec![ContentBlock::text(
                "You are a design assistant for Acme.\n- Colors:\n  * Acme Red (#D0021B)",
            )])
        } else {
            Content::Blocks(vec![ContentBlock::text(
                "Here are three styles:\n1. Minimal washed green\n2. Bold burnt orange\n3. Pale sky blue",
            )])
        };

        Ok(GenerateResponse::new(reply))
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model-v1"
    }
}
