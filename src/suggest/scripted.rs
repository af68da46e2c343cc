//! Scripted provider for tests and offline runs.
//!
//! Replays a fixed reply (or error) for every request and counts calls.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{SuggestError, SuggestionProvider};

#[derive(Debug)]
enum Script {
    Reply(String),
    Fail(Mutex<Option<SuggestError>>),
}

#[derive(Debug)]
pub struct ScriptedProvider {
    script: Script,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    /// Always answer with `reply`
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            script: Script::Reply(reply.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fail the first request with `error`; later requests fail with `RequestFailed`
    pub fn failing(error: SuggestError) -> Self {
        Self {
            script: Script::Fail(Mutex::new(Some(error))),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of completions requested so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SuggestionProvider for ScriptedProvider {
    async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, SuggestError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.script {
            Script::Reply(reply) => Ok(reply.clone()),
            Script::Fail(error) => {
                let taken = error.lock().ok().and_then(|mut e| e.take());
                Err(taken.unwrap_or_else(|| {
                    SuggestError::RequestFailed("scripted failure already consumed".to_string())
                }))
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}
