use crate::llm::Provider;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone)]
pub struct LlmDiagnosticsError {
    pub provider: Provider,
    pub stage: &'static str,
    pub detail: String,
    pub raw_output: Option<String>,
    pub raw_response_json: Option<Value>,
}

impl LlmDiagnosticsError {
    /// `error.message` from an OpenAI-style error body, when the body was JSON.
    pub fn provider_message(&self) -> Option<&str> {
        self.raw_response_json
            .as_ref()?
            .get("error")?
            .get("message")?
            .as_str()
    }
}

impl fmt::Display for LlmDiagnosticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LLM error (provider={:?}, stage={}): {}",
            self.provider, self.stage, self.detail
        )?;
        if let Some(message) = self.provider_message() {
            write!(f, "; message={message}")?;
        } else if let Some(raw) = self.raw_output.as_deref().filter(|s| !s.is_empty()) {
            write!(f, "; body={raw}")?;
        }
        Ok(())
    }
}

impl std::error::Error for LlmDiagnosticsError {}
