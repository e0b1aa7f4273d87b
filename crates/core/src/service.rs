use crate::domain::financial_model::FinancialModel;
use crate::domain::request::{FinancialModelRequest, FinancialModelResponse};
use crate::llm::json::{self, ParseError};
use crate::llm::prompt::{self, PromptInput};
use crate::llm::CompletionClient;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("{0}")]
    Validation(String),

    #[error("{0:#}")]
    Provider(anyhow::Error),

    #[error("Failed to parse structured data from response: {0}")]
    Parse(#[from] ParseError),

    #[error("Structured data failed schema validation: {0:#}")]
    Schema(anyhow::Error),
}

/// Builds prompts, calls the completion provider once and splits the answer.
#[derive(Clone)]
pub struct FinancialModelGenerator {
    client: Arc<dyn CompletionClient>,
    strict_schema: bool,
}

impl FinancialModelGenerator {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client,
            strict_schema: false,
        }
    }

    /// Rejects structured data that does not deserialize into [`FinancialModel`].
    pub fn with_strict_schema(mut self, strict: bool) -> Self {
        self.strict_schema = strict;
        self
    }

    pub async fn generate(
        &self,
        req: &FinancialModelRequest,
    ) -> Result<FinancialModelResponse, GenerateError> {
        if req.company_name.trim().is_empty() {
            return Err(GenerateError::Validation(
                "company_name must be non-empty".to_string(),
            ));
        }

        let input = PromptInput::from_request(req);
        let system = prompt::system_prompt();
        let user = prompt::user_prompt(&input);

        tracing::info!(
            provider = ?self.client.provider(),
            has_program_design = input.program_design.is_some(),
            is_refinement = input.existing_output.is_some(),
            extra_input_keys = req.other_input_data.as_ref().map_or(0, |m| m.len()),
            "requesting financial model completion"
        );

        let completion = self
            .client
            .complete(&system, &user)
            .await
            .map_err(GenerateError::Provider)?;

        let parsed = match json::split_completion(&completion) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    completion_len = completion.len(),
                    "completion did not follow the two-part contract"
                );
                return Err(err.into());
            }
        };

        if self.strict_schema {
            FinancialModel::from_structured(&parsed.structured_data)
                .map_err(GenerateError::Schema)?;
        }

        Ok(FinancialModelResponse {
            generated_output: parsed.analysis,
            structured_data: parsed.structured_data,
        })
    }
}
