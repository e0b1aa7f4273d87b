use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreviousData {
    #[serde(default)]
    pub loyalty_program_design: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentPromptData {
    pub existing_generated_output: String,
    pub user_feedback: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialModelRequest {
    pub company_name: String,
    #[serde(default)]
    pub previous_data: Option<PreviousData>,
    #[serde(default)]
    pub current_prompt_data: Option<CurrentPromptData>,
    /// Passed through untouched; prompt construction does not read it.
    #[serde(default)]
    pub other_input_data: Option<Map<String, Value>>,
}

impl FinancialModelRequest {
    pub fn program_design(&self) -> Option<&str> {
        self.previous_data
            .as_ref()
            .and_then(|p| p.loyalty_program_design.as_deref())
    }

    /// Returns `(existing_generated_output, user_feedback)` when refinement
    /// data was supplied.
    pub fn refinement(&self) -> Option<(&str, &str)> {
        self.current_prompt_data.as_ref().map(|c| {
            (
                c.existing_generated_output.as_str(),
                c.user_feedback.as_str(),
            )
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialModelResponse {
    pub generated_output: String,
    pub structured_data: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn company_name_only_deserializes_with_defaults() {
        let req: FinancialModelRequest =
            serde_json::from_value(json!({ "company_name": "Acme Corp" })).unwrap();
        assert_eq!(req.company_name, "Acme Corp");
        assert!(req.program_design().is_none());
        assert!(req.refinement().is_none());
        assert!(req.other_input_data.is_none());
    }

    #[test]
    fn nested_fields_are_extracted() {
        let req: FinancialModelRequest = serde_json::from_value(json!({
            "company_name": "Acme Corp",
            "previous_data": { "loyalty_program_design": "tiered points" },
            "current_prompt_data": {
                "existing_generated_output": "old model",
                "user_feedback": "lower costs"
            },
            "other_input_data": { "region": "EU" }
        }))
        .unwrap();
        assert_eq!(req.program_design(), Some("tiered points"));
        assert_eq!(req.refinement(), Some(("old model", "lower costs")));
        assert_eq!(req.other_input_data.unwrap()["region"], "EU");
    }

    #[test]
    fn empty_previous_data_has_no_design() {
        let req: FinancialModelRequest = serde_json::from_value(json!({
            "company_name": "Acme Corp",
            "previous_data": {}
        }))
        .unwrap();
        assert!(req.program_design().is_none());
    }

    #[test]
    fn partial_prompt_data_is_rejected() {
        let res = serde_json::from_value::<FinancialModelRequest>(json!({
            "company_name": "Acme Corp",
            "current_prompt_data": { "user_feedback": "lower costs" }
        }));
        assert!(res.is_err());
    }
}
