use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key the prompt asks the model to wrap the financial model under.
pub const FINANCIAL_MODEL_KEY: &str = "financial_model";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostProjection {
    pub category: String,
    pub year_1: f64,
    pub year_2: f64,
    pub year_3: f64,
    pub description: String,
    pub assumptions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueProjection {
    pub category: String,
    pub year_1: f64,
    pub year_2: f64,
    pub year_3: f64,
    pub description: String,
    pub assumptions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiMetrics {
    /// Free text such as "18 months".
    pub payback_period: String,
    pub net_present_value: f64,
    /// Percentage points.
    pub irr: f64,
    pub benefit_cost_ratio: f64,
    pub key_assumptions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialModel {
    pub summary: String,
    pub total_investment: f64,
    pub costs: Vec<CostProjection>,
    pub revenue_uplift: Vec<RevenueProjection>,
    pub roi_metrics: RoiMetrics,
    pub sensitivity_analysis: Vec<String>,
    pub risk_factors: Vec<String>,
}

impl FinancialModel {
    /// Checks that the structured payload returned by the model matches the
    /// documented schema. Accepts either the `{"financial_model": {...}}`
    /// envelope requested by the prompt or a bare model object.
    pub fn from_structured(structured: &Map<String, Value>) -> anyhow::Result<Self> {
        let body = match structured.get(FINANCIAL_MODEL_KEY) {
            Some(inner) => inner.clone(),
            None => Value::Object(structured.clone()),
        };
        serde_json::from_value::<FinancialModel>(body)
            .context("structured data does not match the financial model schema")
    }
}
