use crate::domain::request::FinancialModelRequest;

pub const JSON_START: &str = "[JSON_START]";
pub const JSON_END: &str = "[JSON_END]";

#[derive(Debug, Clone, Copy)]
pub struct PromptInput<'a> {
    pub company_name: &'a str,
    pub program_design: Option<&'a str>,
    pub existing_output: Option<&'a str>,
    pub feedback: Option<&'a str>,
}

impl<'a> PromptInput<'a> {
    pub fn from_request(req: &'a FinancialModelRequest) -> Self {
        let (existing_output, feedback) = match req.refinement() {
            Some((output, feedback)) => (Some(output), Some(feedback)),
            None => (None, None),
        };
        Self {
            company_name: req.company_name.trim(),
            program_design: req.program_design(),
            existing_output,
            feedback,
        }
    }
}

pub fn system_prompt() -> String {
    [
        "You are an expert in loyalty program financial modeling and ROI analysis. Create detailed",
        "financial projections that include implementation costs, revenue uplift, and ROI metrics. Consider:",
        "",
        "1. Cost Structure",
        "   - Technology implementation",
        "   - Program administration",
        "   - Rewards and redemption costs",
        "   - Marketing and communication",
        "",
        "2. Revenue Impact",
        "   - Increased purchase frequency",
        "   - Higher average transaction value",
        "   - Improved retention rates",
        "   - New customer acquisition",
        "",
        "3. ROI Analysis",
        "   - Payback period",
        "   - Net present value",
        "   - Internal rate of return",
        "   - Benefit-cost ratio",
        "",
        "Provide your response in two parts:",
        "1. A detailed explanation in natural language",
        "2. A structured JSON object with this exact schema:",
        "{",
        "    \"financial_model\": {",
        "        \"summary\": \"Brief overview of financial projections\",",
        "        \"total_investment\": 1000000.00,",
        "        \"costs\": [",
        "            {",
        "                \"category\": \"Technology\",",
        "                \"year_1\": 500000.00,",
        "                \"year_2\": 100000.00,",
        "                \"year_3\": 100000.00,",
        "                \"description\": \"Description of costs\",",
        "                \"assumptions\": [\"assumption1\", \"assumption2\"]",
        "            }",
        "        ],",
        "        \"revenue_uplift\": [",
        "            {",
        "                \"category\": \"Increased Frequency\",",
        "                \"year_1\": 200000.00,",
        "                \"year_2\": 400000.00,",
        "                \"year_3\": 600000.00,",
        "                \"description\": \"Description of impact\",",
        "                \"assumptions\": [\"assumption1\", \"assumption2\"]",
        "            }",
        "        ],",
        "        \"roi_metrics\": {",
        "            \"payback_period\": \"18 months\",",
        "            \"net_present_value\": 1500000.00,",
        "            \"irr\": 25.5,",
        "            \"benefit_cost_ratio\": 2.5,",
        "            \"key_assumptions\": [\"assumption1\", \"assumption2\"]",
        "        },",
        "        \"sensitivity_analysis\": [\"factor1\", \"factor2\"],",
        "        \"risk_factors\": [\"risk1\", \"risk2\"]",
        "    }",
        "}",
        "",
        "Separate the two parts with [JSON_START] and [JSON_END] markers.",
    ]
    .join("\n")
}

pub fn user_prompt(input: &PromptInput<'_>) -> String {
    let mut prompt = format!(
        "Please create a financial model for {}'s loyalty program.",
        input.company_name
    );

    if let Some(design) = input.program_design.filter(|s| !s.is_empty()) {
        prompt.push_str(&format!("\n\nConsider this program design: {design}"));
    }

    // Refinement only applies when both halves are present.
    if let (Some(output), Some(feedback)) = (
        input.existing_output.filter(|s| !s.is_empty()),
        input.feedback.filter(|s| !s.is_empty()),
    ) {
        prompt.push_str(&format!(
            "\n\nPrevious financial model: {output}\n\nPlease refine the model based on this feedback: {feedback}"
        ));
    }

    prompt
}
