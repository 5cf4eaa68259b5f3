use serde::{Deserialize, Serialize};

// Chat completions request format (OpenAI-compatible)
#[derive(Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub response_format: ResponseFormat,
    pub temperature: f64,
    pub max_tokens: u32,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: String,
}

// Chat completions response format
#[derive(Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

// Error body shape returned by the upstream on non-success statuses
#[derive(Deserialize, Default)]
pub struct UpstreamErrorBody {
    #[serde(default)]
    pub error: UpstreamErrorDetail,
}

#[derive(Deserialize, Default)]
pub struct UpstreamErrorDetail {
    #[serde(default)]
    pub message: String,
}

// Endpoint request bodies. Missing fields deserialize to empty strings so
// the handlers can answer with their own 400 instead of an extractor error.

#[derive(Deserialize)]
pub struct RealityScanRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityDesignerRequest {
    #[serde(default)]
    pub old_assumption: String,
}

#[derive(Deserialize)]
pub struct SimulationRequest {
    #[serde(default)]
    pub scenario: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReviewRequest {
    #[serde(default)]
    pub week_summary: String,
}

// Endpoint response shapes, parsed from the model's JSON output. Fields the
// model omits default to empty rather than failing the whole response.

#[derive(Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RealityScanResponse {
    pub patterns: Vec<String>,
    pub beliefs: Vec<String>,
    pub distortions: Vec<String>,
    pub identity_narratives: Vec<String>,
    pub reframes: Vec<String>,
    pub new_assumptions: Vec<String>,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentityDesignerResponse {
    pub reframed_assumption: String,
    pub identity_shift: String,
    pub anchors: Vec<String>,
    pub narrative_upgrade: String,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimulationPath {
    pub summary: String,
    pub steps: Vec<String>,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationDelta {
    pub behavior_changes: Vec<String>,
    pub outcome_differences: Vec<String>,
    pub identity_impact: Vec<String>,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationResponse {
    pub path_a: SimulationPath,
    pub path_b: SimulationPath,
    pub delta: SimulationDelta,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyCalibrationResponse {
    pub identity_statement: String,
    pub recommended_action: String,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct WeeklyReviewResponse {
    pub weekly_theme: String,
    pub observed_patterns: Vec<String>,
    pub next_week_orientation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_model_fields_default_to_empty() {
        let parsed: RealityScanResponse =
            serde_json::from_str(r#"{"patterns": ["avoidance"]}"#).unwrap();
        assert_eq!(parsed.patterns, vec!["avoidance"]);
        assert!(parsed.beliefs.is_empty());
        assert!(parsed.new_assumptions.is_empty());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let response = IdentityDesignerResponse {
            reframed_assumption: "x".into(),
            identity_shift: "y".into(),
            anchors: vec![],
            narrative_upgrade: "z".into(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["reframedAssumption"], "x");
        assert_eq!(json["identityShift"], "y");
        assert_eq!(json["narrativeUpgrade"], "z");
    }

    #[test]
    fn simulation_shape_round_trips() {
        let raw = r#"{
            "pathA": {"summary": "stays put", "steps": ["a", "b"]},
            "pathB": {"summary": "moves", "steps": ["c"]},
            "delta": {"behaviorChanges": ["d"], "outcomeDifferences": [], "identityImpact": ["e"]}
        }"#;
        let parsed: SimulationResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.path_a.steps.len(), 2);
        assert_eq!(parsed.delta.identity_impact, vec!["e"]);

        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["pathB"]["summary"], "moves");
        assert_eq!(json["delta"]["behaviorChanges"][0], "d");
    }

    #[test]
    fn request_fields_default_when_missing() {
        let parsed: WeeklyReviewRequest = serde_json::from_str("{}").unwrap();
        assert!(parsed.week_summary.is_empty());
    }
}
