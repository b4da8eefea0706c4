// src/message.rs
use serde::{Deserialize, Serialize};

pub const DEFAULT_GREETING: &str = "Здравствуйте";

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    pub ques: Option<String>,
}

impl ChatRequest {
    /// The patient's message, or the greeting when `ques` is missing or empty.
    pub fn message(&self) -> &str {
        match self.ques.as_deref() {
            Some(q) if !q.is_empty() => q,
            _ => DEFAULT_GREETING,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResult {
    #[serde(rename = "resp")]
    pub response: String,
    pub emergency: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_question_falls_back_to_greeting() {
        assert_eq!(ChatRequest::default().message(), DEFAULT_GREETING);
        let req = ChatRequest { ques: Some(String::new()) };
        assert_eq!(req.message(), DEFAULT_GREETING);
    }

    #[test]
    fn whitespace_question_is_kept() {
        let req = ChatRequest { ques: Some(" ".to_string()) };
        assert_eq!(req.message(), " ");
    }

    #[test]
    fn result_serializes_with_short_field_name() {
        let result = ChatResult { response: "ok".to_string(), emergency: true };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({ "resp": "ok", "emergency": true }));
    }
}
