// src/services/assistant.rs
use tracing::{error, warn};

use crate::{
    error::GenerationError,
    message::ChatResult,
    services::{emergency::detect_emergency, gemini::TextGenerator, prompt::build_prompt},
};

pub const APOLOGY: &str = "Извините, произошла ошибка при обработке вашего запроса.";

/// Flags the message, asks the model, and never fails: a generation error
/// becomes the apology text while the flag is kept.
pub async fn process_message(generator: &dyn TextGenerator, user_msg: &str) -> ChatResult {
    let rule = detect_emergency(user_msg);
    if let Some(rule) = rule {
        warn!(?rule, "critical symptoms reported");
    }

    let prompt = build_prompt(user_msg);

    let response = match generator.generate(&prompt).await {
        Ok(text) => text,
        Err(e @ GenerationError::MalformedResponse(_)) => {
            error!("Invalid response format from Gemini API: {}", e);
            APOLOGY.to_string()
        }
        Err(e) => {
            error!("Error sending request to Gemini: {}", e);
            APOLOGY.to_string()
        }
    };

    ChatResult {
        response,
        emergency: rule.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Recorder {
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TextGenerator for Recorder {
        async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
            self.seen.lock().unwrap().push(prompt.to_string());
            Ok("ok".to_string())
        }
    }

    #[tokio::test]
    async fn sends_one_composed_prompt() {
        let recorder = Recorder { seen: Mutex::new(Vec::new()) };
        let result = process_message(&recorder, "болит горло").await;

        assert_eq!(result.response, "ok");
        assert!(!result.emergency);
        let seen = recorder.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], build_prompt("болит горло"));
    }
}
