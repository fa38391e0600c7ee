// src/models.rs

use crate::constants::NEUTRAL_EMOTION;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Successful reply from `POST /api/chat`.
///
/// The backend may tag a reply with the emotion it detected in the user's
/// message; `neutral` and an absent field mean the same thing to the client.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub emotion: Option<String>,
}

impl ChatReply {
    /// Returns the detected emotion when it is worth surfacing, i.e. present,
    /// non-empty, and not `neutral`.
    pub fn notable_emotion(&self) -> Option<&str> {
        match self.emotion.as_deref() {
            Some(emotion) if !emotion.is_empty() && emotion != NEUTRAL_EMOTION => Some(emotion),
            _ => None,
        }
    }
}

/// Backend reachability as reported by the one-shot startup probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthState {
    Unknown,
    Online,
    Offline,
}

/// Logs details of each API call.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiCallLog {
    pub timestamp: DateTime<Utc>,
    pub endpoint: String,
    pub request_summary: String,
    pub response_status: u16,
    pub response_time_ms: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notable_emotion_skips_neutral() {
        let reply = ChatReply {
            response: "hello".to_string(),
            emotion: Some("neutral".to_string()),
        };
        assert_eq!(reply.notable_emotion(), None);
    }

    #[test]
    fn notable_emotion_skips_absent() {
        let reply = ChatReply {
            response: "hello".to_string(),
            emotion: None,
        };
        assert_eq!(reply.notable_emotion(), None);
    }

    #[test]
    fn notable_emotion_surfaces_other_labels() {
        let reply = ChatReply {
            response: "hello".to_string(),
            emotion: Some("happy".to_string()),
        };
        assert_eq!(reply.notable_emotion(), Some("happy"));
    }

    #[test]
    fn chat_reply_parses_without_emotion_field() {
        let reply: ChatReply = serde_json::from_str(r#"{"response": "hi"}"#).unwrap();
        assert_eq!(reply.response, "hi");
        assert!(reply.emotion.is_none());
    }
}
