//! Gemini API request/response wire types.

use loom_domain::{Message, Role};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(super) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub(super) struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub(super) struct Part {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub(super) struct GenerationConfig {
    pub temperature: f64,
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
}

/// One streamed chunk of a `streamGenerateContent` response.
///
/// A chunk may carry text parts, may be metadata-only (safety ratings,
/// usage counters — `text` absent), or may carry an in-body error object.
#[derive(Debug, Deserialize)]
pub(super) struct GenerateContentChunk {
    pub candidates: Option<Vec<Candidate>>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ApiError {
    pub message: String,
}

impl GenerateContentChunk {
    /// Concatenated text of all parts in this chunk, or `None` if the
    /// chunk carries no text at all.
    pub fn text(&self) -> Option<String> {
        let candidates = self.candidates.as_ref()?;
        let mut out = String::new();
        let mut saw_text = false;
        for candidate in candidates {
            let Some(content) = &candidate.content else {
                continue;
            };
            for part in &content.parts {
                if let Some(text) = &part.text {
                    out.push_str(text);
                    saw_text = true;
                }
            }
        }
        saw_text.then_some(out)
    }
}

/// Convert a transcript message to the Gemini `contents` entry.
///
/// Gemini names the assistant role "model".
pub(super) fn content_from_message(message: &Message) -> Content {
    let role = match message.role {
        Role::User => "user",
        Role::Assistant => "model",
    };
    Content {
        role: role.to_string(),
        parts: vec![Part {
            text: message.content.clone(),
        }],
    }
}
