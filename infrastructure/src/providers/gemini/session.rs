//! Gemini streaming session.
//!
//! One session per generation attempt. `send_streaming` POSTs the full
//! conversation plus the new prompt to `streamGenerateContent?alt=sse` and
//! spawns a producer task that parses SSE lines off the response body into
//! a bounded channel of [`StreamEvent`]s. The assembly loop on the other
//! end of the channel is the consumer.

use super::types::{
    Content, GenerateContentChunk, GenerateContentRequest, GenerationConfig, Part,
    content_from_message,
};
use async_trait::async_trait;
use futures::StreamExt;
use loom_application::{GenerationError, LlmSession, StreamHandle};
use loom_domain::{Message, Model, StreamEvent};
use reqwest::Client;
use tokio::sync::mpsc;
use tracing::debug;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Capacity of the producer/consumer channel. Small on purpose: the
/// consumer paces itself, and a bounded channel keeps the network task
/// from buffering an entire response ahead of the display.
const STREAM_CHANNEL_CAPACITY: usize = 32;

const TEMPERATURE: f64 = 0.9;
const MAX_OUTPUT_TOKENS: u32 = 8192;

pub struct GeminiSession {
    client: Client,
    api_key: String,
    model: Model,
}

impl GeminiSession {
    pub(super) fn new(client: Client, api_key: String, model: Model) -> Self {
        Self {
            client,
            api_key,
            model,
        }
    }

    fn stream_url(&self) -> String {
        format!(
            "{API_BASE}/models/{}:streamGenerateContent?alt=sse&key={}",
            self.model.as_str(),
            self.api_key
        )
    }
}

#[async_trait]
impl LlmSession for GeminiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send_streaming(
        &self,
        history: &[Message],
        prompt: &str,
    ) -> Result<StreamHandle, GenerationError> {
        let mut contents: Vec<Content> = history.iter().map(content_from_message).collect();
        contents.push(Content {
            role: "user".to_string(),
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        });

        let request = GenerateContentRequest {
            contents,
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        debug!(model = %self.model, "POST streamGenerateContent");

        let response = self
            .client
            .post(self.stream_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::RequestFailed(format!(
                "Gemini API error ({status}): {body}"
            )));
        }

        let (tx, rx) = mpsc::channel(STREAM_CHANNEL_CAPACITY);
        tokio::spawn(pump_sse(response, tx));

        Ok(StreamHandle::new(rx))
    }
}

/// Read the SSE body line by line and forward each fragment as a
/// [`StreamEvent`]. Any fault ends the stream with a terminal `Error`
/// event; a cleanly exhausted body ends it with `Completed`.
async fn pump_sse(response: reqwest::Response, tx: mpsc::Sender<StreamEvent>) {
    pump_lines(response.bytes_stream(), tx).await;
}

/// Line-buffer a byte-chunk stream and forward each SSE data line.
///
/// Buffering stays in bytes: network chunks can split a multi-byte UTF-8
/// character, so decoding happens only on complete lines. Splitting on
/// `b'\n'` is safe because UTF-8 continuation bytes never equal 0x0A.
async fn pump_lines<S, B, E>(stream: S, tx: mpsc::Sender<StreamEvent>)
where
    S: futures::Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: std::fmt::Display,
{
    let mut stream = std::pin::pin!(stream);
    let mut buffer: Vec<u8> = Vec::new();

    while let Some(chunk_result) = stream.next().await {
        let bytes = match chunk_result {
            Ok(bytes) => bytes,
            Err(e) => {
                let _ = tx.send(StreamEvent::Error(e.to_string())).await;
                return;
            }
        };

        buffer.extend_from_slice(bytes.as_ref());

        // Process complete lines; a partial line stays buffered
        while let Some(line_end) = buffer.iter().position(|&b| b == b'\n') {
            let line_bytes: Vec<u8> = buffer.drain(..=line_end).collect();
            let line = String::from_utf8_lossy(&line_bytes);

            let Some(payload) = sse_payload(line.trim()) else {
                continue;
            };

            match serde_json::from_str::<GenerateContentChunk>(payload) {
                Ok(chunk) => {
                    if let Some(err) = chunk.error {
                        let _ = tx.send(StreamEvent::Error(err.message)).await;
                        return;
                    }
                    let event = match chunk.text() {
                        Some(text) => StreamEvent::Delta(text),
                        None => StreamEvent::Metadata,
                    };
                    if tx.send(event).await.is_err() {
                        // Consumer gone; nothing left to do
                        return;
                    }
                }
                Err(e) => {
                    let _ = tx
                        .send(StreamEvent::Error(format!("Malformed fragment: {e}")))
                        .await;
                    return;
                }
            }
        }
    }

    let _ = tx.send(StreamEvent::Completed).await;
}

/// Extract the JSON payload from one SSE line. Comment lines, empty
/// keep-alives, and non-data fields yield `None`.
fn sse_payload(line: &str) -> Option<&str> {
    let payload = line.strip_prefix("data:")?.trim();
    (!payload.is_empty()).then_some(payload)
}
