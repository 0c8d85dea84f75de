//! Generate Story use case.
//!
//! The streaming assembly loop: compose the prompt, open a session seeded
//! with the full transcript, consume the fragment stream into an
//! accumulated buffer, and commit the exchange to the transcript only once
//! the stream has ended cleanly.
//!
//! Any fault is terminal for the attempt — no retry, no partial commit.
//! The transcript is guaranteed untouched unless the attempt fully
//! succeeds.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GenerationError, LlmGateway, SetupError};
use crate::ports::progress::ProgressNotifier;
use loom_domain::{Model, PromptTemplate, StreamEvent, Transcript};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Default pacing delay applied after each appended fragment.
///
/// A presentation throttle only — it paces how quickly incremental output
/// becomes observable and has no effect on the assembled result.
pub const DEFAULT_PACING: Duration = Duration::from_millis(30);

/// Errors that can occur during story generation.
///
/// Session construction and streaming keep their distinct error types;
/// callers can tell the categories apart by matching the variant.
#[derive(Error, Debug)]
pub enum GenerateStoryError {
    #[error("Error initializing model session: {0}")]
    Setup(#[from] SetupError),

    #[error("Error generating content: {0}")]
    Generation(#[from] GenerationError),
}

/// Input for the [`GenerateStoryUseCase`].
#[derive(Debug, Clone)]
pub struct GenerateStoryInput {
    /// The raw user-entered prompt.
    pub prompt: String,
    /// Which model to generate with.
    pub model: Model,
}

impl GenerateStoryInput {
    pub fn new(prompt: impl Into<String>, model: Model) -> Self {
        Self {
            prompt: prompt.into(),
            model,
        }
    }
}

/// Use case for generating one story exchange.
///
/// Flow:
/// 1. Compose the prompt (fixed narrative prefix + trimmed input)
/// 2. Create a session for the requested model
/// 3. Stream fragments, appending text deltas to the response buffer
/// 4. On clean stream end, commit (user, assistant) to the transcript
pub struct GenerateStoryUseCase {
    gateway: Arc<dyn LlmGateway>,
    template: PromptTemplate,
    pacing: Duration,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl GenerateStoryUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            template: PromptTemplate::new(),
            pacing: DEFAULT_PACING,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Override the pacing delay applied after each fragment.
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Disable pacing entirely (tests, non-interactive runs).
    pub fn without_pacing(self) -> Self {
        self.with_pacing(Duration::ZERO)
    }

    /// Attach a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Execute one generation attempt.
    ///
    /// On success the assembled story is returned and the exchange is
    /// committed to `transcript`. On failure the transcript is unchanged.
    pub async fn execute(
        &self,
        input: GenerateStoryInput,
        transcript: &mut Transcript,
        progress: &dyn ProgressNotifier,
    ) -> Result<String, GenerateStoryError> {
        let user_text = input.prompt.trim().to_string();
        let composed = self.template.render(&input.prompt);

        let session = self.gateway.create_session(&input.model).await?;

        // Context is the full ledger, not the display window. Growth is
        // unbounded by design; log the size so it stays observable.
        debug!(
            model = %input.model,
            context_messages = transcript.len(),
            "Opening streaming exchange"
        );

        let mut handle = session.send_streaming(transcript.messages(), &composed).await?;

        progress.on_stream_start();
        let mut story = String::new();

        loop {
            match handle.next().await {
                Some(StreamEvent::Delta(chunk)) => {
                    story.push_str(&chunk);
                    progress.on_chunk(&chunk);
                    if !self.pacing.is_zero() {
                        tokio::time::sleep(self.pacing).await;
                    }
                }
                Some(StreamEvent::Metadata) => {}
                Some(StreamEvent::Error(e)) => {
                    progress.on_stream_end();
                    warn!(error = %e, "Generation attempt failed mid-stream");
                    self.conversation_logger.log(ConversationEvent::new(
                        "generation_failed",
                        serde_json::json!({
                            "model": input.model,
                            "prompt": user_text,
                            "error": e,
                        }),
                    ));
                    return Err(GenerationError::StreamInterrupted(e).into());
                }
                // Completed marker or channel close: normal exhaustion
                Some(StreamEvent::Completed) | None => break,
            }
        }

        progress.on_stream_end();

        transcript.commit(user_text.clone(), story.clone());
        self.conversation_logger.log(ConversationEvent::new(
            "exchange",
            serde_json::json!({
                "model": input.model,
                "prompt": user_text,
                "response": story,
            }),
        ));

        info!(
            model = %input.model,
            response_chars = story.len(),
            transcript_messages = transcript.len(),
            "Story generated"
        );

        Ok(story)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::{LlmSession, StreamHandle};
    use crate::ports::progress::NoProgress;
    use async_trait::async_trait;
    use loom_domain::{Message, Role};
    use std::sync::Mutex;
    use tokio::sync::mpsc;

    // ==================== Test Mocks ====================

    struct MockSession {
        model: Model,
        events: Mutex<Option<Vec<StreamEvent>>>,
        seen_context_len: Arc<Mutex<Option<usize>>>,
        seen_prompt: Arc<Mutex<Option<String>>>,
    }

    impl MockSession {
        fn new(events: Vec<StreamEvent>) -> Self {
            Self {
                model: Model::Flash,
                events: Mutex::new(Some(events)),
                seen_context_len: Arc::new(Mutex::new(None)),
                seen_prompt: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl LlmSession for MockSession {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn send_streaming(
            &self,
            history: &[Message],
            prompt: &str,
        ) -> Result<StreamHandle, GenerationError> {
            *self.seen_context_len.lock().unwrap() = Some(history.len());
            *self.seen_prompt.lock().unwrap() = Some(prompt.to_string());

            let events = self
                .events
                .lock()
                .unwrap()
                .take()
                .ok_or(GenerationError::TransportClosed)?;

            let (tx, rx) = mpsc::channel(events.len().max(1));
            for event in events {
                tx.try_send(event).expect("channel sized to fit");
            }
            Ok(StreamHandle::new(rx))
        }
    }

    struct MockGateway {
        session: Mutex<Option<Box<dyn LlmSession>>>,
    }

    impl MockGateway {
        fn new(session: impl LlmSession + 'static) -> Self {
            Self {
                session: Mutex::new(Some(Box::new(session))),
            }
        }
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        async fn create_session(&self, _model: &Model) -> Result<Box<dyn LlmSession>, SetupError> {
            self.session
                .lock()
                .unwrap()
                .take()
                .ok_or_else(|| SetupError::ConnectionError("Session already taken".to_string()))
        }

        fn available_models(&self) -> Vec<Model> {
            Model::all().to_vec()
        }
    }

    /// Gateway that always fails session construction.
    struct BrokenGateway;

    #[async_trait]
    impl LlmGateway for BrokenGateway {
        async fn create_session(&self, _model: &Model) -> Result<Box<dyn LlmSession>, SetupError> {
            Err(SetupError::MissingCredential)
        }

        fn available_models(&self) -> Vec<Model> {
            vec![]
        }
    }

    fn deltas(texts: &[&str]) -> Vec<StreamEvent> {
        let mut events: Vec<StreamEvent> =
            texts.iter().map(|t| StreamEvent::Delta(t.to_string())).collect();
        events.push(StreamEvent::Completed);
        events
    }

    fn use_case_with(events: Vec<StreamEvent>) -> GenerateStoryUseCase {
        GenerateStoryUseCase::new(Arc::new(MockGateway::new(MockSession::new(events))))
            .without_pacing()
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn assembles_fragments_in_order() {
        let use_case = use_case_with(deltas(&["Once ", "upon ", "a time"]));
        let mut transcript = Transcript::new();

        let story = use_case
            .execute(
                GenerateStoryInput::new("a robot who learns empathy", Model::Flash),
                &mut transcript,
                &NoProgress,
            )
            .await
            .unwrap();

        assert_eq!(story, "Once upon a time");
        assert_eq!(transcript.len(), 2);
        assert_eq!(
            transcript.messages()[0],
            Message::user("a robot who learns empathy")
        );
        assert_eq!(
            transcript.messages()[1],
            Message::assistant("Once upon a time")
        );
    }

    #[tokio::test]
    async fn metadata_fragments_contribute_nothing() {
        let use_case = use_case_with(vec![
            StreamEvent::Delta("Hi".to_string()),
            StreamEvent::Metadata,
            StreamEvent::Delta(" there".to_string()),
            StreamEvent::Completed,
        ]);
        let mut transcript = Transcript::new();

        let story = use_case
            .execute(
                GenerateStoryInput::new("greeting", Model::Flash),
                &mut transcript,
                &NoProgress,
            )
            .await
            .unwrap();

        assert_eq!(story, "Hi there");
    }

    #[tokio::test]
    async fn mid_stream_fault_leaves_transcript_unchanged() {
        let use_case = use_case_with(vec![
            StreamEvent::Delta("Once upon".to_string()),
            StreamEvent::Error("connection reset".to_string()),
        ]);
        let mut transcript = Transcript::new();
        transcript.commit("earlier", "exchange");
        let len_before = transcript.len();

        let result = use_case
            .execute(
                GenerateStoryInput::new("doomed prompt", Model::Flash),
                &mut transcript,
                &NoProgress,
            )
            .await;

        assert!(matches!(
            result,
            Err(GenerateStoryError::Generation(
                GenerationError::StreamInterrupted(_)
            ))
        ));
        assert_eq!(transcript.len(), len_before);
    }

    #[tokio::test]
    async fn setup_failure_never_streams_and_never_commits() {
        let use_case = GenerateStoryUseCase::new(Arc::new(BrokenGateway)).without_pacing();
        let mut transcript = Transcript::new();

        let result = use_case
            .execute(
                GenerateStoryInput::new("anything", Model::Pro),
                &mut transcript,
                &NoProgress,
            )
            .await;

        assert!(matches!(
            result,
            Err(GenerateStoryError::Setup(SetupError::MissingCredential))
        ));
        assert!(transcript.is_empty());
    }

    #[tokio::test]
    async fn consecutive_successes_alternate_roles() {
        let mut transcript = Transcript::new();

        for i in 0..3 {
            let use_case = use_case_with(deltas(&["story ", "text"]));
            use_case
                .execute(
                    GenerateStoryInput::new(format!("prompt {i}"), Model::Flash),
                    &mut transcript,
                    &NoProgress,
                )
                .await
                .unwrap();
        }

        assert_eq!(transcript.len(), 6);
        for (i, msg) in transcript.messages().iter().enumerate() {
            let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
            assert_eq!(msg.role, expected);
        }
    }

    #[tokio::test]
    async fn session_receives_full_history_and_composed_prompt() {
        let session = MockSession::new(deltas(&["ok"]));
        let seen_context = session.seen_context_len.clone();
        let seen_prompt = session.seen_prompt.clone();
        let use_case =
            GenerateStoryUseCase::new(Arc::new(MockGateway::new(session))).without_pacing();

        let mut transcript = Transcript::new();
        for i in 0..12 {
            transcript.commit(format!("u{i}"), format!("a{i}"));
        }

        use_case
            .execute(
                GenerateStoryInput::new("a robot who learns empathy", Model::Flash),
                &mut transcript,
                &NoProgress,
            )
            .await
            .unwrap();

        // Full ledger (24 messages), not the 10-record display window
        assert_eq!(*seen_context.lock().unwrap(), Some(24));
        assert_eq!(
            seen_prompt.lock().unwrap().as_deref(),
            Some("Write a creative, engaging, and narrative-rich story imagining:a robot who learns empathy")
        );
    }

    #[tokio::test]
    async fn channel_close_without_completed_is_normal_exhaustion() {
        // No Completed marker: the producer just ends
        let use_case = use_case_with(vec![
            StreamEvent::Delta("The ".to_string()),
            StreamEvent::Delta("end".to_string()),
        ]);
        let mut transcript = Transcript::new();

        let story = use_case
            .execute(
                GenerateStoryInput::new("short", Model::Flash),
                &mut transcript,
                &NoProgress,
            )
            .await
            .unwrap();

        assert_eq!(story, "The end");
        assert_eq!(transcript.len(), 2);
    }

    #[tokio::test]
    async fn progress_sees_each_chunk() {
        struct RecordingProgress {
            chunks: Mutex<Vec<String>>,
        }
        impl ProgressNotifier for RecordingProgress {
            fn on_stream_start(&self) {}
            fn on_chunk(&self, text: &str) {
                self.chunks.lock().unwrap().push(text.to_string());
            }
            fn on_stream_end(&self) {}
        }

        let use_case = use_case_with(deltas(&["Once ", "upon ", "a time"]));
        let progress = RecordingProgress {
            chunks: Mutex::new(Vec::new()),
        };
        let mut transcript = Transcript::new();

        use_case
            .execute(
                GenerateStoryInput::new("p", Model::Flash),
                &mut transcript,
                &progress,
            )
            .await
            .unwrap();

        assert_eq!(
            *progress.chunks.lock().unwrap(),
            vec!["Once ", "upon ", "a time"]
        );
    }
}
