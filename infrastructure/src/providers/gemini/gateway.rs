//! Gemini gateway — the model session factory.

use super::session::GeminiSession;
use crate::config::Credential;
use async_trait::async_trait;
use loom_application::{LlmGateway, LlmSession, SetupError};
use loom_domain::Model;
use reqwest::Client;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Gateway holding the credential and a shared HTTP client.
///
/// Sessions themselves are transient: one per generation attempt, each
/// bound to one model variant. Credential or network problems that only
/// the remote side can detect surface during streaming, not here — like
/// the hosted client libraries, constructing a handle is a local
/// operation.
pub struct GeminiGateway {
    credential: Credential,
    client: Client,
}

impl GeminiGateway {
    pub fn new(credential: Credential) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { credential, client }
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, SetupError> {
        if self.credential.is_empty() {
            return Err(SetupError::MissingCredential);
        }

        Ok(Box::new(GeminiSession::new(
            self.client.clone(),
            self.credential.expose().to_string(),
            *model,
        )))
    }

    fn available_models(&self) -> Vec<Model> {
        Model::all().to_vec()
    }
}
