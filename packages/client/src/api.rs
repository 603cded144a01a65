//! Request/response API of the game server.

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use paperfold_shared::protocol::http::{
    CreateGameRequest, CreateGameResponse, ErrorResponse, JoinGameRequest, JoinGameResponse,
    ParticipantRequest, SubmitResponseRequest, endpoint,
};

use crate::error::ClientError;

/// HTTP endpoints the client calls.
///
/// Responses of submit, start and leave carry nothing the client uses; only
/// their success or failure is reported.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameApi: Send + Sync {
    async fn create_game(
        &self,
        request: CreateGameRequest,
    ) -> Result<CreateGameResponse, ClientError>;

    async fn join_game(&self, request: JoinGameRequest) -> Result<JoinGameResponse, ClientError>;

    async fn submit_response(&self, request: SubmitResponseRequest) -> Result<(), ClientError>;

    async fn start_game(&self, request: ParticipantRequest) -> Result<(), ClientError>;

    async fn leave_game(&self, request: ParticipantRequest) -> Result<(), ClientError>;
}

/// `GameApi` over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpGameApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGameApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST `body` and return the response if its status is a success.
    async fn post<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, ClientError> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        let status = response.status();
        tracing::debug!("POST {} -> {}", path, status);

        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => status.canonical_reason().unwrap_or("unknown").to_string(),
        };
        Err(ClientError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ClientError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        Ok(self.post(path, body).await?.json::<R>().await?)
    }
}

#[async_trait]
impl GameApi for HttpGameApi {
    async fn create_game(
        &self,
        request: CreateGameRequest,
    ) -> Result<CreateGameResponse, ClientError> {
        self.post_json(endpoint::CREATE_GAME, &request).await
    }

    async fn join_game(&self, request: JoinGameRequest) -> Result<JoinGameResponse, ClientError> {
        self.post_json(endpoint::JOIN_GAME, &request).await
    }

    async fn submit_response(&self, request: SubmitResponseRequest) -> Result<(), ClientError> {
        self.post(endpoint::SUBMIT_RESPONSE, &request).await?;
        Ok(())
    }

    async fn start_game(&self, request: ParticipantRequest) -> Result<(), ClientError> {
        self.post(endpoint::START_GAME, &request).await?;
        Ok(())
    }

    async fn leave_game(&self, request: ParticipantRequest) -> Result<(), ClientError> {
        self.post(endpoint::LEAVE_GAME, &request).await?;
        Ok(())
    }
}
