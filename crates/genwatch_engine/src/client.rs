use std::time::Duration;

use crate::{ClientError, FailureKind, SessionId, StartResponse, StatusSnapshot};

/// Connection parameters for the generation service.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Fixed delay between status polls.
    pub poll_interval: Duration,
}

impl ClientSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            poll_interval: Duration::from_millis(2000),
        }
    }
}

/// The two calls the client makes against the service.
#[async_trait::async_trait]
pub trait StatusApi: Send + Sync {
    /// Submit an idea; returns the session id to poll.
    async fn start(&self, idea: &str) -> Result<SessionId, ClientError>;

    /// Fetch the current status snapshot for a session.
    async fn status(&self, session_id: &str) -> Result<StatusSnapshot, ClientError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestStatusApi {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestStatusApi {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ClientError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), path)
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice(&bytes)
            .map_err(|err| ClientError::new(FailureKind::MalformedResponse, err.to_string()))
    }
}

#[async_trait::async_trait]
impl StatusApi for ReqwestStatusApi {
    async fn start(&self, idea: &str) -> Result<SessionId, ClientError> {
        let response = self
            .client
            .post(self.endpoint("start"))
            .form(&[("idea", idea)])
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let parsed: StartResponse = Self::read_json(response).await?;
        parsed.session_id.ok_or_else(|| {
            ClientError::new(FailureKind::MissingSessionId, "start response had no session_id")
        })
    }

    async fn status(&self, session_id: &str) -> Result<StatusSnapshot, ClientError> {
        let response = self
            .client
            .get(self.endpoint(&format!("status/{session_id}")))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        Self::read_json(response).await
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        return ClientError::new(FailureKind::Timeout, err.to_string());
    }
    ClientError::new(FailureKind::Network, err.to_string())
}
