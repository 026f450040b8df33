//! HTTP calls against the dashboard API.

use chathub_server::infrastructure::dto::{
    http::{CreateCommentRequest, CreateJobRequest},
    payload::{CommentDto, JobDto},
};
use reqwest::{Client, Response};

use crate::error::ClientError;

/// Derive the `/ws` endpoint from the HTTP base URL.
pub fn websocket_url(base_url: &str) -> Result<String, ClientError> {
    let base = base_url.trim_end_matches('/');
    if let Some(rest) = base.strip_prefix("http://") {
        Ok(format!("ws://{}/ws", rest))
    } else if let Some(rest) = base.strip_prefix("https://") {
        Ok(format!("wss://{}/ws", rest))
    } else {
        Err(ClientError::InvalidServerUrl(base_url.to_string()))
    }
}

/// Thin wrapper around `reqwest::Client` bound to one server.
#[derive(Debug, Clone)]
pub struct DashboardApi {
    client: Client,
    base_url: String,
}

impl DashboardApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn submit_comment(
        &self,
        user_name: String,
        text: String,
        worker_id: Option<String>,
    ) -> Result<CommentDto, ClientError> {
        let request = CreateCommentRequest {
            user_name: Some(user_name),
            text: Some(text),
            worker_id,
        };
        let response = self
            .client
            .post(self.url("/api/comments"))
            .json(&request)
            .send()
            .await?;
        Ok(ensure_success(response).await?.json().await?)
    }

    pub async fn submit_job(&self, url: String) -> Result<JobDto, ClientError> {
        let request = CreateJobRequest { url: Some(url) };
        let response = self
            .client
            .post(self.url("/api/jobs"))
            .json(&request)
            .send()
            .await?;
        Ok(ensure_success(response).await?.json().await?)
    }

    pub async fn pending_jobs(&self) -> Result<Vec<JobDto>, ClientError> {
        let response = self.client.get(self.url("/api/jobs")).send().await?;
        Ok(ensure_success(response).await?.json().await?)
    }

    /// Returns the server's confirmation text.
    pub async fn clear_comments(&self) -> Result<String, ClientError> {
        let response = self.client.delete(self.url("/api/comments")).send().await?;
        Ok(ensure_success(response).await?.text().await?)
    }
}

async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Rejected {
        status: status.as_u16(),
        body,
    })
}
