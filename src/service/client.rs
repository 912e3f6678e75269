// src/service/client.rs

//! Transport to the document service.
//!
//! The engine never talks to the network itself; everything goes through
//! [`DocumentService`], so tests and alternative front ends can substitute
//! an in-memory implementation. Retry and cancellation policy belong to
//! the caller, not here.

use crate::context::AppCtx;
use crate::error::{AppError, AppResult};
use crate::service::request::{GenerateRequest, RedraftRequest, RedraftResponse};
use reqwest::blocking::Client;
use std::time::Duration;

/// Default timeout for document-service requests (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub trait DocumentService {
    /// `GET /get-template/{document_type}` -> raw template text.
    fn fetch_template(&self, document_type: &str) -> AppResult<String>;

    /// `POST /generate` -> PDF bytes, forwarded opaquely to a file-save
    /// action; never parsed here.
    fn generate(&self, req: &GenerateRequest) -> AppResult<Vec<u8>>;

    /// `POST /redraft` -> redrafted HTML.
    fn redraft(&self, req: &RedraftRequest) -> AppResult<RedraftResponse>;
}

#[derive(Debug, Clone)]
pub struct HttpDocumentService {
    base_url: String,
    client: Client,
}

impl HttpDocumentService {
    pub fn new(ctx: &AppCtx) -> AppResult<Self> {
        Self::with_timeout(ctx, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(ctx: &AppCtx, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Msg(format!("failed to build http client: {e}")))?;

        Ok(Self {
            base_url: ctx.service_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl DocumentService for HttpDocumentService {
    fn fetch_template(&self, document_type: &str) -> AppResult<String> {
        let url = self.endpoint(&format!("get-template/{document_type}"));

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| AppError::TemplateFetchFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            log::warn!("template fetch for {document_type:?} returned {status}");
            return Err(AppError::TemplateUnavailable {
                status: status.as_u16(),
            });
        }

        resp.text()
            .map_err(|e| AppError::TemplateFetchFailed(e.to_string()))
    }

    fn generate(&self, req: &GenerateRequest) -> AppResult<Vec<u8>> {
        let url = self.endpoint("generate");

        let resp = self
            .client
            .post(&url)
            .json(req)
            .send()
            .map_err(|e| AppError::GenerateFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::GenerateRejected {
                status: status.as_u16(),
            });
        }

        let bytes = resp
            .bytes()
            .map_err(|e| AppError::GenerateFailed(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    fn redraft(&self, req: &RedraftRequest) -> AppResult<RedraftResponse> {
        let url = self.endpoint("redraft");

        let resp = self
            .client
            .post(&url)
            .json(req)
            .send()
            .map_err(|e| AppError::RedraftFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::RedraftRejected {
                status: status.as_u16(),
            });
        }

        resp.json::<RedraftResponse>()
            .map_err(|e| AppError::ServiceResponseInvalid(e.to_string()))
    }
}

// ======================================================
// Unit Tests
// ======================================================
