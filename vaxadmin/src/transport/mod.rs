//! # Encrypted HTTP Transport
//!
//! This module wraps `reqwest` with the envelope codec and the backend's
//! status-code failure taxonomy. Every resource API module delegates to
//! one of the five verbs here.
//!
//! ## Request Shapes
//!
//! | Verb | Envelope placement |
//! |------|--------------------|
//! | GET / DELETE | URL query string (`params`, `sign`, `timestamp`) |
//! | POST / PUT | multipart form fields, plus `file` parts for uploads |
//! | download | multipart POST; response is raw bytes + `filename` header |
//!
//! ## Response Flow
//!
//! ```text
//! 1. Non-success status → classify → run side effect → Err(ApiError)
//!              ↓
//! 2. Body deserializes as an envelope → verify sign → decrypt → Value
//!              ↓
//! 3. Body without `params` → passed through unchanged
//! ```

pub mod hooks;
pub mod status;
pub mod tracker;

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::envelope::{self, Envelope};
use crate::session::SessionStore;

pub use hooks::{NoopHooks, RecordingHooks, UiHooks};
pub use status::{classify, ApiError};
pub use tracker::{InflightTracker, UNIQUENESS_CHECK_PATH};

/// A file blob attached to a multipart request.
#[derive(Debug, Clone)]
pub struct FileAttachment {
    /// Filename reported to the backend.
    pub filename: String,

    /// Raw file contents.
    pub bytes: Vec<u8>,
}

/// A binary download returned by an export endpoint.
#[derive(Debug, Clone)]
pub struct Download {
    /// Filename from the `filename` response header, percent-decoded.
    pub filename: String,

    /// Raw file contents; the envelope codec is bypassed entirely.
    pub bytes: Vec<u8>,
}

/// The encrypted transport shared by every resource API module.
///
/// Cheaply cloneable: the HTTP client, session store, tracker and hooks
/// are all shared handles.
///
/// ## Usage
///
/// ```rust,ignore
/// let transport = Transport::new(&config, session, Arc::new(NoopHooks))?;
/// let contracts = transport.get(&endpoints.contract(""), &page_query).await?;
/// ```
#[derive(Clone)]
pub struct Transport {
    http: Client,
    session: SessionStore,
    tracker: InflightTracker,
    hooks: Arc<dyn UiHooks>,
}

impl Transport {
    /// Build a transport from configuration.
    pub fn new(
        config: &ClientConfig,
        session: SessionStore,
        hooks: Arc<dyn UiHooks>,
    ) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            session,
            tracker: InflightTracker::new(),
            hooks,
        })
    }

    /// The shared in-flight tracker (exposed for loading indicators).
    pub fn tracker(&self) -> &InflightTracker {
        &self.tracker
    }

    /// GET with the envelope in the query string.
    pub async fn get<P: Serialize>(&self, url: &str, params: &P) -> Result<Value, ApiError> {
        let envelope = envelope::encode(params)?;
        let request = self.http.get(url).query(&envelope);
        self.execute(url, request).await
    }

    /// DELETE with the envelope in the query string.
    pub async fn delete<P: Serialize>(&self, url: &str, params: &P) -> Result<Value, ApiError> {
        let envelope = envelope::encode(params)?;
        let request = self.http.delete(url).query(&envelope);
        self.execute(url, request).await
    }

    /// POST with the envelope as multipart form fields.
    pub async fn post<P: Serialize>(
        &self,
        url: &str,
        params: &P,
        files: Vec<FileAttachment>,
    ) -> Result<Value, ApiError> {
        let form = multipart_envelope(envelope::encode(params)?, files);
        let request = self.http.post(url).multipart(form);
        self.execute(url, request).await
    }

    /// PUT with the envelope as multipart form fields.
    pub async fn put<P: Serialize>(
        &self,
        url: &str,
        params: &P,
        files: Vec<FileAttachment>,
    ) -> Result<Value, ApiError> {
        let form = multipart_envelope(envelope::encode(params)?, files);
        let request = self.http.put(url).multipart(form);
        self.execute(url, request).await
    }

    /// Multipart POST expecting a binary response.
    ///
    /// Export endpoints answer with raw bytes and a `filename` header;
    /// the envelope codec is bypassed on the way back.
    pub async fn download<P: Serialize>(&self, url: &str, params: &P) -> Result<Download, ApiError> {
        let form = multipart_envelope(envelope::encode(params)?, Vec::new());
        let request = self.with_token(self.http.post(url).multipart(form));

        let _guard = self.tracker.track(url, Arc::clone(&self.hooks));
        debug!(url, "download request");

        let response = request.send().await?;
        let response = self.check_status(response).await?;

        let filename = response
            .headers()
            .get("filename")
            .and_then(|v| v.to_str().ok())
            .map(percent_decode)
            .ok_or(ApiError::MissingFilename)?;

        let bytes = response.bytes().await?.to_vec();
        debug!(filename = %filename, len = bytes.len(), "download complete");

        Ok(Download { filename, bytes })
    }

    /// Attach the session token header when a session is active.
    fn with_token(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.header("token", token),
            None => request,
        }
    }

    /// Send a request and decode its response.
    async fn execute(&self, url: &str, request: RequestBuilder) -> Result<Value, ApiError> {
        let _guard = self.tracker.track(url, Arc::clone(&self.hooks));
        debug!(url, "request");

        let response = self.with_token(request).send().await?;
        let response = self.check_status(response).await?;

        let body: Value = response.json().await?;
        Ok(decode_body(body)?)
    }

    /// Reject non-success statuses, running the mapped side effect.
    async fn check_status(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = classify(status.as_u16(), &body);
        warn!(status = status.as_u16(), %error, "request rejected");
        self.apply_failure_effects(&error);
        Err(error)
    }

    /// Run the UI side effect a failure variant calls for.
    fn apply_failure_effects(&self, error: &ApiError) {
        match error {
            ApiError::Advisory(message) => self.hooks.notify_error(message),
            ApiError::Fatal(message) => {
                // The error page reads this message from the session store.
                self.session.record_error(message.clone());
                self.hooks.fatal_error(message);
            }
            _ => {}
        }
    }
}

/// Package an envelope (and any file blobs) as a multipart form.
fn multipart_envelope(envelope: Envelope, files: Vec<FileAttachment>) -> Form {
    let mut form = Form::new()
        .text("params", envelope.params)
        .text("sign", envelope.sign)
        .text("timestamp", envelope.timestamp.to_string());

    for file in files {
        form = form.part("file", Part::bytes(file.bytes).file_name(file.filename));
    }

    form
}

/// Decode a response body.
///
/// Any body carrying a `params` field is an envelope: it must carry the
/// full shape and pass verification, so a stripped `sign` cannot smuggle
/// ciphertext past the integrity check. Bodies without `params` pass
/// through unchanged.
fn decode_body(body: Value) -> Result<Value, crate::envelope::CodecError> {
    if body.get("params").is_none() {
        return Ok(body);
    }

    let envelope: Envelope = serde_json::from_value(body)
        .map_err(|_| crate::envelope::CodecError::SignatureMismatch)?;
    envelope::decode(&envelope)
}

/// Decode `%xx` escapes in a download filename.
///
/// Backends send filenames URI-encoded (the browser build ran `decodeURI`).
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let (Some(hi), Some(lo)) = (
                bytes.get(i + 1).and_then(|b| (*b as char).to_digit(16)),
                bytes.get(i + 2).and_then(|b| (*b as char).to_digit(16)),
            ) {
                out.push((hi * 16 + lo) as u8);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::CodecError;
    use serde_json::json;

    #[test]
    fn test_decode_body_envelope() {
        let envelope = envelope::encode(&json!({ "name": "HPV" })).unwrap();
        let body = serde_json::to_value(&envelope).unwrap();

        let decoded = decode_body(body).unwrap();
        assert_eq!(decoded["name"], json!("HPV"));
    }

    #[test]
    fn test_decode_body_passthrough() {
        // Bodies without `params` are returned unchanged.
        let body = json!({ "status": "ok", "rows": [] });
        assert_eq!(decode_body(body.clone()).unwrap(), body);
    }

    #[test]
    fn test_decode_body_tampered_envelope_fails() {
        let mut envelope = envelope::encode(&json!({ "a": 1 })).unwrap();
        envelope.sign = envelope.sign.chars().rev().collect();
        let body = serde_json::to_value(&envelope).unwrap();

        assert!(matches!(
            decode_body(body),
            Err(CodecError::SignatureMismatch)
        ));
    }

    #[test]
    fn test_decode_body_envelope_missing_sign_fails() {
        // Stripping `sign` must not demote the body to a passthrough.
        let envelope = envelope::encode(&json!({ "a": 1 })).unwrap();
        let body = json!({
            "params": envelope.params,
            "timestamp": envelope.timestamp,
        });

        assert!(matches!(
            decode_body(body),
            Err(CodecError::SignatureMismatch)
        ));
    }

    #[test]
    fn test_decode_body_envelope_bad_timestamp_fails() {
        let envelope = envelope::encode(&json!({ "a": 1 })).unwrap();
        let body = json!({
            "params": envelope.params,
            "sign": envelope.sign,
            "timestamp": "not-a-number",
        });

        assert!(matches!(
            decode_body(body),
            Err(CodecError::SignatureMismatch)
        ));
    }

    #[test]
    fn test_percent_decode() {
        assert_eq!(percent_decode("plain.xlsx"), "plain.xlsx");
        assert_eq!(percent_decode("a%20b.xlsx"), "a b.xlsx");
        // Chinese filename as exported by the settlement pages.
        assert_eq!(percent_decode("%E7%96%AB%E8%8B%97.xlsx"), "疫苗.xlsx");
        // Malformed escapes fall through untouched.
        assert_eq!(percent_decode("100%"), "100%");
    }

    #[test]
    fn test_failure_effects_routed_to_hooks() {
        let session = SessionStore::new();
        let recording = Arc::new(RecordingHooks::default());
        let transport = Transport::new(
            &ClientConfig::default(),
            session.clone(),
            recording.clone(),
        )
        .unwrap();

        transport.apply_failure_effects(&ApiError::Advisory("toast me".into()));
        transport.apply_failure_effects(&ApiError::Fatal("redirect me".into()));
        transport.apply_failure_effects(&ApiError::Backend);
        transport.apply_failure_effects(&ApiError::NetworkUnreachable);

        assert_eq!(*recording.notifications.lock().unwrap(), vec!["toast me"]);
        assert_eq!(*recording.fatal_errors.lock().unwrap(), vec!["redirect me"]);
        // 531 also records the message for the error page.
        assert_eq!(session.take_error().as_deref(), Some("redirect me"));
    }
}
