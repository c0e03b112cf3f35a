//! HTTP client for the LandingAI ADE parse endpoint.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::StatusCode;

use crate::config::Config;
use crate::detect::{sniff_mime, PDF_MIME};
use crate::error::{Error, Result};
use crate::model::ParseResponse;

use super::{DocumentParser, DocumentSource};

/// Path of the parse endpoint, relative to the base URL.
pub const PARSE_PATH: &str = "/v1/ade/parse";

/// Model used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "dpt-2-latest";

/// Authenticated handle to the parse service.
pub struct AdeClient {
    http: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
}

impl AdeClient {
    /// Create a client from configuration.
    ///
    /// Fails with [`Error::MissingApiKey`] before any network traffic when
    /// the configuration has no key.
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or(Error::MissingApiKey)?;

        let base_url = config.base_url.trim_end_matches('/').to_string();

        // No request timeout: the call blocks until the service answers.
        let mut builder = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .user_agent(concat!("adepdf/", env!("CARGO_PKG_VERSION")));
        if is_loopback(&base_url) {
            builder = builder.no_proxy();
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            api_key,
            base_url,
        })
    }

    /// Full URL of the parse endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, PARSE_PATH)
    }

    fn build_form(source: &DocumentSource, model: &str) -> Result<Form> {
        let form = Form::new().text("model", model.to_string());

        match source {
            DocumentSource::File(path) => {
                let data = read_document(path)?;
                let mime = sniff_mime(&data);
                if mime != PDF_MIME {
                    log::warn!(
                        "{} does not look like a PDF; uploading as {}",
                        path.display(),
                        mime
                    );
                }
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "document.pdf".to_string());

                log::debug!("Uploading {} ({} bytes)", file_name, data.len());
                let part = Part::bytes(data).file_name(file_name).mime_str(mime)?;
                Ok(form.part("document", part))
            }
            DocumentSource::Url(url) => Ok(form.text("document_url", url.clone())),
        }
    }
}

impl DocumentParser for AdeClient {
    fn name(&self) -> &str {
        "ade"
    }

    fn parse(&self, source: &DocumentSource, model: &str) -> Result<ParseResponse> {
        let form = Self::build_form(source, model)?;
        let url = self.endpoint();

        log::debug!("POST {} (model={}, document={})", url, model, source);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        log::debug!("Response {} ({} bytes)", status, body.len());

        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                message: api_error_message(status, &body),
            });
        }

        let parsed: ParseResponse = serde_json::from_str(&body)?;
        log::info!(
            "Parsed {} into {} chunks ({} ungrounded)",
            source,
            parsed.chunk_count(),
            parsed.ungrounded_count()
        );
        if let Some(metadata) = &parsed.metadata {
            log::info!("Job metadata: {}", metadata);
        }
        if let Some(markdown) = &parsed.markdown {
            log::debug!("Document markdown: {} bytes", markdown.len());
        }
        Ok(parsed)
    }
}

impl fmt::Debug for AdeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdeClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

fn is_loopback(base_url: &str) -> bool {
    reqwest::Url::parse(base_url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .is_some_and(|host| matches!(host.as_str(), "localhost" | "127.0.0.1" | "[::1]"))
}

fn read_document(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::InputNotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })
}

/// Pull a human-readable message out of an error body.
fn api_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "message", "error"] {
            match value.get(key) {
                Some(serde_json::Value::String(s)) => return s.clone(),
                Some(serde_json::Value::Null) | None => {}
                Some(other) => return other.to_string(),
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        trimmed.to_string()
    }
}
