//! HTTP response handling.
//!
//! Responses are fully buffered: MoMo payloads are small JSON documents, and
//! buffering lets the client log bodies and map error responses without extra
//! round trips through the transport layer.

use serde::de::DeserializeOwned;

use crate::error::{Error, ErrorKind, Result};

/// Longest raw body fragment carried inside an error message.
const MAX_ERROR_BODY: usize = 500;

/// A buffered HTTP response.
#[derive(Debug)]
pub struct Response {
    status: u16,
    headers: reqwest::header::HeaderMap,
    body: String,
}

impl Response {
    pub(crate) fn new(status: u16, headers: reqwest::header::HeaderMap, body: String) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get the response body as text.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Consume the response, returning the body.
    pub fn into_body(self) -> String {
        self.body
    }

    /// Deserialize the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }

    /// Deserialize the response body as JSON, treating an empty body as
    /// `None`.
    ///
    /// Several MoMo endpoints acknowledge accepted requests with a bare 2xx
    /// and no body; that is a valid outcome, not a decode failure.
    pub fn json_or_none<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        if self.body.trim().is_empty() {
            return Ok(None);
        }
        self.json().map(Some)
    }

    /// Check for an API error and convert non-2xx responses to [`Error`].
    pub fn checked(self) -> Result<Response> {
        if self.is_success() {
            return Ok(self);
        }
        Err(parse_error_response(self.status, &self.body))
    }
}

/// Parse an error response body and map it onto the error taxonomy.
fn parse_error_response(status: u16, body: &str) -> Error {
    // MoMo error bodies carry a machine code and a human message.
    if let Ok(reason) = serde_json::from_str::<MomoErrorBody>(body) {
        if reason.code.is_some() || reason.message.is_some() {
            let code = reason.code.unwrap_or_default();
            let message = reason.message.unwrap_or_default();
            let joined = match (code.is_empty(), message.is_empty()) {
                (false, false) => format!("{}: {}", code, message),
                (false, true) => code,
                _ => message,
            };
            return Error::new(ErrorKind::Http {
                status,
                message: joined,
            });
        }
    }

    Error::new(ErrorKind::Http {
        status,
        message: truncate_body(body),
    })
}

/// Truncate an oversized raw body before embedding it in an error message.
fn truncate_body(body: &str) -> String {
    let mut message = body.to_string();
    if message.len() > MAX_ERROR_BODY {
        let mut cut = MAX_ERROR_BODY;
        while !message.is_char_boundary(cut) {
            cut -= 1;
        }
        message.truncate(cut);
        message.push_str("...[truncated]");
    }
    message
}

/// MoMo API error response format.
#[derive(Debug, serde::Deserialize)]
struct MomoErrorBody {
    code: Option<String>,
    message: Option<String>,
}
