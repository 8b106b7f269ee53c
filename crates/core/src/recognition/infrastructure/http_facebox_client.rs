use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::blocking::Client;
use serde::Serialize;

use crate::recognition::domain::check_response::CheckResponse;
use crate::recognition::domain::face_recognizer::{FaceRecognizer, RecognizeError};
use crate::shared::constants::CHECK_PATH;

/// JSON payload of `POST /facebox/check`.
#[derive(Debug, Serialize)]
struct CheckRequest {
    base64: String,
}

impl CheckRequest {
    fn from_image(image: &[u8]) -> Self {
        Self {
            base64: STANDARD.encode(image),
        }
    }
}

/// [`FaceRecognizer`] backed by a Facebox instance reachable over plain HTTP.
///
/// Uses the blocking `reqwest` client with its default settings; there is
/// no retry, so a transport failure surfaces as a [`RecognizeError`].
pub struct HttpFaceboxClient {
    url: String,
    client: Client,
}

impl HttpFaceboxClient {
    /// `endpoint` is `host[:port]` of the Facebox instance.
    pub fn new(endpoint: &str) -> Self {
        Self::with_client(endpoint, Client::new())
    }

    pub fn with_client(endpoint: &str, client: Client) -> Self {
        Self {
            url: check_url(endpoint),
            client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn check_url(endpoint: &str) -> String {
    format!("http://{endpoint}{CHECK_PATH}")
}

impl FaceRecognizer for HttpFaceboxClient {
    fn check(&self, image: &[u8]) -> Result<CheckResponse, RecognizeError> {
        log::debug!("Posting {} byte image to {}", image.len(), self.url);
        let response = self
            .client
            .post(&self.url)
            .json(&CheckRequest::from_image(image))
            .send()
            .map_err(|e| RecognizeError::Request {
                url: self.url.clone(),
                source: e,
            })?;

        // The status code is not inspected: Facebox reports failures in the body.
        let status = response.status();
        let body = response
            .json::<CheckResponse>()
            .map_err(|e| RecognizeError::Decode {
                url: self.url.clone(),
                source: e,
            })?;
        log::debug!(
            "Facebox answered {status}: success={}, faces={}",
            body.success,
            body.faces.len()
        );
        Ok(body)
    }
}
