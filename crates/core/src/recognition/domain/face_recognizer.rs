use thiserror::Error;

use crate::recognition::domain::check_response::CheckResponse;

#[derive(Error, Debug)]
pub enum RecognizeError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Domain interface for a remote face recognition service.
///
/// One call per image; implementations block until the service answers.
pub trait FaceRecognizer: Send {
    fn check(&self, image: &[u8]) -> Result<CheckResponse, RecognizeError>;
}
