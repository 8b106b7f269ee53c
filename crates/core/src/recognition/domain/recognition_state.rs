use std::fmt;

use crate::shared::constants::{STATE_NO_PROCESSING, STATE_NO_TAUGHT_FACES, STATE_REQUEST_FAILED};

/// Outcome of the most recent recognition call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RecognitionState {
    #[default]
    NoProcessingPerformed,
    /// The taught face with the highest confidence.
    Recognized(String),
    NoTaughtFaces,
    RequestFailed,
}

impl RecognitionState {
    pub fn as_str(&self) -> &str {
        match self {
            RecognitionState::NoProcessingPerformed => STATE_NO_PROCESSING,
            RecognitionState::Recognized(name) => name,
            RecognitionState::NoTaughtFaces => STATE_NO_TAUGHT_FACES,
            RecognitionState::RequestFailed => STATE_REQUEST_FAILED,
        }
    }
}

impl fmt::Display for RecognitionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
