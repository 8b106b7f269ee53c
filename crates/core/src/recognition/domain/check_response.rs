use serde::Deserialize;

/// One face reported by the Facebox check endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FaceMatch {
    /// Taught identity. Facebox leaves this out for unknown faces.
    #[serde(default)]
    pub name: String,
    /// Zero when the service leaves it out.
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub matched: bool,
}

/// Body returned by `POST /facebox/check`.
///
/// Failure responses usually carry only `success` and `error`, so every
/// other field has a default.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CheckResponse {
    pub success: bool,
    #[serde(rename = "facesCount", default)]
    pub faces_count: Option<u32>,
    #[serde(default)]
    pub faces: Vec<FaceMatch>,
    #[serde(default)]
    pub error: Option<String>,
}

impl CheckResponse {
    /// Iterates over the faces the service associated with a taught identity.
    pub fn matched_faces(&self) -> impl Iterator<Item = &FaceMatch> {
        self.faces.iter().filter(|face| face.matched)
    }
}
