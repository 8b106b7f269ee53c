use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::time::Instant;

use crate::entity::domain::entity_attributes::EntityAttributes;
use crate::entity::domain::image_processing_entity::ImageProcessingEntity;
use crate::recognition::domain::check_response::CheckResponse;
use crate::recognition::domain::face_recognizer::{FaceRecognizer, RecognizeError};
use crate::recognition::domain::recognition_state::RecognitionState;
use crate::shared::constants::{DEFAULT_NAME_PREFIX, ROUNDING_DECIMALS};
use crate::shared::entity_id::split_entity_id;
use crate::shared::rounding::round_to;

/// Recognition entity bound to one camera and one Facebox instance.
///
/// Every call to [`process_image`](ImageProcessingEntity::process_image)
/// recomputes the state from the service response; nothing carries over
/// between calls except the last response time after a failed request.
pub struct Facebox {
    name: String,
    camera_entity: String,
    recognizer: Box<dyn FaceRecognizer>,
    state: RecognitionState,
    total_faces: Option<u32>,
    faces: BTreeMap<String, f64>,
    response_time: Option<f64>,
}

impl Facebox {
    /// Falls back to `"Facebox <object_id>"` when `name` is `None` or empty.
    pub fn new(
        name: Option<&str>,
        camera_entity: &str,
        recognizer: Box<dyn FaceRecognizer>,
    ) -> Self {
        let name = match name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => default_name(camera_entity),
        };
        Self {
            name,
            camera_entity: camera_entity.to_string(),
            recognizer,
            state: RecognitionState::NoProcessingPerformed,
            total_faces: None,
            faces: BTreeMap::new(),
            response_time: None,
        }
    }

    /// Matched faces of the last successful call, confidence per name.
    pub fn faces(&self) -> &BTreeMap<String, f64> {
        &self.faces
    }

    pub fn total_faces(&self) -> Option<u32> {
        self.total_faces
    }

    /// Seconds the last successful call took.
    pub fn response_time(&self) -> Option<f64> {
        self.response_time
    }

    fn apply(&mut self, response: CheckResponse, elapsed_secs: f64) {
        if !response.success {
            log::warn!(
                "{}: Facebox request failed: {}",
                self.name,
                response.error.as_deref().unwrap_or("no error message")
            );
            self.state = RecognitionState::RequestFailed;
            self.total_faces = None;
            self.faces = BTreeMap::new();
            return;
        }

        self.response_time = Some(round_to(elapsed_secs, ROUNDING_DECIMALS));
        self.total_faces = response.faces_count;
        let matched = matched_confidences(&response);
        self.state = match best_match(&matched) {
            Some(name) => RecognitionState::Recognized(name.to_string()),
            None => RecognitionState::NoTaughtFaces,
        };
        self.faces = matched.into_iter().collect();
        log::debug!(
            "{}: state={}, matched={}, total={:?}",
            self.name,
            self.state,
            self.faces.len(),
            self.total_faces
        );
    }
}

impl ImageProcessingEntity for Facebox {
    fn camera_entity(&self) -> &str {
        &self.camera_entity
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn state(&self) -> &RecognitionState {
        &self.state
    }

    fn attributes(&self) -> EntityAttributes {
        EntityAttributes {
            faces: self.faces.clone(),
            total_faces: self.total_faces,
            response_time: self.response_time,
        }
    }

    fn process_image(&mut self, image: &[u8]) -> Result<(), RecognizeError> {
        let start = Instant::now();
        let response = self.recognizer.check(image)?;
        let elapsed = start.elapsed().as_secs_f64();
        self.apply(response, elapsed);
        Ok(())
    }
}

fn default_name(camera_entity: &str) -> String {
    let object_id = split_entity_id(camera_entity)
        .map(|(_, object_id)| object_id)
        .unwrap_or(camera_entity);
    format!("{DEFAULT_NAME_PREFIX} {object_id}")
}

/// Confidence per matched face name, in the order names first appear in the
/// response. A later duplicate name overwrites the value but keeps its slot.
fn matched_confidences(response: &CheckResponse) -> Vec<(String, f64)> {
    let mut faces: Vec<(String, f64)> = Vec::new();
    for face in response.matched_faces() {
        let confidence = round_to(face.confidence, ROUNDING_DECIMALS);
        match faces.iter().position(|(name, _)| *name == face.name) {
            Some(index) => faces[index].1 = confidence,
            None => faces.push((face.name.clone(), confidence)),
        }
    }
    faces
}

/// Name with the highest confidence, the earliest in response order on ties.
///
/// `None` when there are no faces. Also `None` when two confidences cannot be
/// compared; JSON cannot carry NaN, so this only guards non-finite values
/// from other recognizers.
fn best_match(faces: &[(String, f64)]) -> Option<&str> {
    let mut best: Option<(&str, f64)> = None;
    for (name, confidence) in faces {
        let confidence = *confidence;
        best = match best {
            None => Some((name.as_str(), confidence)),
            Some((top_name, top)) => match confidence.partial_cmp(&top)? {
                Ordering::Greater => Some((name.as_str(), confidence)),
                _ => Some((top_name, top)),
            },
        };
    }
    best.map(|(name, _)| name)
}
