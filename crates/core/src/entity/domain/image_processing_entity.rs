use crate::entity::domain::entity_attributes::EntityAttributes;
use crate::recognition::domain::face_recognizer::RecognizeError;
use crate::recognition::domain::recognition_state::RecognitionState;

/// Capability a platform polls for display: an entity that turns camera
/// images into a state plus attributes.
///
/// Processing mutates the entity, hence `&mut self`; the platform invokes a
/// given entity serially.
pub trait ImageProcessingEntity: Send {
    /// Entity id of the camera whose images this entity processes.
    fn camera_entity(&self) -> &str;

    fn name(&self) -> &str;

    fn state(&self) -> &RecognitionState;

    fn attributes(&self) -> EntityAttributes;

    fn process_image(&mut self, image: &[u8]) -> Result<(), RecognizeError>;
}
