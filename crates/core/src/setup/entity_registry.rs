use crate::entity::domain::image_processing_entity::ImageProcessingEntity;

/// Host-side collaborator that takes ownership of the entities created at
/// setup and drives them from then on.
pub trait EntityRegistry {
    fn add_entities(&mut self, entities: Vec<Box<dyn ImageProcessingEntity>>);
}

/// Plain in-memory registry, used by the CLI host.
impl EntityRegistry for Vec<Box<dyn ImageProcessingEntity>> {
    fn add_entities(&mut self, entities: Vec<Box<dyn ImageProcessingEntity>>) {
        self.extend(entities);
    }
}
