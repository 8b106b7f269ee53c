use crate::entity::domain::image_processing_entity::ImageProcessingEntity;
use crate::entity::facebox_entity::Facebox;
use crate::recognition::domain::face_recognizer::FaceRecognizer;
use crate::recognition::infrastructure::http_facebox_client::HttpFaceboxClient;
use crate::setup::entity_registry::EntityRegistry;
use crate::setup::platform_config::{ConfigError, PlatformConfig};

/// Builds one [`Facebox`] per configured camera, in configuration order.
///
/// `make_recognizer` is called once per camera with the shared endpoint.
pub fn build_entities<F>(config: &PlatformConfig, mut make_recognizer: F) -> Vec<Facebox>
where
    F: FnMut(&str) -> Box<dyn FaceRecognizer>,
{
    config
        .source
        .iter()
        .map(|camera| {
            Facebox::new(
                camera.name.as_deref(),
                &camera.entity_id,
                make_recognizer(&config.endpoint),
            )
        })
        .collect()
}

/// Validates `config`, creates HTTP-backed entities and hands them to
/// `registry` in a single call. Returns the number registered.
pub fn setup_platform(
    config: &PlatformConfig,
    registry: &mut dyn EntityRegistry,
) -> Result<usize, ConfigError> {
    setup_platform_with(config, registry, |endpoint| {
        Box::new(HttpFaceboxClient::new(endpoint))
    })
}

pub fn setup_platform_with<F>(
    config: &PlatformConfig,
    registry: &mut dyn EntityRegistry,
    make_recognizer: F,
) -> Result<usize, ConfigError>
where
    F: FnMut(&str) -> Box<dyn FaceRecognizer>,
{
    config.validate()?;
    if config.source.is_empty() {
        log::warn!("No camera sources configured for Facebox at {}", config.endpoint);
    }

    let entities: Vec<Box<dyn ImageProcessingEntity>> = build_entities(config, make_recognizer)
        .into_iter()
        .map(|entity| Box::new(entity) as Box<dyn ImageProcessingEntity>)
        .collect();
    let count = entities.len();
    registry.add_entities(entities);
    log::info!("Set up {count} Facebox entities for {}", config.endpoint);
    Ok(count)
}
