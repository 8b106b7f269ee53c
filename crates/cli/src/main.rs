use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use facebox_core::entity::domain::image_processing_entity::ImageProcessingEntity;
use facebox_core::setup::platform_config::{CameraSource, PlatformConfig};
use facebox_core::setup::platform_setup::setup_platform;

/// Face recognition for camera images via a Facebox instance.
#[derive(Parser)]
#[command(name = "facebox")]
struct Cli {
    /// Image file to send for recognition.
    image: PathBuf,

    /// Config file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Facebox host:port; use with --camera instead of a config file.
    #[arg(long)]
    endpoint: Option<String>,

    /// Camera entity id. With --endpoint, defines the cameras; otherwise
    /// selects configured cameras. Repeatable.
    #[arg(long = "camera")]
    cameras: Vec<String>,

    /// Display name for the camera given with --endpoint.
    #[arg(long)]
    name: Option<String>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let image = fs::read(&cli.image)
        .map_err(|e| format!("Failed to read image {}: {e}", cli.image.display()))?;
    let config = resolve_config(&cli)?;

    let mut entities: Vec<Box<dyn ImageProcessingEntity>> = Vec::new();
    setup_platform(&config, &mut entities)?;
    if entities.is_empty() {
        return Err("No cameras to process".into());
    }

    for entity in &mut entities {
        log::info!("Processing {} for {}", cli.image.display(), entity.camera_entity());
        entity.process_image(&image)?;
        println!("{}", render(&**entity));
    }
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.image.exists() {
        return Err(format!("Image file not found: {}", cli.image.display()).into());
    }
    if cli.endpoint.is_some() && cli.config.is_some() {
        return Err("--endpoint and --config are mutually exclusive".into());
    }
    if cli.endpoint.is_some() && cli.cameras.is_empty() {
        return Err("--endpoint requires at least one --camera".into());
    }
    if cli.name.is_some() && (cli.endpoint.is_none() || cli.cameras.len() != 1) {
        return Err("--name requires --endpoint and exactly one --camera".into());
    }
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<PlatformConfig, Box<dyn std::error::Error>> {
    if let Some(endpoint) = &cli.endpoint {
        let config = PlatformConfig {
            endpoint: endpoint.clone(),
            source: cli
                .cameras
                .iter()
                .map(|entity_id| CameraSource {
                    entity_id: entity_id.clone(),
                    name: cli.name.clone(),
                })
                .collect(),
        };
        config.validate()?;
        return Ok(config);
    }

    let path = match &cli.config {
        Some(path) => path.clone(),
        None => PlatformConfig::default_path()?,
    };
    log::debug!("Loading config from {}", path.display());
    let mut config = PlatformConfig::load(&path)?;
    select_cameras(&mut config, &cli.cameras)?;
    Ok(config)
}

/// Keeps only the requested cameras; every requested id must be configured.
fn select_cameras(
    config: &mut PlatformConfig,
    cameras: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    if cameras.is_empty() {
        return Ok(());
    }
    if let Some(missing) = cameras
        .iter()
        .find(|id| !config.source.iter().any(|c| &c.entity_id == *id))
    {
        return Err(format!("Camera not configured: {missing}").into());
    }
    config.source.retain(|c| cameras.contains(&c.entity_id));
    Ok(())
}

fn render(entity: &dyn ImageProcessingEntity) -> serde_json::Value {
    serde_json::json!({
        "name": entity.name(),
        "camera_entity": entity.camera_entity(),
        "state": entity.state().to_string(),
        "attributes": entity.attributes(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PlatformConfig {
        PlatformConfig::from_json_str(
            r#"{"endpoint": "localhost:8080", "source": [
                {"entity_id": "camera.a"}, {"entity_id": "camera.b"}, {"entity_id": "camera.c"}
            ]}"#,
        )
        .unwrap()
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("facebox").chain(args.iter().copied()))
    }

    #[test]
    fn test_select_cameras_keeps_config_order() {
        let mut cfg = config();
        select_cameras(&mut cfg, &["camera.c".into(), "camera.a".into()]).unwrap();
        let ids: Vec<_> = cfg.source.iter().map(|c| c.entity_id.as_str()).collect();
        assert_eq!(ids, vec!["camera.a", "camera.c"]);
    }

    #[test]
    fn test_select_cameras_without_filter_keeps_all() {
        let mut cfg = config();
        select_cameras(&mut cfg, &[]).unwrap();
        assert_eq!(cfg.source.len(), 3);
    }

    #[test]
    fn test_select_unknown_camera_fails() {
        let mut cfg = config();
        let err = select_cameras(&mut cfg, &["camera.z".into()]).unwrap_err();
        assert!(err.to_string().contains("camera.z"));
    }

    #[test]
    fn test_endpoint_flags_build_config() {
        let cli = cli(&[
            "img.jpg",
            "--endpoint",
            "facebox:8080",
            "--camera",
            "camera.porch",
            "--name",
            "Porch",
        ]);

        let cfg = resolve_config(&cli).unwrap();

        assert_eq!(cfg.endpoint, "facebox:8080");
        assert_eq!(cfg.source.len(), 1);
        assert_eq!(cfg.source[0].name.as_deref(), Some("Porch"));
    }

    #[test]
    fn test_endpoint_flags_reject_bad_camera_id() {
        let cli = cli(&["img.jpg", "--endpoint", "facebox:8080", "--camera", "porch"]);
        assert!(resolve_config(&cli).is_err());
    }

    #[test]
    fn test_name_requires_single_camera() {
        let cli = cli(&[
            "Cargo.toml",
            "--endpoint",
            "facebox:8080",
            "--camera",
            "camera.a",
            "--camera",
            "camera.b",
            "--name",
            "Porch",
        ]);
        assert!(validate(&cli).is_err());
    }

    #[test]
    fn test_endpoint_requires_camera() {
        let cli = cli(&["Cargo.toml", "--endpoint", "facebox:8080"]);
        assert!(validate(&cli).is_err());
    }
}
