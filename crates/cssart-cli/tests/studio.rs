//! Studio behavior: the generation protocol, the presentational delay and
//! export delivery.

use std::cell::Cell;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use cssart_backend_raster::{
    Color, CpuRasterizer, PixelBuffer, RasterImage, RasterOptions, RasterizationError, Rasterizer,
};
use cssart_cli::config::StudioConfig;
use cssart_cli::studio::{
    DirectorySink, DownloadSink, ExportOutcome, GenerationStatus, Studio, StudioError,
};
use cssart_compose::{generate, DeterministicRng};
use cssart_spec::validation::validate_composition;
use cssart_spec::RenderTarget;
use pretty_assertions::assert_eq;

/// Records every delivery without touching the filesystem.
#[derive(Default)]
struct RecordingSink {
    deliveries: Vec<(String, Vec<u8>)>,
}

impl DownloadSink for RecordingSink {
    fn deliver(&mut self, file_name: &str, data: &[u8]) -> io::Result<PathBuf> {
        self.deliveries.push((file_name.to_string(), data.to_vec()));
        Ok(PathBuf::from(file_name))
    }
}

/// Paints a flat image of the requested size and counts calls.
#[derive(Default)]
struct FlatRasterizer {
    calls: Cell<usize>,
}

impl Rasterizer for FlatRasterizer {
    fn rasterize(
        &self,
        _target: &RenderTarget,
        options: &RasterOptions,
    ) -> Result<RasterImage, RasterizationError> {
        self.calls.set(self.calls.get() + 1);
        let (width, height) = options.output_size()?;
        Ok(RasterImage::new(PixelBuffer::new(
            width,
            height,
            Color::rgb(0.2, 0.4, 0.6),
        )))
    }
}

struct FailingRasterizer;

impl Rasterizer for FailingRasterizer {
    fn rasterize(
        &self,
        _target: &RenderTarget,
        _options: &RasterOptions,
    ) -> Result<RasterImage, RasterizationError> {
        Err(RasterizationError::NotMounted)
    }
}

fn small_config() -> StudioConfig {
    let mut config = StudioConfig::default();
    config.export.width = 24;
    config.export.height = 16;
    config.export.scale = 1.0;
    config
}

fn instant_studio() -> Studio {
    let mut config = small_config();
    config.generation.delay_ms = 0;
    Studio::new(config)
}

#[tokio::test(start_paused = true)]
async fn test_generation_stays_pending_during_delay() {
    let mut studio = Studio::default();
    let mut rng = DeterministicRng::new(1);

    let early = tokio::time::timeout(Duration::from_millis(499), studio.generate(&mut rng)).await;
    assert!(early.is_err());
    assert_eq!(studio.status(), GenerationStatus::Pending);
    assert!(studio.current().is_none());
    assert!(!studio.can_export());
}

#[tokio::test(start_paused = true)]
async fn test_generation_publishes_after_delay() {
    let mut studio = Studio::default();
    let mut rng = DeterministicRng::new(2);

    let start = tokio::time::Instant::now();
    let layers = studio.generate(&mut rng).await.unwrap().composition().len();
    assert!(start.elapsed() >= Duration::from_millis(500));
    assert!((3..=7).contains(&layers));
    assert_eq!(studio.status(), GenerationStatus::Idle);
    assert!(studio.can_export());
}

#[tokio::test(start_paused = true)]
async fn test_trigger_refused_while_pending() {
    let mut studio = Studio::default();
    let mut rng = DeterministicRng::new(3);

    let _ = tokio::time::timeout(Duration::from_millis(10), studio.generate(&mut rng)).await;
    assert_eq!(studio.trigger_generate(), Err(StudioError::GenerationPending));
    assert_eq!(
        studio.generate(&mut rng).await.err(),
        Some(StudioError::GenerationPending)
    );
}

#[test]
fn test_manual_trigger_and_publish() {
    let mut studio = instant_studio();
    let mut rng = DeterministicRng::new(4);

    let first = studio.trigger_generate().unwrap();
    let composition = generate(&mut rng);
    let published = studio
        .publish(first, composition.clone(), &mut rng)
        .unwrap()
        .clone();
    assert_eq!(published.composition(), &composition);

    let second = studio.trigger_generate().unwrap();
    assert_ne!(second.id(), 0);
    let replacement = generate(&mut rng);
    studio.publish(second, replacement.clone(), &mut rng).unwrap();
    assert_eq!(studio.current().unwrap().composition(), &replacement);
}

#[tokio::test]
async fn test_opacities_follow_configured_range() {
    let mut config = small_config();
    config.generation.delay_ms = 0;
    config.generation.opacity_min = 0.25;
    config.generation.opacity_max = 0.5;
    let mut studio = Studio::new(config);

    for seed in 0..20 {
        let target = studio
            .generate(&mut DeterministicRng::new(seed))
            .await
            .unwrap();
        assert_eq!(target.opacities().len(), target.composition().len());
        for &opacity in target.opacities() {
            assert!((0.25..0.5).contains(&opacity), "opacity {}", opacity);
        }
        assert!(validate_composition(target.composition()).is_ok());
    }
}

#[test]
fn test_export_before_generation_is_unavailable() {
    let studio = instant_studio();
    let rasterizer = FlatRasterizer::default();
    let mut sink = RecordingSink::default();

    let outcome = studio.export(&rasterizer, &mut sink, 0.0);
    assert_eq!(outcome, ExportOutcome::Unavailable);
    assert_eq!(rasterizer.calls.get(), 0);
    assert!(sink.deliveries.is_empty());
}

#[tokio::test]
async fn test_export_delivers_exactly_one_png() {
    let mut studio = instant_studio();
    studio.generate(&mut DeterministicRng::new(5)).await.unwrap();

    let rasterizer = FlatRasterizer::default();
    let mut sink = RecordingSink::default();
    let outcome = studio.export_at(&rasterizer, &mut sink, 0.0, 1_700_000_000_123);

    match outcome {
        ExportOutcome::Downloaded {
            file_name, hash, ..
        } => {
            assert_eq!(file_name, "css-art-1700000000123.png");
            assert_eq!(hash.len(), 64);
        }
        other => panic!("expected download, got {:?}", other),
    }
    assert_eq!(rasterizer.calls.get(), 1);
    assert_eq!(sink.deliveries.len(), 1);
    assert_eq!(&sink.deliveries[0].1[..8], b"\x89PNG\r\n\x1a\n");
}

#[tokio::test]
async fn test_failed_rasterization_downloads_nothing() {
    let mut studio = instant_studio();
    studio.generate(&mut DeterministicRng::new(6)).await.unwrap();

    let mut sink = RecordingSink::default();
    let outcome = studio.export(&FailingRasterizer, &mut sink, 0.0);
    assert!(matches!(outcome, ExportOutcome::Failed { .. }));
    assert!(!outcome.is_downloaded());
    assert!(sink.deliveries.is_empty());
}

#[tokio::test]
async fn test_export_to_directory_with_cpu_rasterizer() {
    let tmp = tempfile::tempdir().unwrap();
    let mut studio = instant_studio();
    studio.generate(&mut DeterministicRng::new(7)).await.unwrap();

    let mut sink = DirectorySink::new(tmp.path().join("exports"));
    let outcome = studio.export_at(&CpuRasterizer::new(), &mut sink, 0.0, 42);

    let ExportOutcome::Downloaded { path, .. } = outcome else {
        panic!("expected download, got {:?}", outcome);
    };
    assert_eq!(path, tmp.path().join("exports").join("css-art-42.png"));
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[tokio::test]
async fn test_export_is_repeatable_for_a_mounted_composition() {
    let mut studio = instant_studio();
    studio.generate(&mut DeterministicRng::new(8)).await.unwrap();

    let mut sink = RecordingSink::default();
    let first = studio.export_at(&CpuRasterizer::new(), &mut sink, 0.0, 1);
    let second = studio.export_at(&CpuRasterizer::new(), &mut sink, 0.0, 2);

    let hash = |outcome: &ExportOutcome| match outcome {
        ExportOutcome::Downloaded { hash, .. } => hash.clone(),
        other => panic!("expected download, got {:?}", other),
    };
    assert_eq!(hash(&first), hash(&second));
    assert_eq!(sink.deliveries.len(), 2);
}

#[tokio::test]
async fn test_exports_in_the_same_millisecond_keep_both_files() {
    let tmp = tempfile::tempdir().unwrap();
    let mut studio = instant_studio();
    studio.generate(&mut DeterministicRng::new(9)).await.unwrap();

    let mut sink = DirectorySink::new(tmp.path());
    let rasterizer = FlatRasterizer::default();
    let first = studio.export_at(&rasterizer, &mut sink, 0.0, 1000);
    let second = studio.export_at(&rasterizer, &mut sink, 0.0, 1000);

    let name = |outcome: &ExportOutcome| match outcome {
        ExportOutcome::Downloaded { file_name, path, .. } => {
            assert!(path.exists());
            file_name.clone()
        }
        other => panic!("expected download, got {:?}", other),
    };
    assert_eq!(name(&first), "css-art-1000.png");
    assert_eq!(name(&second), "css-art-1000 (1).png");
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 2);
}
