//! Export of the displayed composition.

use std::path::PathBuf;

use cssart_backend_raster::{PngConfig, Rasterizer};
use cssart_spec::error::BackendError;

use super::{DownloadSink, Studio};

/// Result of an export request. Export never fails loudly: problems are
/// logged and reported here, and nothing is downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Nothing has been generated yet.
    Unavailable,
    /// Exactly one file was handed to the sink.
    Downloaded {
        file_name: String,
        path: PathBuf,
        /// BLAKE3 hash of the PNG bytes.
        hash: String,
    },
    /// Rasterization, encoding or delivery failed.
    Failed { reason: String },
}

impl ExportOutcome {
    pub fn is_downloaded(&self) -> bool {
        matches!(self, ExportOutcome::Downloaded { .. })
    }
}

/// `<prefix>-<unix millis>.png`.
pub fn export_file_name(prefix: &str, unix_millis: i64) -> String {
    format!("{}-{}.png", prefix, unix_millis)
}

impl Studio {
    /// Capture the displayed composition and deliver it as a PNG, named
    /// after the current time.
    pub fn export<R: Rasterizer, S: DownloadSink>(
        &self,
        rasterizer: &R,
        sink: &mut S,
        time: f64,
    ) -> ExportOutcome {
        let millis = chrono::Utc::now().timestamp_millis();
        self.export_at(rasterizer, sink, time, millis)
    }

    /// [`Studio::export`] with an explicit timestamp for the file name.
    pub fn export_at<R: Rasterizer, S: DownloadSink>(
        &self,
        rasterizer: &R,
        sink: &mut S,
        time: f64,
        unix_millis: i64,
    ) -> ExportOutcome {
        let Some(target) = self.current() else {
            log::info!("export requested before any composition was generated");
            return ExportOutcome::Unavailable;
        };

        let options = match self.raster_options(time) {
            Ok(options) => options,
            Err(e) => {
                log::error!("export failed: {}", e);
                return ExportOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        let encoded = rasterizer
            .rasterize(target, &options)
            .and_then(|image| image.encode_png(&PngConfig::default()));
        let png = match encoded {
            Ok(png) => png,
            Err(e) => {
                log::error!("[{}] export failed: {}", e.code(), e);
                return ExportOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        let file_name = export_file_name(&self.config().export.file_prefix, unix_millis);
        match sink.deliver(&file_name, &png.data) {
            Ok(path) => {
                let file_name = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .map(str::to_string)
                    .unwrap_or(file_name);
                log::info!(
                    "exported {}x{} image to {} ({})",
                    png.width,
                    png.height,
                    path.display(),
                    &png.hash[..16]
                );
                ExportOutcome::Downloaded {
                    file_name,
                    path,
                    hash: png.hash,
                }
            }
            Err(e) => {
                log::error!("export failed: could not save {}: {}", file_name, e);
                ExportOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
