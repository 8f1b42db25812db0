//! The studio: one composition on display, regenerated on demand and
//! exported as an image.
//!
//! Generation is a two-step affair. [`Studio::trigger_generate`] marks the
//! studio as pending and hands out a ticket; [`Studio::publish`] installs
//! the new composition for that ticket and returns to idle. While a ticket
//! is outstanding further triggers are refused. [`Studio::generate`] runs
//! both steps with the configured presentational delay in between.

mod export;
mod sink;

use cssart_backend_raster::RasterOptions;
use cssart_compose::{RandomSource, StyleComposer};
use cssart_spec::{Composition, RenderTarget};
use thiserror::Error;

use crate::config::{ConfigError, StudioConfig};

pub use export::{export_file_name, ExportOutcome};
pub use sink::{DirectorySink, DownloadSink};

/// Errors from the generation protocol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudioError {
    #[error("a generation is already pending")]
    GenerationPending,

    #[error("generation ticket {0} is not the pending one")]
    StaleTicket(u64),
}

/// Whether a generation is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Pending,
}

/// Proof that a generation was triggered; redeemed by [`Studio::publish`].
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a triggered generation stays pending until published"]
pub struct GenerationTicket {
    id: u64,
}

impl GenerationTicket {
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Holds the displayed composition and drives generation and export.
#[derive(Debug)]
pub struct Studio {
    config: StudioConfig,
    composer: StyleComposer,
    current: Option<RenderTarget>,
    status: GenerationStatus,
    issued: u64,
}

impl Studio {
    pub fn new(config: StudioConfig) -> Self {
        Self {
            config,
            composer: StyleComposer::new(),
            current: None,
            status: GenerationStatus::Idle,
            issued: 0,
        }
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn status(&self) -> GenerationStatus {
        self.status
    }

    /// The composition on display, if any generation has completed.
    pub fn current(&self) -> Option<&RenderTarget> {
        self.current.as_ref()
    }

    /// True once a composition is on display.
    pub fn can_export(&self) -> bool {
        self.current.is_some()
    }

    /// Start a generation. Fails while another is pending.
    pub fn trigger_generate(&mut self) -> Result<GenerationTicket, StudioError> {
        if self.status == GenerationStatus::Pending {
            return Err(StudioError::GenerationPending);
        }
        self.issued += 1;
        self.status = GenerationStatus::Pending;
        log::debug!("generation {} triggered", self.issued);
        Ok(GenerationTicket { id: self.issued })
    }

    /// Install `composition` for `ticket`, drawing one render-time opacity
    /// per layer from `rng`, and return to idle.
    pub fn publish<R: RandomSource>(
        &mut self,
        ticket: GenerationTicket,
        composition: Composition,
        rng: &mut R,
    ) -> Result<&RenderTarget, StudioError> {
        if self.status != GenerationStatus::Pending || ticket.id != self.issued {
            return Err(StudioError::StaleTicket(ticket.id));
        }

        let (min, max) = (
            self.config.generation.opacity_min,
            self.config.generation.opacity_max,
        );
        let target = RenderTarget::mount(composition, |_| rng.range(min, max));
        log::info!(
            "generation {} published with {} layers",
            ticket.id,
            target.composition().len()
        );

        self.status = GenerationStatus::Idle;
        Ok(self.current.insert(target))
    }

    /// Trigger, wait for the presentational delay, compose and publish.
    pub async fn generate<R: RandomSource>(
        &mut self,
        rng: &mut R,
    ) -> Result<&RenderTarget, StudioError> {
        let ticket = self.trigger_generate()?;
        let delay = self.config.generation.delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let composition = self.composer.generate(rng);
        self.publish(ticket, composition, rng)
    }

    /// Raster options for an export at `time` seconds.
    pub fn raster_options(&self, time: f64) -> Result<RasterOptions, ConfigError> {
        self.config.export.raster_options(time)
    }
}

impl Default for Studio {
    fn default() -> Self {
        Self::new(StudioConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use cssart_compose::{generate, DeterministicRng};

    use super::*;

    #[test]
    fn test_publish_rejects_foreign_ticket() {
        let mut studio = Studio::default();
        let mut rng = DeterministicRng::new(1);
        let issued = studio.trigger_generate().unwrap();

        let forged = GenerationTicket { id: issued.id() + 1 };
        let err = studio
            .publish(forged, generate(&mut rng), &mut rng)
            .unwrap_err();
        assert_eq!(err, StudioError::StaleTicket(issued.id() + 1));
        assert_eq!(studio.status(), GenerationStatus::Pending);

        studio.publish(issued, generate(&mut rng), &mut rng).unwrap();
        assert_eq!(studio.status(), GenerationStatus::Idle);
    }

    #[test]
    fn test_publish_when_idle_is_stale() {
        let mut studio = Studio::default();
        let mut rng = DeterministicRng::new(2);
        let err = studio
            .publish(GenerationTicket { id: 0 }, generate(&mut rng), &mut rng)
            .unwrap_err();
        assert_eq!(err, StudioError::StaleTicket(0));
        assert!(studio.current().is_none());
    }
}
