//! Chart service: fetch chart series and draw one canvas per series.

use piplant_domain::chart::{CanvasSize, CanvasSpec, ChartSeries};
use piplant_domain::error::{DashboardError, PayloadError};

use crate::ports::{ApiClient, ChartSurface, Dialogs};

/// Where and how big charts are drawn, and what to say when loading fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSettings {
    pub container_id: String,
    pub canvas: CanvasSize,
    pub failure_message: String,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            container_id: "charts".to_owned(),
            canvas: CanvasSize::default(),
            failure_message: "Could not load charts".to_owned(),
        }
    }
}

/// Summary of one fetch-and-render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartReport {
    /// The response was usable. Counts are per series.
    Rendered {
        rendered: usize,
        skipped: usize,
        failed: usize,
    },
    /// Nothing was drawn; the user was alerted.
    Failed,
}

/// Application service behind the chart page.
pub struct ChartService<A, S, D> {
    api: A,
    surface: S,
    dialogs: D,
    settings: ChartSettings,
}

impl<A: ApiClient, S: ChartSurface, D: Dialogs> ChartService<A, S, D> {
    pub fn new(api: A, surface: S, dialogs: D) -> Self {
        Self {
            api,
            surface,
            dialogs,
            settings: ChartSettings::default(),
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: ChartSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Fetch `url` and render every series in response order.
    ///
    /// Calling this twice appends a second set of canvases.
    ///
    /// # Errors
    ///
    /// Returns an error only when the failure alert itself cannot be shown.
    /// Fetch and payload failures are alerted and reported as
    /// [`ChartReport::Failed`].
    #[tracing::instrument(skip(self))]
    pub async fn fetch_and_render(&self, url: &str) -> Result<ChartReport, DashboardError> {
        let entries = match self.fetch(url).await {
            Ok(entries) => entries,
            Err(err) => {
                tracing::error!(error = %err, "could not load charts");
                self.dialogs.alert(&self.settings.failure_message).await?;
                return Ok(ChartReport::Failed);
            }
        };

        let (mut rendered, mut skipped, mut failed) = (0, 0, 0);
        for entry in entries {
            let series = match entry {
                Ok(series) => series,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping chart series");
                    skipped += 1;
                    continue;
                }
            };

            let canvas = CanvasSpec::for_series(&series, self.settings.canvas);
            match self
                .surface
                .render(&self.settings.container_id, &canvas, &series.config)
            {
                Ok(()) => rendered += 1,
                Err(err) => {
                    tracing::error!(series = %series.title, error = %err, "chart render failed");
                    failed += 1;
                }
            }
        }

        tracing::debug!(rendered, skipped, failed, "charts rendered");
        Ok(ChartReport::Rendered {
            rendered,
            skipped,
            failed,
        })
    }

    async fn fetch(
        &self,
        url: &str,
    ) -> Result<Vec<Result<ChartSeries, PayloadError>>, DashboardError> {
        let response = self.api.get_json(url).await?;
        Ok(ChartSeries::parse_all(&response)?)
    }
}
