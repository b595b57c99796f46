//! Entry point called by the display host.
use tracing::{debug, info};

use crate::config::Settings;
use crate::display::DisplayData;
use crate::error::{Error, Result};
use crate::moonraker::MoonrakerClient;

/// Template the host renders the display data into.
pub const TEMPLATE: &str = "klipper_progress.html";

/// Turns display data into whatever the host shows (usually an image).
pub trait Renderer {
    type Output;

    fn render(
        &self,
        settings: &Settings,
        template: &str,
        data: &DisplayData,
    ) -> anyhow::Result<Self::Output>;
}

/// Renders the data dictionary as pretty printed JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    type Output = String;

    fn render(
        &self,
        _settings: &Settings,
        _template: &str,
        data: &DisplayData,
    ) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }
}

/// Klipper print progress plugin.
#[derive(Debug, Default)]
pub struct KlipperProgress(());

impl KlipperProgress {
    pub fn new() -> Self {
        Self(())
    }

    /// Fetch the current printer state and collect the template values.
    pub async fn display_data(&self, settings: &Settings) -> Result<DisplayData> {
        let base_url = settings.base_url()?;
        let status = MoonrakerClient::new(base_url).query_status().await?;
        let data = DisplayData::from_status(&status);
        debug!(state = %data.state, progress = data.progress_pct, "collected display data");
        Ok(data)
    }

    /// Fetch, format and hand the result to `renderer`.
    pub async fn generate_image<R: Renderer>(
        &self,
        settings: &Settings,
        renderer: &R,
    ) -> Result<R::Output> {
        let data = self.display_data(settings).await?;
        let output = renderer
            .render(settings, TEMPLATE, &data)
            .map_err(Error::Render)?;
        info!(state = %data.state, filename = %data.filename, "rendered print progress");
        Ok(output)
    }
}
