use thiserror::Error;

/// Errors surfaced to the host for display.
#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "Moonraker URL is not configured. Please enter your Moonraker address (e.g. http://192.168.1.100:7125)."
    )]
    NotConfigured,
    #[error("Cannot reach Moonraker at {url}. Check the URL and that Moonraker is running.")]
    Unreachable { url: String },
    #[error("Timed out connecting to Moonraker at {url}.")]
    Timeout { url: String },
    #[error("Failed to fetch printer data: {0}")]
    Fetch(String),
    #[error("Failed to render display: {0}")]
    Render(#[source] anyhow::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
