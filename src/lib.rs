mod config;
mod display;
mod error;
pub mod format;
pub mod moonraker;
mod plugin;

pub use config::{Settings, MOONRAKER_URL_VAR};
pub use display::DisplayData;
pub use error::{Error, Result};
pub use moonraker::{status, MoonrakerClient, QUERY_OBJECTS, REQUEST_TIMEOUT};
pub use plugin::{JsonRenderer, KlipperProgress, Renderer, TEMPLATE};
