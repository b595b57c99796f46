use klipper_progress::{JsonRenderer, KlipperProgress, Settings};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::from_env();
    let plugin = KlipperProgress::new();

    let rendered = plugin.generate_image(&settings, &JsonRenderer).await?;
    println!("{rendered}");
    Ok(())
}
