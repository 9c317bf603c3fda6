//! LDH Stage Predictor - Main Entry Point

use api::{init_logging, run_server, settings::Settings};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1);
    let settings = Settings::load(config_path.as_deref())?;
    init_logging(&settings.log)?;

    info!("=== LDH Stage Predictor v{} ===", env!("CARGO_PKG_VERSION"));
    if settings.model.onnx_path.is_none() {
        info!("No ONNX model configured, using the threshold classifier");
    }

    run_server(settings).await
}
