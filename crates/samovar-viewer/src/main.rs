use std::path::PathBuf;

use anyhow::Result;
use samovar_engine::logging::{init_logging, LoggingConfig};

mod app;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    // One optional positional argument: the directory holding the skybox
    // faces and the bump map. Defaults to the working directory.
    let asset_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    anyhow::ensure!(
        asset_dir.is_dir(),
        "asset directory {} does not exist or is not a directory",
        asset_dir.display()
    );

    log::info!("asset directory: {}", asset_dir.display());
    app::run(asset_dir)
}
