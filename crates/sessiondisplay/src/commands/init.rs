use sessiondisplay_core::DisplayConfig;
use sessiondisplay_store::{atomic_write, Paths};
use std::fs::OpenOptions;

pub fn run(paths: &Paths) -> anyhow::Result<()> {
    std::fs::create_dir_all(&paths.data_dir)?;

    // Touch every data file, leaving existing records alone
    for file in paths.data_files() {
        OpenOptions::new().create(true).append(true).open(&file)?;
    }

    let config_file = paths.config_file();
    if !config_file.exists() {
        let config = serde_json::to_string_pretty(&DisplayConfig::new())?;
        atomic_write(&config_file, config.as_bytes())?;
    }

    tracing::info!(data_dir = %paths.data_dir.display(), "initialized session data");
    println!("Initialized session data in {}", paths.data_dir.display());
    Ok(())
}
