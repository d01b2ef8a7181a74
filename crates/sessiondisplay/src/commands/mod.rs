pub mod groups;
pub mod init;
pub mod show;
pub mod test_lists;
pub mod version;

use sessiondisplay_core::{DisplayConfig, SessionDisplayService};
use sessiondisplay_store::{JsonlStore, Paths};
use std::path::Path;

/// `--data-dir` wins over the environment and home directory
pub fn resolve_paths(data_dir: Option<&Path>) -> anyhow::Result<Paths> {
    match data_dir {
        Some(dir) => Ok(Paths::at(dir)),
        None => Ok(Paths::new()?),
    }
}

/// Display service over the JSONL store in `paths`
pub fn open_service(paths: &Paths) -> anyhow::Result<SessionDisplayService> {
    let config = DisplayConfig::load(&paths.config_file())?;
    let store = JsonlStore::new(paths.clone());

    Ok(SessionDisplayService::new(
        Box::new(store.clone()),
        Box::new(store.clone()),
        Box::new(store),
        config,
    ))
}
