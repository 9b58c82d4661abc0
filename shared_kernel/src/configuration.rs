use std::path::PathBuf;

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Each crate deserializes its own slice of the shared settings file, so
/// unknown sections are ignored per caller.
pub fn config<Settings: DeserializeOwned>() -> anyhow::Result<Settings> {
    let configuration_directory =
        configuration_directory().context("Failed to locate the configuration directory")?;
    let file = if cfg!(test) { "test.yaml" } else { "base.yaml" };
    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join(file)))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .context("Failed to build configuration")?;

    settings
        .try_deserialize::<Settings>()
        .context("Failed to deserialize settings")
}

// The configuration directory sits at the workspace root; binaries usually run
// from there, but a member crate directory works too.
fn configuration_directory() -> anyhow::Result<PathBuf> {
    let current_dir =
        std::env::current_dir().context("Failed to determine the current directory")?;
    let local = current_dir.join("configuration");
    if local.is_dir() {
        return Ok(local);
    }
    match current_dir.parent() {
        Some(parent) if parent.join("configuration").is_dir() => {
            Ok(parent.join("configuration"))
        }
        _ => Ok(local),
    }
}
