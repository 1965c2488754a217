//! Command implementations, one module per migration target.

mod api;
mod fm;
mod mdx;

pub use api::generate_api;
pub use fm::normalize_front_matter;
pub use mdx::generate_mdx;

use mdxgen_core::Config;
use std::path::{Path, PathBuf};

/// Resolve the effective output directory: an explicit `--output` wins,
/// otherwise the subcommand's name becomes a directory under the current
/// working directory.
pub fn resolve_output(output: Option<PathBuf>, default_name: &str) -> PathBuf {
    output.unwrap_or_else(|| PathBuf::from(default_name))
}

/// Resolve the effective configuration: an explicit `--config` path wins,
/// otherwise `mdxgen.toml` next to the input directory (which may not
/// exist, yielding defaults).
pub fn resolve_config(config: Option<&Path>, input: &Path) -> mdxgen_core::Result<Config> {
    match config {
        Some(path) => Config::load(path),
        None => Config::load(&input.join("mdxgen.toml")),
    }
}
