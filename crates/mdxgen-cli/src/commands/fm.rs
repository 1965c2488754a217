//! `mdxgen fm` - rewrite posts with normalized front matter.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::{resolve_config, resolve_output};

pub fn normalize_front_matter(
    input: &Path,
    output: Option<PathBuf>,
    config: Option<&Path>,
) -> Result<()> {
    let config = resolve_config(config, input)?;
    let output = resolve_output(output, "fm");

    mdxgen_core::generate_fm(input, &output, config)
        .with_context(|| format!("failed to rewrite front matter under {}", output.display()))
}
