//! `mdxgen api` - generate the JSON content API.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::{resolve_config, resolve_output};

pub fn generate_api(input: &Path, output: Option<PathBuf>, config: Option<&Path>) -> Result<()> {
    let config = resolve_config(config, input)?;
    let output = resolve_output(output, "api");

    mdxgen_core::generate_api(input, &output, config)
        .with_context(|| format!("failed to generate content API under {}", output.display()))
}
