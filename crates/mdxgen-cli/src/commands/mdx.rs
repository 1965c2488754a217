//! `mdxgen mdx` - generate the MDX page tree.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::{resolve_config, resolve_output};

pub fn generate_mdx(input: &Path, output: Option<PathBuf>, config: Option<&Path>) -> Result<()> {
    let config = resolve_config(config, input)?;
    let output = resolve_output(output, "mdx");

    mdxgen_core::generate_mdx(input, &output, config)
        .with_context(|| format!("failed to generate MDX pages under {}", output.display()))
}
