//! Build pipeline: discover → select → load → render → write.
//!
//! Nothing is written unless both documents load. The output file is
//! `<OUTPUT_DIR>/<stem>.html` and is overwritten without confirmation.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Config;
use crate::errors::BuildError;
use crate::loader::load_document;
use crate::models::{LayoutConfig, Profile};
use crate::render::generate_html;
use crate::selection::{discover_candidates, select_candidate};

/// Runs one build and returns the path of the written HTML file.
pub fn run<R, W>(config: &Config, input: &mut R, output: &mut W) -> Result<PathBuf, BuildError>
where
    R: BufRead,
    W: Write,
{
    let candidates = discover_candidates(&config.resume_data_dir)?;
    let selected = select_candidate(&candidates, input, output)?;
    let resume_path = config.resume_data_dir.join(&selected);

    info!("Loading resume data from {}...", resume_path.display());
    let resume_doc = load_document(&resume_path);
    let layout_doc = load_document(&config.layout_config);

    let failed: Vec<PathBuf> = [(&resume_doc, &resume_path), (&layout_doc, &config.layout_config)]
        .into_iter()
        .filter(|(doc, _)| doc.is_empty())
        .map(|(_, path)| path.clone())
        .collect();
    if !failed.is_empty() {
        return Err(BuildError::LoadFailed(failed));
    }

    info!("Generating HTML...");
    let profile = Profile::from_document(&resume_doc);
    let layout = LayoutConfig::from_document(&layout_doc);
    let html = generate_html(&profile, &layout);

    let output_path = output_path_for(&config.output_dir, &selected);
    std::fs::write(&output_path, html).map_err(|source| BuildError::Write {
        path: output_path.clone(),
        source,
    })?;

    writeln!(output, "Resume generated successfully: {}", output_path.display())?;
    Ok(output_path)
}

/// `<dir>/<stem>.html` for the selected profile file name.
fn output_path_for(dir: &Path, selected: &str) -> PathBuf {
    let stem = Path::new(selected)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    dir.join(format!("{stem}.html"))
}
