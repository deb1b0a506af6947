//! Render boundary for chart outcomes
//!
//! The pipeline only produces specs. A [`ChartRenderer`] decides what drawing
//! means; the bundled [`JsonFileRenderer`] writes one JSON document per chart
//! container so any plotting front end can pick them up.

use super::ChartOutcome;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Draws one chart outcome into a named target
pub trait ChartRenderer {
    fn render(&mut self, target: &str, outcome: &ChartOutcome) -> Result<()>;
}

/// Writes `<target>.json` into an output directory
#[derive(Debug)]
pub struct JsonFileRenderer {
    output_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl JsonFileRenderer {
    /// Create the renderer, creating the output directory if needed
    pub fn new(output_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(output_dir).map_err(|e| {
            Error::io(
                format!("Failed to create chart directory {}", output_dir.display()),
                e,
            )
        })?;
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            written: Vec::new(),
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Files written so far, in render order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ChartRenderer for JsonFileRenderer {
    fn render(&mut self, target: &str, outcome: &ChartOutcome) -> Result<()> {
        let path = self.output_dir.join(format!("{}.json", target));
        let json = serde_json::to_string_pretty(outcome)?;
        std::fs::write(&path, json).map_err(|e| {
            Error::render(target, format!("failed to write {}: {}", path.display(), e))
        })?;
        debug!("Wrote chart {} to {}", target, path.display());
        self.written.push(path);
        Ok(())
    }
}

/// Render every outcome in order, pausing `stagger` between charts
///
/// No-data outcomes are handed to the renderer too so it can show the status.
/// Returns how many charts had data.
pub async fn render_all<R: ChartRenderer>(
    renderer: &mut R,
    outcomes: &[ChartOutcome],
    stagger: Duration,
) -> Result<usize> {
    let mut ready = 0;
    for (index, outcome) in outcomes.iter().enumerate() {
        if index > 0 && !stagger.is_zero() {
            tokio::time::sleep(stagger).await;
        }
        renderer.render(outcome.id(), outcome)?;
        if outcome.is_ready() {
            ready += 1;
        }
    }
    info!("Rendered {} charts ({} with data)", outcomes.len(), ready);
    Ok(ready)
}
