//! Tests for the render boundary

use super::*;
use crate::Result;
use crate::app::services::charts::{
    ChartOutcome, ChartRenderer, JsonFileRenderer, build_all, render_all,
};
use std::time::Duration;
use tempfile::TempDir;

/// Records what it was asked to draw
#[derive(Default)]
struct RecordingRenderer {
    targets: Vec<String>,
}

impl ChartRenderer for RecordingRenderer {
    fn render(&mut self, target: &str, _outcome: &ChartOutcome) -> Result<()> {
        self.targets.push(target.to_string());
        Ok(())
    }
}

#[tokio::test]
async fn test_render_all_visits_charts_in_order() {
    let outcomes = build_all(&create_dataset());
    let mut renderer = RecordingRenderer::default();

    let ready = render_all(&mut renderer, &outcomes, Duration::ZERO)
        .await
        .unwrap();

    assert_eq!(ready, 8);
    assert_eq!(renderer.targets.len(), 8);
    assert_eq!(renderer.targets[0], "chart-1");
    assert_eq!(renderer.targets[7], "chart-8");
}

#[tokio::test(start_paused = true)]
async fn test_render_all_staggers_between_charts() {
    let outcomes = build_all(&create_dataset());
    let mut renderer = RecordingRenderer::default();

    let started = tokio::time::Instant::now();
    render_all(&mut renderer, &outcomes, Duration::from_millis(200))
        .await
        .unwrap();

    // Seven pauses between eight charts
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(1400));
    assert!(elapsed < Duration::from_millis(1600));
}

#[tokio::test]
async fn test_json_renderer_writes_files() {
    let dir = TempDir::new().unwrap();
    let mut renderer = JsonFileRenderer::new(&dir.path().join("charts")).unwrap();
    let outcomes = build_all(&[]);

    let ready = render_all(&mut renderer, &outcomes, Duration::ZERO)
        .await
        .unwrap();

    assert_eq!(ready, 0);
    assert_eq!(renderer.written().len(), 8);

    let content = std::fs::read_to_string(renderer.output_dir().join("chart-3.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["status"], "no_data");
    assert_eq!(json["reason"], "No paid apps");
}

#[test]
fn test_ready_outcome_serializes_spec() {
    let outcome = build_all(&create_dataset()).remove(0);
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["status"], "ready");
    assert_eq!(json["id"], "chart-1");
    assert_eq!(json["kind"], "horizontal_bar");
    assert_eq!(json["series"][0]["y"][4], "TRAVEL");
}
