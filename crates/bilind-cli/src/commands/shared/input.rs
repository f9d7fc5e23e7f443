use std::path::Path;

use anyhow::Context;
use bilind_core::entities::{CeramicZone, Project};
use serde::Deserialize;

/// Read and parse a project document.
pub fn read_project(path: &Path) -> anyhow::Result<Project> {
    let raw = read(path)?;
    let project = Project::from_json_str(&raw)
        .with_context(|| format!("invalid project document {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        rooms = project.rooms.len(),
        openings = project.openings.len(),
        zones = project.ceramic_zones.len(),
        "project loaded"
    );
    Ok(project)
}

/// Zones given either as a bare array or inside a project document.
#[derive(Deserialize)]
#[serde(untagged)]
enum ZonesDocument {
    List(Vec<CeramicZone>),
    Project(Project),
}

/// Read ceramic zones from a zone array or a project document.
pub fn read_zones(path: &Path) -> anyhow::Result<Vec<CeramicZone>> {
    let raw = read(path)?;
    let document: ZonesDocument = serde_json::from_str(&raw)
        .with_context(|| format!("invalid zones document {}", path.display()))?;
    Ok(match document {
        ZonesDocument::List(zones) => zones,
        ZonesDocument::Project(project) => project.ceramic_zones,
    })
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
