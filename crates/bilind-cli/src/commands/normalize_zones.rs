use bilind_core::responses::NormalizeZonesResponse;
use bilind_engine::project::normalize_project_zones;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::NormalizeZonesArgs;
use crate::commands::shared::input::read_project;
use crate::output::output_rows;

/// Handle `bilind normalize-zones`.
pub fn handle(args: &NormalizeZonesArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project = read_project(&args.project)?;
    let normalization = normalize_project_zones(&project);
    tracing::info!(
        updated = normalization.updated,
        skipped = normalization.skipped,
        "ceramic zones normalized"
    );
    let response = NormalizeZonesResponse::from(normalization);
    output_rows(&response, &response.zones, flags.format)
}
