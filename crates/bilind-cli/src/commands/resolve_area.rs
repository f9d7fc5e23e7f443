use bilind_config::BilindConfig;
use bilind_engine::ReconcileBands;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ResolveAreaArgs;
use crate::commands::shared::input::read_zones;
use crate::output::output_rows;

/// Handle `bilind resolve-area`.
pub fn handle(
    args: &ResolveAreaArgs,
    config: &BilindConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let zones = read_zones(&args.zones)?;
    let response = ReconcileBands::from(&config.reconcile).resolve_all(&zones);
    output_rows(&response, &response.zones, flags.format)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::cli::OutputFormat;

    #[test]
    fn zone_array_resolves() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(
            br#"[{"name": "Z1", "perimeter": "10", "height": 2, "effective_area": 20.5},
                 {"name": "Z2", "surface_type": null, "perimeter": 2, "height": 1}]"#,
        )
        .expect("write");
        let args = ResolveAreaArgs {
            zones: file.path().to_path_buf(),
        };
        let flags = GlobalFlags {
            format: OutputFormat::Table,
            quiet: true,
            verbose: false,
            config: None,
        };
        assert!(handle(&args, &BilindConfig::default(), &flags).is_ok());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let args = ResolveAreaArgs {
            zones: dir.path().join("zones.json"),
        };
        let flags = GlobalFlags {
            format: OutputFormat::Json,
            quiet: true,
            verbose: false,
            config: None,
        };
        let err = handle(&args, &BilindConfig::default(), &flags).expect_err("missing file");
        assert!(format!("{err:#}").contains("zones.json"));
    }
}
