use bilind_config::BilindConfig;
use bilind_core::reports::RoomReport;
use bilind_engine::{BreakdownOptions, breakdown_project, breakdown_room};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ProjectArgs;
use crate::commands::shared::input::read_project;
use crate::output::output_rows;
use crate::output::views::BreakdownLine;

/// Handle `bilind breakdown`.
pub fn handle(
    args: &ProjectArgs,
    config: &BilindConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let project = read_project(&args.project)?;
    let options = BreakdownOptions::from(config);

    if let Some(room) = args.room.as_deref() {
        let report = breakdown_room(&project, room, &options)?;
        return emit(std::slice::from_ref(&report), &report, flags);
    }

    let result = breakdown_project(&project, &options);
    emit(&result.rooms, &result, flags)
}

fn emit<T: Serialize>(
    reports: &[RoomReport],
    value: &T,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let lines = BreakdownLine::from_reports(reports);
    output_rows(value, &lines, flags.format)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use bilind_core::errors::CoreError;

    use super::*;
    use crate::cli::OutputFormat;

    const PROJECT: &str = r#"{
        "name": "Villa",
        "rooms": [{"name": "Hall", "walls": [
            {"name": "Wall 1", "length": 4, "height": 3},
            {"name": "Wall 2", "length": 6, "height": 3}
        ]}],
        "openings": [{"name": "D1", "w": 0.9, "h": 2, "host_wall": "Wall 2",
                      "assigned_rooms": ["Hall"]}],
        "aggregates": [{"room_name": "Hall", "walls_gross": 30, "walls_openings": 1.8}]
    }"#;

    fn project_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(PROJECT.as_bytes()).expect("write");
        file
    }

    fn flags(format: OutputFormat) -> GlobalFlags {
        GlobalFlags {
            format,
            quiet: true,
            verbose: false,
            config: None,
        }
    }

    #[test]
    fn unknown_room_is_not_found() {
        let file = project_file();
        let args = ProjectArgs {
            project: file.path().to_path_buf(),
            room: Some("Garage".into()),
        };
        let err = handle(&args, &BilindConfig::default(), &flags(OutputFormat::Raw))
            .expect_err("unknown room must fail");

        let core = err.downcast_ref::<CoreError>().expect("core error");
        assert!(matches!(
            core,
            CoreError::NotFound { entity_type, id } if entity_type == "room" && id == "Garage"
        ));
    }

    #[test]
    fn known_room_renders_in_every_format() {
        let file = project_file();
        let args = ProjectArgs {
            project: file.path().to_path_buf(),
            room: Some("Hall".into()),
        };
        for format in [OutputFormat::Json, OutputFormat::Table, OutputFormat::Raw] {
            assert!(handle(&args, &BilindConfig::default(), &flags(format)).is_ok());
        }
    }

    #[test]
    fn whole_project_runs() {
        let file = project_file();
        let args = ProjectArgs {
            project: file.path().to_path_buf(),
            room: None,
        };
        assert!(handle(&args, &BilindConfig::default(), &flags(OutputFormat::Table)).is_ok());
    }
}
