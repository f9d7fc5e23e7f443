use bilind_core::entities::Project;

use crate::cli::{GlobalFlags, OutputFormat};

/// Handle `bilind schema`: the JSON Schema of the project document.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    println!("{}", render(flags.format)?);
    Ok(())
}

fn render(format: OutputFormat) -> anyhow::Result<String> {
    let schema = schemars::schema_for!(Project);
    Ok(match format {
        OutputFormat::Raw => serde_json::to_string(&schema)?,
        OutputFormat::Json | OutputFormat::Table => serde_json::to_string_pretty(&schema)?,
    })
}
