use bilind_config::BilindConfig;

use crate::cli::{Commands, GlobalFlags};
use crate::commands;

/// Route a parsed command to its handler.
pub fn dispatch(
    command: &Commands,
    config: &BilindConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Breakdown(args) => commands::breakdown::handle(args, config, flags),
        Commands::Books(args) => commands::books::handle(args, config, flags),
        Commands::ResolveArea(args) => commands::resolve_area::handle(args, config, flags),
        Commands::Allocate(args) => commands::allocate::handle(args, config, flags),
        Commands::NormalizeZones(args) => commands::normalize_zones::handle(args, flags),
        Commands::Schema => commands::schema::handle(flags),
    }
}
