use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Per-wall breakdown of room totals.
    Breakdown(ProjectArgs),
    /// Detail books: walls, plaster, paint, and ceramic lines.
    Books(ProjectArgs),
    /// Authoritative area of each ceramic zone.
    ResolveArea(ResolveAreaArgs),
    /// Capped proportional allocation of a total over buckets.
    Allocate(AllocateArgs),
    /// Realign ceramic wall zones with the current room walls.
    NormalizeZones(NormalizeZonesArgs),
    /// Print the JSON Schema of the project document.
    Schema,
}

/// Arguments for commands that read a project document.
#[derive(Clone, Debug, Args)]
pub struct ProjectArgs {
    /// Project JSON file.
    pub project: PathBuf,

    /// Limit output to one room.
    #[arg(long)]
    pub room: Option<String>,
}

/// Arguments for `bilind resolve-area`.
#[derive(Clone, Debug, Args)]
pub struct ResolveAreaArgs {
    /// JSON file holding an array of zones or a project document.
    pub zones: PathBuf,
}

/// Arguments for `bilind allocate`.
///
/// Values go through the numeric normalizer: `1,5` reads as 1.5 and
/// unparseable values count as zero.
#[derive(Clone, Debug, Args)]
pub struct AllocateArgs {
    /// Amount to distribute.
    #[arg(long, allow_hyphen_values = true)]
    pub total: String,

    /// Bucket weights; missing weights count as zero.
    #[arg(long, num_args = 1.., allow_hyphen_values = true)]
    pub weights: Vec<String>,

    /// Bucket capacities; one bucket per value.
    #[arg(long, num_args = 1.., required = true, allow_hyphen_values = true)]
    pub caps: Vec<String>,
}

/// Arguments for `bilind normalize-zones`.
#[derive(Clone, Debug, Args)]
pub struct NormalizeZonesArgs {
    /// Project JSON file.
    pub project: PathBuf,
}
