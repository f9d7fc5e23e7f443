use bilind_config::BilindConfig;
use bilind_core::reports::DetailBooks;
use bilind_engine::{BreakdownOptions, project_books, room_books};

use crate::cli::root_commands::ProjectArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::input::read_project;
use crate::output::output;
use crate::output::table::{TableOptions, render_rows};

/// Handle `bilind books`.
pub fn handle(
    args: &ProjectArgs,
    config: &BilindConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let project = read_project(&args.project)?;
    let options = BreakdownOptions::from(config);

    let books = match args.room.as_deref() {
        Some(room) => room_books(&project, room, &options)?,
        None => project_books(&project, &options),
    };

    if flags.format == OutputFormat::Table {
        println!("{}", render_books(&books, TableOptions::from_env()));
        return Ok(());
    }
    output(&books, flags.format)
}

fn render_books(books: &DetailBooks, options: TableOptions) -> String {
    [
        ("Walls", render_rows(&books.walls, options)),
        ("Plaster", render_rows(&books.plaster, options)),
        ("Paint", render_rows(&books.paint, options)),
        ("Ceramic", render_rows(&books.ceramic, options)),
    ]
    .into_iter()
    .map(|(title, table)| format!("{title}\n{table}"))
    .collect::<Vec<_>>()
    .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_book_gets_a_section() {
        let rendered = render_books(&DetailBooks::default(), TableOptions::default());
        let titles = rendered
            .lines()
            .filter(|line| matches!(*line, "Walls" | "Plaster" | "Paint" | "Ceramic"))
            .count();
        assert_eq!(titles, 4);
        assert_eq!(rendered.matches("(no rows)").count(), 4);
    }
}
