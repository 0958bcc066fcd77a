//! Command handlers: resolve input, call the case service, print one line
//! per result.

use crate::error::CliResult;
use crate::input::Prompter;
use clap::Args;
use crimedb_core::{CaseResult, CaseService, EntityKind};
use serde::Serialize;

pub mod crime_scene;
pub mod criminal;
pub mod criminal_record;
pub mod police_officer;
pub mod seed;

/// Everything a handler needs for one invocation.
pub struct CommandContext<'conn> {
    pub service: CaseService<'conn>,
    pub prompter: Prompter,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Primary key of the row to delete
    #[arg(long)]
    pub id: Option<i64>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print rows as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Shared delete flow. A missing row is reported, not treated as failure.
pub(crate) fn delete_by_id<'conn>(
    ctx: &CommandContext<'conn>,
    args: DeleteArgs,
    entity: EntityKind,
    delete: impl FnOnce(&CaseService<'conn>, i64) -> CaseResult<bool>,
) -> CliResult<()> {
    let id = ctx
        .prompter
        .value(args.id, "id", &format!("{} id", capitalize(entity.label())))?;
    if delete(&ctx.service, id)? {
        println!("Deleted {entity} {id}.");
    } else {
        println!("{} {id} not found.", capitalize(entity.label()));
    }
    Ok(())
}

/// Shared list flow: JSON array, one line per row, or an explicit empty note.
pub(crate) fn print_rows<T: Serialize>(
    rows: &[T],
    json: bool,
    plural: &str,
    render: impl Fn(&T) -> String,
) -> CliResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(rows)?);
        return Ok(());
    }
    if rows.is_empty() {
        println!("No {plural} found.");
        return Ok(());
    }
    for row in rows {
        println!("{}", render(row));
    }
    Ok(())
}

pub(crate) fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
