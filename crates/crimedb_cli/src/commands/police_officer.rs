//! `add_police_officer`, `delete_police_officer`, `list_police_officers`.

use super::{delete_by_id, print_rows, CommandContext, DeleteArgs, ListArgs};
use crate::error::CliResult;
use clap::Args;
use crimedb_core::{EntityKind, NewPoliceOfficer, PoliceOfficer};

#[derive(Debug, Args)]
pub struct AddPoliceOfficerArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub badge_number: Option<String>,
    #[arg(long)]
    pub rank: Option<String>,
    #[arg(long)]
    pub station: Option<String>,
}

pub fn add(ctx: &CommandContext<'_>, args: AddPoliceOfficerArgs) -> CliResult<()> {
    let input = &ctx.prompter;
    let officer = NewPoliceOfficer {
        first_name: input.text(args.first_name, "first-name", "First name")?,
        last_name: input.text(args.last_name, "last-name", "Last name")?,
        badge_number: input.text(args.badge_number, "badge-number", "Badge number")?,
        rank: input.text(args.rank, "rank", "Rank")?,
        station: input.text(args.station, "station", "Station")?,
    };

    let id = ctx.service.add_police_officer(&officer)?;
    println!(
        "Added police officer {id}: {} {} (badge {})",
        officer.first_name.trim(),
        officer.last_name.trim(),
        officer.badge_number.trim()
    );
    Ok(())
}

pub fn delete(ctx: &CommandContext<'_>, args: DeleteArgs) -> CliResult<()> {
    delete_by_id(ctx, args, EntityKind::PoliceOfficer, |service, id| {
        service.delete_police_officer(id)
    })
}

pub fn list(ctx: &CommandContext<'_>, args: ListArgs) -> CliResult<()> {
    let officers = ctx.service.list_police_officers()?;
    print_rows(&officers, args.json, "police officers", render)
}

fn render(officer: &PoliceOfficer) -> String {
    format!(
        "{}: {} {}, badge {}, {}",
        officer.id,
        officer.rank,
        officer.full_name(),
        officer.badge_number,
        officer.station
    )
}
