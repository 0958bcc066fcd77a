//! `add_criminal_record`, `delete_criminal_record`, `list_criminal_records`.

use super::{delete_by_id, print_rows, CommandContext, DeleteArgs, ListArgs};
use crate::error::CliResult;
use chrono::NaiveDate;
use clap::Args;
use crimedb_core::{CriminalRecordDetail, EntityKind, NewCriminalRecord};

#[derive(Debug, Args)]
pub struct AddCriminalRecordArgs {
    /// Id of an existing criminal
    #[arg(long)]
    pub criminal_id: Option<i64>,
    #[arg(long)]
    pub crime_type: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub crime_date: Option<NaiveDate>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub sentence: Option<String>,
}

pub fn add(ctx: &CommandContext<'_>, args: AddCriminalRecordArgs) -> CliResult<()> {
    let input = &ctx.prompter;
    let record = NewCriminalRecord {
        criminal_id: input.value(args.criminal_id, "criminal-id", "Criminal id")?,
        crime_type: input.text(args.crime_type, "crime-type", "Crime type")?,
        crime_date: input.value(args.crime_date, "crime-date", "Crime date (YYYY-MM-DD)")?,
        description: input.text(args.description, "description", "Description")?,
        sentence: input.text(args.sentence, "sentence", "Sentence")?,
    };

    let id = ctx.service.add_criminal_record(&record)?;
    match ctx.service.criminal_record_detail(id)? {
        Some(detail) => println!(
            "Added criminal record {id}: {} for {} (criminal {})",
            detail.record.crime_type,
            detail.criminal.full_name(),
            detail.criminal.id
        ),
        None => println!("Added criminal record {id}"),
    }
    Ok(())
}

pub fn delete(ctx: &CommandContext<'_>, args: DeleteArgs) -> CliResult<()> {
    delete_by_id(ctx, args, EntityKind::CriminalRecord, |service, id| {
        service.delete_criminal_record(id)
    })
}

pub fn list(ctx: &CommandContext<'_>, args: ListArgs) -> CliResult<()> {
    let records = ctx.service.list_criminal_record_details()?;
    print_rows(&records, args.json, "criminal records", render)
}

fn render(detail: &CriminalRecordDetail) -> String {
    let record = &detail.record;
    format!(
        "{}: {} on {} by {} (criminal {}): {}; sentence: {}",
        record.id,
        record.crime_type,
        record.crime_date,
        detail.criminal.full_name(),
        record.criminal_id,
        record.description,
        record.sentence
    )
}
