//! `add_crime_scene`, `delete_crime_scene`, `list_crime_scenes`.

use super::{delete_by_id, print_rows, CommandContext, DeleteArgs, ListArgs};
use crate::error::CliResult;
use chrono::NaiveDate;
use clap::Args;
use crimedb_core::{CrimeSceneDetail, EntityKind, NewCrimeScene};

#[derive(Debug, Args)]
pub struct AddCrimeSceneArgs {
    #[arg(long)]
    pub location: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub date: Option<NaiveDate>,
    #[arg(long)]
    pub description: Option<String>,
    /// Id of an existing police officer
    #[arg(long)]
    pub investigating_officer_id: Option<i64>,
    /// Id of an existing criminal record
    #[arg(long)]
    pub criminal_record_id: Option<i64>,
}

pub fn add(ctx: &CommandContext<'_>, args: AddCrimeSceneArgs) -> CliResult<()> {
    let input = &ctx.prompter;
    let scene = NewCrimeScene {
        location: input.text(args.location, "location", "Location")?,
        date: input.value(args.date, "date", "Date (YYYY-MM-DD)")?,
        description: input.text(args.description, "description", "Description")?,
        investigating_officer_id: input.value(
            args.investigating_officer_id,
            "investigating-officer-id",
            "Investigating officer id",
        )?,
        criminal_record_id: input.value(
            args.criminal_record_id,
            "criminal-record-id",
            "Criminal record id",
        )?,
    };

    let id = ctx.service.add_crime_scene(&scene)?;
    println!(
        "Added crime scene {id}: {} (officer {}, criminal record {})",
        scene.location.trim(),
        scene.investigating_officer_id,
        scene.criminal_record_id
    );
    Ok(())
}

pub fn delete(ctx: &CommandContext<'_>, args: DeleteArgs) -> CliResult<()> {
    delete_by_id(ctx, args, EntityKind::CrimeScene, |service, id| {
        service.delete_crime_scene(id)
    })
}

pub fn list(ctx: &CommandContext<'_>, args: ListArgs) -> CliResult<()> {
    let scenes = ctx.service.list_crime_scene_details()?;
    print_rows(&scenes, args.json, "crime scenes", render)
}

fn render(detail: &CrimeSceneDetail) -> String {
    let scene = &detail.scene;
    format!(
        "{}: {} on {}, investigated by {} (officer {}), {} record {}: {}",
        scene.id,
        scene.location,
        scene.date,
        detail.investigating_officer.full_name(),
        scene.investigating_officer_id,
        detail.criminal_record.crime_type,
        scene.criminal_record_id,
        scene.description
    )
}
