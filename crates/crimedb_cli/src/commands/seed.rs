//! `seed`: insert the sample case dataset.

use super::CommandContext;
use crate::error::CliResult;

pub fn execute(ctx: &CommandContext<'_>) -> CliResult<()> {
    let summary = ctx.service.seed_sample_data()?;
    println!(
        "Sample data added: {} criminals, {} criminal records, {} police officers, {} crime scenes.",
        summary.criminal_ids.len(),
        summary.criminal_record_ids.len(),
        summary.police_officer_ids.len(),
        summary.crime_scene_ids.len()
    );
    Ok(())
}
