//! `add_criminal`, `delete_criminal`, `list_criminals`.

use super::{delete_by_id, print_rows, CommandContext, DeleteArgs, ListArgs};
use crate::error::CliResult;
use chrono::NaiveDate;
use clap::Args;
use crimedb_core::{Criminal, EntityKind, NewCriminal};

#[derive(Debug, Args)]
pub struct AddCriminalArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub date_of_birth: Option<NaiveDate>,
    #[arg(long)]
    pub gender: Option<String>,
    #[arg(long)]
    pub nationality: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub phone_number: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub wanted_level: Option<i64>,
}

pub fn add(ctx: &CommandContext<'_>, args: AddCriminalArgs) -> CliResult<()> {
    let input = &ctx.prompter;
    let criminal = NewCriminal {
        first_name: input.text(args.first_name, "first-name", "First name")?,
        last_name: input.text(args.last_name, "last-name", "Last name")?,
        date_of_birth: input.value(
            args.date_of_birth,
            "date-of-birth",
            "Date of birth (YYYY-MM-DD)",
        )?,
        gender: input.text(args.gender, "gender", "Gender")?,
        nationality: input.text(args.nationality, "nationality", "Nationality")?,
        address: input.text(args.address, "address", "Address")?,
        phone_number: input.text(args.phone_number, "phone-number", "Phone number")?,
        email: input.text(args.email, "email", "Email")?,
        wanted_level: input.value(args.wanted_level, "wanted-level", "Wanted level")?,
    };

    let id = ctx.service.add_criminal(&criminal)?;
    println!(
        "Added criminal {id}: {} {}",
        criminal.first_name.trim(),
        criminal.last_name.trim()
    );
    Ok(())
}

pub fn delete(ctx: &CommandContext<'_>, args: DeleteArgs) -> CliResult<()> {
    delete_by_id(ctx, args, EntityKind::Criminal, |service, id| {
        service.delete_criminal(id)
    })
}

pub fn list(ctx: &CommandContext<'_>, args: ListArgs) -> CliResult<()> {
    let criminals = ctx.service.list_criminals()?;
    print_rows(&criminals, args.json, "criminals", render)
}

fn render(criminal: &Criminal) -> String {
    format!(
        "{}: {} (born {}, {}, {}) address: {}; phone: {}; email: {}; wanted level {}",
        criminal.id,
        criminal.full_name(),
        criminal.date_of_birth,
        criminal.gender,
        criminal.nationality,
        criminal.address,
        criminal.phone_number,
        criminal.email,
        criminal.wanted_level
    )
}

#[cfg(test)]
mod tests {
    use super::render;
    use chrono::NaiveDate;
    use crimedb_core::Criminal;

    #[test]
    fn render_fits_on_one_line() {
        let line = render(&Criminal {
            id: 1,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            gender: "Male".to_string(),
            nationality: "US".to_string(),
            address: "123 Main St, City".to_string(),
            phone_number: "555-1234".to_string(),
            email: "john.doe@example.com".to_string(),
            wanted_level: 3,
        });
        assert!(line.starts_with("1: John Doe (born 1990-01-01, Male, US)"));
        assert!(line.ends_with("wanted level 3"));
        assert!(!line.contains('\n'));
    }
}
