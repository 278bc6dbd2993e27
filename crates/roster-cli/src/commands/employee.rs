//! Employee inspection CLI commands.

use clap::{Args, Subcommand};
use tabled::Tabled;

use roster_core::config::AppConfig;
use roster_core::error::AppError;
use roster_entity::employee::{Employee, EmployeeFields, EmployeeSummary, HistoryEntry};
use roster_service::EmployeeService;

use crate::output::{self, OutputFormat};

/// Arguments for employee commands
#[derive(Debug, Args)]
pub struct EmployeeArgs {
    /// Employee subcommand
    #[command(subcommand)]
    pub command: EmployeeCommand,
}

/// Employee subcommands
#[derive(Debug, Subcommand)]
pub enum EmployeeCommand {
    /// List employees, most recently joined first
    List,
    /// Show one employee together with its history
    Show {
        /// Employee ID
        id: String,
    },
}

/// Employee display row for table output
#[derive(Debug, Tabled)]
struct EmployeeRow {
    id: String,
    name: String,
    email: String,
    experience: f64,
    joined: String,
    revisions: usize,
}

impl From<&EmployeeSummary> for EmployeeRow {
    fn from(e: &EmployeeSummary) -> Self {
        Self {
            id: e.id.to_string(),
            name: e.fields.name.clone(),
            email: e.fields.email.clone(),
            experience: e.fields.experience,
            joined: e.fields.joining_date.to_string(),
            revisions: e.history_count,
        }
    }
}

/// History display row: one archived revision
#[derive(Debug, Tabled)]
struct HistoryRow {
    #[tabled(rename = "#")]
    index: usize,
    changed_at: String,
    changed_by: String,
    name: String,
    email: String,
    address: String,
    experience: f64,
    last_work_company: String,
}

impl HistoryRow {
    fn new(index: usize, entry: &HistoryEntry) -> Self {
        Self {
            index,
            changed_at: entry.changed_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            changed_by: entry
                .changed_by
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
            name: entry.data.name.clone(),
            email: entry.data.email.clone(),
            address: entry.data.address.clone(),
            experience: entry.data.experience,
            last_work_company: entry.data.last_work_company.clone(),
        }
    }
}

/// Execute employee commands
pub async fn execute(
    args: &EmployeeArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let stores = super::open_stores(config).await?;
    let service = EmployeeService::new(stores.employees.clone());

    let result = match &args.command {
        EmployeeCommand::List => service.list().await.map(|employees| {
            let rows: Vec<EmployeeRow> = employees.iter().map(EmployeeRow::from).collect();
            output::print_list(&rows, &employees, format);
        }),
        EmployeeCommand::Show { id } => match EmployeeService::resolve_id(id) {
            Ok(id) => service.get(id).await.map(|employee| match format {
                OutputFormat::Json => output::print_json(&employee),
                OutputFormat::Table => print_employee(&employee),
            }),
            Err(e) => Err(e),
        },
    };

    stores.close().await;
    result
}

fn print_fields(fields: &EmployeeFields) {
    output::print_kv("Name", &fields.name);
    output::print_kv("Email", &fields.email);
    output::print_kv("Address", &fields.address);
    output::print_kv("Experience", &fields.experience.to_string());
    output::print_kv("Last work company", &fields.last_work_company);
    output::print_kv("Date of resignation", &fields.date_of_resignation.to_string());
    output::print_kv("Joining date", &fields.joining_date.to_string());
}

fn print_employee(employee: &Employee) {
    output::print_kv("ID", &employee.id.to_string());
    print_fields(&employee.fields);
    output::print_kv("Created", &employee.created_at.to_rfc3339());
    output::print_kv("Updated", &employee.updated_at.to_rfc3339());

    output::print_heading(&format!("History ({} revisions)", employee.history.len()));
    let rows: Vec<HistoryRow> = employee
        .history
        .iter()
        .enumerate()
        .map(|(i, entry)| HistoryRow::new(i + 1, entry))
        .collect();
    output::print_list(&rows, &employee.history, OutputFormat::Table);
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use roster_core::types::EmployeeId;

    use super::*;

    fn fields(name: &str) -> EmployeeFields {
        EmployeeFields {
            name: name.to_string(),
            email: "a@x.com".to_string(),
            address: "1 Main Street".to_string(),
            experience: 2.5,
            last_work_company: "Acme".to_string(),
            date_of_resignation: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
            joining_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    #[test]
    fn test_employee_row_shows_revision_count() {
        let summary = EmployeeSummary {
            id: EmployeeId::new(),
            fields: fields("Alice"),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            history_count: 2,
        };
        let row = EmployeeRow::from(&summary);
        assert_eq!(row.revisions, 2);
        assert_eq!(row.joined, "2024-01-15");
    }

    #[test]
    fn test_history_row_marks_missing_actor() {
        let entry = HistoryEntry {
            changed_at: Utc::now(),
            changed_by: None,
            data: fields("Alice"),
        };
        let row = HistoryRow::new(1, &entry);
        assert_eq!(row.changed_by, "-");
        assert_eq!(row.name, "Alice");
    }
}
