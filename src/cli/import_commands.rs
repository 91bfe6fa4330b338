// src/cli/import_commands.rs
use crate::application::error::ApplicationError;
use crate::cli::display;
use crate::cli::error::{CliError, CliResult};
use crate::config::Settings;
use crate::domain::import::{ImportMode, VendorField};
use crate::domain::vendor::TenantId;
use crate::infrastructure::di::ServiceContainer;
use crossterm::style::Stylize;
use itertools::Itertools;
use std::path::Path;
use tracing::instrument;

/// Resolves the tenant: explicit flag first, then the configured default.
/// A missing tenant is a precondition failure; no import proceeds without it.
fn resolve_tenant(flag: Option<&str>, settings: &Settings) -> CliResult<TenantId> {
    let raw = flag
        .map(str::to_string)
        .or_else(|| settings.default_tenant.clone())
        .ok_or(CliError::Application(ApplicationError::MissingTenant))?;
    Ok(TenantId::new(raw)?)
}

#[instrument(skip(services, settings), level = "debug")]
pub fn import(
    services: &ServiceContainer,
    settings: &Settings,
    file: &Path,
    mode: ImportMode,
    tenant_flag: Option<&str>,
    dry_run: bool,
) -> CliResult<()> {
    let tenant = resolve_tenant(tenant_flag, settings)?;

    eprintln!(
        "{} Importing '{}' in {} mode for tenant '{}'{}",
        "→".blue(),
        file.display(),
        mode,
        tenant,
        if dry_run { " (dry run)" } else { "" }
    );

    if dry_run {
        let plan = services.import_service.plan_import(file, mode, &tenant);
        return finish_with_validation_report(plan.map(|p| display::print_plan(&p)));
    }

    let stats = services.import_service.run_import(file, mode, &tenant);
    finish_with_validation_report(stats.map(|s| display::print_stats(&s)))
}

/// Validation failures get their per-row report before the error bubbles up.
fn finish_with_validation_report(result: Result<(), ApplicationError>) -> CliResult<()> {
    match result {
        Ok(()) => Ok(()),
        Err(ApplicationError::Validation(report)) => {
            display::print_validation_errors(&report);
            Err(CliError::Application(ApplicationError::Validation(report)))
        }
        Err(err) => Err(err.into()),
    }
}

#[instrument(skip(services), level = "debug")]
pub fn validate(services: &ServiceContainer, file: &Path) -> CliResult<()> {
    let preview = services.import_service.preview_file(file)?;
    let (mapping, result) = services.import_service.validate_file(file)?;

    display::print_mapping(&mapping, &preview.headers);
    if result.is_valid() {
        println!("{} {} row(s) valid", "✓".green(), preview.total_rows);
        Ok(())
    } else {
        display::print_validation_errors(&result);
        Err(CliError::CommandFailed(format!(
            "'{}' failed validation with {} error(s)",
            file.display(),
            result.errors.len()
        )))
    }
}

#[instrument(skip(services), level = "debug")]
pub fn preview(services: &ServiceContainer, file: &Path, limit: usize) -> CliResult<()> {
    let preview = services.import_service.preview_file(file)?;
    display::print_preview(&preview, limit);
    Ok(())
}

#[instrument(skip(services, settings), level = "debug")]
pub fn list(
    services: &ServiceContainer,
    settings: &Settings,
    tenant_flag: Option<&str>,
) -> CliResult<()> {
    let tenant = resolve_tenant(tenant_flag, settings)?;
    let vendors = services.import_service.list_vendors(&tenant)?;
    display::print_vendors(&vendors);
    Ok(())
}

/// Emits a CSV header template to stdout so it can be redirected to a file.
pub fn template() -> CliResult<()> {
    let headers = VendorField::ALL
        .iter()
        .map(|f| f.as_str())
        .join(",");
    println!("{}", headers);
    println!(
        "Alice Catering,catering,alice@example.com,+1-555-123-4567,https://alice.example.com,\
         123 Main St,Springfield,IL,62701,2500.00,yes,2026-06-14,tasting booked"
    );

    eprintln!();
    eprintln!(
        "{} Template generated. Redirect to a file: vowsync template > vendors.csv",
        "→".blue()
    );
    Ok(())
}
