// src/cli/display.rs
//! Terminal output helpers. Human-readable output goes to stderr where it
//! annotates, stdout carries only data meant to be piped (templates, config).

use crate::domain::import::{
    ColumnMapping, ImportPreview, ImportStats, ImportValidationResult, ReconciliationPlan,
};
use crate::domain::vendor::ExistingVendor;
use crossterm::style::Stylize;
use itertools::Itertools;

/// How many validation errors are printed before the "+K more" summary.
pub const MAX_DISPLAYED_ERRORS: usize = 10;

pub fn print_stats(stats: &ImportStats) {
    println!("{}", "Import summary".bold());
    println!("  added:   {}", stats.added.to_string().green());
    println!("  updated: {}", stats.updated.to_string().yellow());
    println!("  deleted: {}", stats.deleted.to_string().red());
    println!("  skipped: {}", stats.skipped.to_string().dim());
}

pub fn print_plan(plan: &ReconciliationPlan) {
    println!("{}", "Reconciliation plan (dry run)".bold());
    println!("  to add:    {}", plan.to_add.len().to_string().green());
    println!("  to keep:   {}", plan.to_update.len().to_string().yellow());
    println!("  to delete: {}", plan.to_delete.len().to_string().red());
    println!("  skipped:   {}", plan.skipped.to_string().dim());
    for candidate in &plan.to_add {
        println!("  {} {}", "+".green(), candidate.name);
    }
    for id in &plan.to_delete {
        println!("  {} vendor {}", "-".red(), id);
    }
    for duplicate in &plan.duplicate_keys {
        eprintln!(
            "{} duplicate {} key '{}' among existing vendors",
            "Warning:".yellow(),
            duplicate.kind,
            duplicate.key
        );
    }
}

pub fn print_mapping(mapping: &ColumnMapping, headers: &[String]) {
    println!("{}", "Column mapping".bold());
    if mapping.is_empty() {
        println!("  (no columns mapped)");
        return;
    }
    for (field, column) in mapping.entries() {
        let header = headers.get(column).map(String::as_str).unwrap_or("?");
        println!("  {:<15} <- column {} ('{}')", field.to_string(), column + 1, header);
    }
}

/// Prints all errors up to the cap, then a "+K more" line.
pub fn print_validation_errors(result: &ImportValidationResult) {
    for error in result.errors.iter().take(MAX_DISPLAYED_ERRORS) {
        eprintln!("{} {}", "✗".red(), error);
    }
    if result.errors.len() > MAX_DISPLAYED_ERRORS {
        eprintln!(
            "{}",
            format!("  +{} more", result.errors.len() - MAX_DISPLAYED_ERRORS).dim()
        );
    }
}

pub fn print_preview(preview: &ImportPreview, limit: usize) {
    println!(
        "{} ({} data row(s))",
        preview.file_name.clone().bold(),
        preview.total_rows
    );
    println!("  {}", preview.headers.iter().join(" | "));
    for row in preview.rows.iter().take(limit) {
        println!("  {}", row.iter().join(" | "));
    }
    if preview.rows.len() > limit {
        println!("{}", format!("  +{} more row(s)", preview.rows.len() - limit).dim());
    }
}

pub fn print_vendors(vendors: &[ExistingVendor]) {
    if vendors.is_empty() {
        println!("No vendors in the store for this tenant.");
        return;
    }
    for vendor in vendors {
        let booked = match vendor.booked {
            Some(true) => " [booked]".green().to_string(),
            _ => String::new(),
        };
        let category = vendor
            .category
            .as_deref()
            .map(|c| format!(" ({})", c))
            .unwrap_or_default();
        println!("  {:>4}  {}{}{}", vendor.id, vendor.name, category, booked);
    }
    println!("{}", format!("{} vendor(s)", vendors.len()).dim());
}
