// src/report/mod.rs
// =============================================================================
// This module turns scanned documents into the audit report.
//
// Submodules:
// - audit: Runs the scan and tallies links (AuditResults)
// - render: Prints AuditResults as the text report
// =============================================================================

mod audit;
mod render;

pub use audit::run_audit;
pub use render::{render_report, ReportOptions};
