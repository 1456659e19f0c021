//! Report output
//!
//! Writes a generated report as text (stdout or `report.txt`) or as JSON
//! (`report.json` plus one file per chart specification).

pub mod json;
pub mod txt;
