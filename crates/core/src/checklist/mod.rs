//! Checklist module - document requirements per credit type and upload state.

mod checklist_builder;
mod checklist_model;

#[cfg(test)]
mod checklist_tests;

pub use checklist_builder::{build_checklist, is_checklist_complete};
pub use checklist_model::{ChecklistItem, CreditType, FileAnalysisStatus, UploadedFileState};
