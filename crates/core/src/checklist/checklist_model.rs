//! Credit application checklist models.

use serde::{Deserialize, Serialize};

/// Kind of credit application a checklist is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditType {
    Negocio,
    Consumo,
    Hipotecario,
}

/// A document slot of a checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: String,
    pub label: String,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileAnalysisStatus {
    Analyzing,
    AnalyzedOk,
    AnalyzedFail,
}

/// Upload state of one checklist item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFileState {
    pub name: String,
    pub status: FileAnalysisStatus,
    pub analysis_result: Option<String>,
}

impl UploadedFileState {
    pub fn analyzing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: FileAnalysisStatus::Analyzing,
            analysis_result: None,
        }
    }

    pub fn analyzed(name: impl Into<String>, accepted: bool, result: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: if accepted {
                FileAnalysisStatus::AnalyzedOk
            } else {
                FileAnalysisStatus::AnalyzedFail
            },
            analysis_result: Some(result.into()),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.status == FileAnalysisStatus::AnalyzedOk
    }
}
