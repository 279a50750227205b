use serde::{Deserialize, Serialize};

use crate::checklist::CreditType;
use crate::constants::ACTION_PLAN_LENGTH;

/// Plan used when the generator cannot produce the first one.
pub const INITIAL_PLAN_FALLBACK: [&str; ACTION_PLAN_LENGTH] = [
    "Completar la primera lección",
    "Probar 5 escenarios",
    "Crear una meta de ahorro",
];

/// Plan used when the generator cannot produce a follow-up.
pub const NEXT_PLAN_FALLBACK: [&str; ACTION_PLAN_LENGTH] = [
    "Revisar reporte de crédito",
    "Reducir utilización de crédito",
    "Completar lección avanzada",
];

pub const DOCUMENT_ANALYSIS_FALLBACK: &str =
    "No se pudo analizar. Por favor, verifica que la imagen sea clara.";

pub const DOCUMENT_ANALYSIS_UNAVAILABLE: &str = "Análisis no disponible.";

/// Stored when the upload itself is unusable.
pub const DOCUMENT_ANALYSIS_ERROR: &str = "Error al analizar.";

/// A document photo submitted for one checklist item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentUpload {
    pub item_id: String,
    pub file_name: String,
    /// Checklist the item belongs to
    pub credit_type: CreditType,
    #[serde(skip)]
    pub image: Vec<u8>,
}

/// Whether an analyzer verdict accepts the document.
pub fn is_verdict_ok(verdict: &str) -> bool {
    verdict.to_uppercase().contains("OK")
}

/// Keeps a generated plan only if it has the expected shape.
pub(super) fn usable_plan(steps: Vec<String>) -> Option<Vec<String>> {
    let steps: Vec<String> = steps
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    (steps.len() == ACTION_PLAN_LENGTH).then_some(steps)
}
