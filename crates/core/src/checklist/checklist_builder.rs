//! Checklist construction from onboarding answers.

use std::collections::BTreeMap;

use super::checklist_model::{ChecklistItem, CreditType, UploadedFileState};
use crate::onboarding::{IncomeSource, OnboardingData};

fn required(id: &str, label: &str) -> ChecklistItem {
    ChecklistItem {
        id: id.to_string(),
        label: label.to_string(),
        required: true,
        tip: None,
    }
}

fn required_with_tip(id: &str, label: &str, tip: &str) -> ChecklistItem {
    ChecklistItem {
        tip: Some(tip.to_string()),
        ..required(id, label)
    }
}

fn optional(id: &str, label: &str, tip: &str) -> ChecklistItem {
    ChecklistItem {
        id: id.to_string(),
        label: label.to_string(),
        required: false,
        tip: Some(tip.to_string()),
    }
}

fn base_items() -> Vec<ChecklistItem> {
    vec![
        required("base_dni", "DNI legible y vigente"),
        required_with_tip(
            "base_recibo_servicios",
            "Recibo de luz/agua con dirección",
            "Últimos 2–3 meses. Si no está a tu nombre, adjunta constancia de domicilio.",
        ),
        required_with_tip(
            "base_sin_morosidad",
            "No tener morosidad grave en centrales de riesgo",
            "Si la tienes, pide plan de regularización con la entidad.",
        ),
        optional(
            "base_cronograma_deudas",
            "Cronograma de pagos de deudas actuales",
            "Demuestra tu organización y capacidad de pago actual.",
        ),
    ]
}

fn business_items(income_source: IncomeSource) -> Vec<ChecklistItem> {
    if income_source != IncomeSource::Autonomo {
        return vec![required("negocio_boletas", "Boletas de pago (3 últimos meses)")];
    }
    vec![
        required("negocio_ruc", "RUC activo (independiente)"),
        required_with_tip(
            "negocio_licencia",
            "Licencia de funcionamiento municipal",
            "Si tu negocio lo requiere, es fundamental.",
        ),
        required(
            "negocio_ventas",
            "Ventas 6–12 meses (boletas/facturas/cuaderno)",
        ),
        optional(
            "negocio_estado_cuenta",
            "Estados de cuenta o movimientos bancarios",
            "Muy útil para demostrar flujo de dinero.",
        ),
        optional(
            "negocio_fotos",
            "Fotos del negocio, mercadería y ubicación",
            "Ayuda al analista a entender tu negocio.",
        ),
        optional(
            "negocio_lista_proveedores",
            "Lista de principales proveedores y clientes",
            "Demuestra la estabilidad y red de tu negocio.",
        ),
        optional(
            "negocio_propiedad_activos",
            "Documentos de propiedad de activos (moto, herramientas, etc.)",
            "Suma puntos si tienes activos a tu nombre.",
        ),
    ]
}

fn consumer_items(income_source: IncomeSource) -> Vec<ChecklistItem> {
    let income_proof = if income_source == IncomeSource::Empleado {
        required("consumo_boletas", "Boletas de pago (3 últimos meses)")
    } else {
        required(
            "consumo_sustento_independiente",
            "Sustento de ingresos como independiente (RUC, Recibos por Honorarios)",
        )
    };
    vec![
        income_proof,
        required_with_tip(
            "consumo_proforma",
            "Proforma o cotización del bien a comprar",
            "Esencial para justificar el monto del crédito.",
        ),
    ]
}

fn mortgage_items() -> Vec<ChecklistItem> {
    vec![
        required("casado_dni_conyuge", "Copia DNI del cónyuge"),
        required("casado_partida_matrimonio", "Partida de matrimonio"),
        required("hipo_boletas_largo", "Boletas de pago (6-12 últimos meses)"),
        required("hipo_constancia_trabajo", "Constancia de trabajo vigente"),
        required_with_tip(
            "hipo_declaracion_impuestos",
            "Declaración jurada de impuestos (2 últimos años)",
            "Para independientes o rentas adicionales.",
        ),
        required_with_tip(
            "hipo_estado_cuenta_ahorro",
            "Estados de cuenta bancarios con ahorros",
            "Demuestra tu cuota inicial y capacidad de ahorro.",
        ),
        required_with_tip(
            "hipo_titulo_propiedad",
            "Copia literal del Título de Propiedad del inmueble",
            "Proporcionado por el vendedor.",
        ),
        required_with_tip(
            "hipo_hr_pu",
            "Autovalúo (HR y PU) del año en curso",
            "Documentos municipales del inmueble.",
        ),
        required_with_tip(
            "hipo_tasacion",
            "Informe de tasación del inmueble",
            "Realizado por un perito autorizado por el banco.",
        ),
    ]
}

/// Ordered document list for a credit application.
///
/// Empty until the user has answered the onboarding questionnaire.
pub fn build_checklist(
    onboarding: Option<&OnboardingData>,
    credit_type: CreditType,
) -> Vec<ChecklistItem> {
    let Some(data) = onboarding else {
        return Vec::new();
    };

    let mut items = base_items();
    match credit_type {
        CreditType::Negocio => items.extend(business_items(data.income_source)),
        CreditType::Consumo => items.extend(consumer_items(data.income_source)),
        CreditType::Hipotecario => items.extend(mortgage_items()),
    }
    items
}

/// True once every required item has an accepted upload.
///
/// A checklist without required items is never complete.
pub fn is_checklist_complete(
    items: &[ChecklistItem],
    uploaded: &BTreeMap<String, UploadedFileState>,
) -> bool {
    let mut required_items = items.iter().filter(|item| item.required).peekable();
    if required_items.peek().is_none() {
        return false;
    }
    required_items.all(|item| {
        uploaded
            .get(&item.id)
            .is_some_and(UploadedFileState::is_accepted)
    })
}
