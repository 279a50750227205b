use super::*;
use crate::onboarding::{CreditGoal, CreditSituation, IncomeSource, MonthlyIncome, OnboardingData};
use std::collections::BTreeMap;

fn onboarding(income_source: IncomeSource) -> OnboardingData {
    OnboardingData {
        age: 31,
        income_source,
        monthly_income: MonthlyIncome::MedioBajo,
        dependents: 0,
        credit_situation: CreditSituation::AlDia,
        credit_goal: CreditGoal::ObtenerCredito,
    }
}

fn ids(items: &[ChecklistItem]) -> Vec<&str> {
    items.iter().map(|i| i.id.as_str()).collect()
}

#[test]
fn test_no_onboarding_means_no_checklist() {
    assert!(build_checklist(None, CreditType::Consumo).is_empty());
}

#[test]
fn test_business_checklist_for_self_employed() {
    let data = onboarding(IncomeSource::Autonomo);
    let items = build_checklist(Some(&data), CreditType::Negocio);
    assert_eq!(items.len(), 11);
    assert_eq!(&ids(&items)[..4], ["base_dni", "base_recibo_servicios", "base_sin_morosidad", "base_cronograma_deudas"]);
    assert!(ids(&items).contains(&"negocio_ruc"));
    assert!(!ids(&items).contains(&"negocio_boletas"));
}

#[test]
fn test_business_checklist_for_employee() {
    let data = onboarding(IncomeSource::Empleado);
    let items = build_checklist(Some(&data), CreditType::Negocio);
    assert_eq!(ids(&items).last(), Some(&"negocio_boletas"));
    assert_eq!(items.len(), 5);
}

#[test]
fn test_consumer_checklist_income_proof() {
    let employee = build_checklist(Some(&onboarding(IncomeSource::Empleado)), CreditType::Consumo);
    assert!(ids(&employee).contains(&"consumo_boletas"));

    let student = build_checklist(Some(&onboarding(IncomeSource::Estudiante)), CreditType::Consumo);
    assert!(ids(&student).contains(&"consumo_sustento_independiente"));
    assert_eq!(ids(&student).last(), Some(&"consumo_proforma"));
}

#[test]
fn test_mortgage_checklist_includes_spouse_documents() {
    let items = build_checklist(Some(&onboarding(IncomeSource::Otro)), CreditType::Hipotecario);
    assert_eq!(items.len(), 13);
    assert!(ids(&items).contains(&"casado_partida_matrimonio"));
    assert!(items.iter().skip(4).all(|item| item.required));
}

#[test]
fn test_checklist_completion_requires_accepted_uploads() {
    let items = build_checklist(Some(&onboarding(IncomeSource::Empleado)), CreditType::Consumo);
    let mut uploaded = BTreeMap::new();
    assert!(!is_checklist_complete(&items, &uploaded));

    for item in items.iter().filter(|i| i.required) {
        uploaded.insert(item.id.clone(), UploadedFileState::analyzed(&item.id, true, "OK"));
    }
    assert!(is_checklist_complete(&items, &uploaded));

    uploaded.insert(
        "base_dni".to_string(),
        UploadedFileState::analyzed("dni.jpg", false, "Foto borrosa, intenta de nuevo"),
    );
    assert!(!is_checklist_complete(&items, &uploaded));

    uploaded.insert("base_dni".to_string(), UploadedFileState::analyzing("dni.jpg"));
    assert!(!is_checklist_complete(&items, &uploaded));
}

#[test]
fn test_empty_checklist_is_never_complete() {
    assert!(!is_checklist_complete(&[], &BTreeMap::new()));
}

#[test]
fn test_upload_state_serialization() {
    let json = serde_json::to_value(UploadedFileState::analyzing("dni.jpg")).unwrap();
    assert_eq!(json["status"], "analyzing");
    assert!(json["analysisResult"].is_null());

    let json = serde_json::to_value(UploadedFileState::analyzed("dni.jpg", true, "OK")).unwrap();
    assert_eq!(json["status"], "analyzed_ok");
}
