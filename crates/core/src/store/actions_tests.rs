use super::*;
use crate::checklist::CreditType;
use crate::wallet::WalletFlow;
use rust_decimal_macros::dec;

#[test]
fn test_decodes_unit_action() {
    assert_eq!(Action::from_json(r#"{"type":"LOGIN"}"#).unwrap(), Action::Login);
    assert_eq!(
        Action::from_json(r#"{"type":"MARK_NOTIFICATIONS_AS_READ"}"#).unwrap(),
        Action::MarkNotificationsAsRead
    );
}

#[test]
fn test_decodes_payload_fields_in_camel_case() {
    let action = Action::from_json(
        r#"{"type":"ALLOCATE_FUNDS_TO_GOAL","goalId":"goal_1","amount":250.5}"#,
    )
    .unwrap();
    assert_eq!(
        action,
        Action::AllocateFundsToGoal {
            goal_id: "goal_1".to_string(),
            amount: dec!(250.5),
        }
    );

    let action = Action::from_json(
        r#"{"type":"ADD_TRANSACTION","amount":100,"flow":"Gasto de Wallet"}"#,
    )
    .unwrap();
    assert_eq!(
        action,
        Action::AddTransaction {
            amount: dec!(100),
            flow: WalletFlow::Gasto,
            description: None,
        }
    );
}

#[test]
fn test_decodes_newtype_payloads() {
    let action =
        Action::from_json(r#"{"type":"UPDATE_CREDIT_PROFILE","creditUtilization":15}"#).unwrap();
    match action {
        Action::UpdateCreditProfile(patch) => {
            assert_eq!(patch.credit_utilization, Some(15));
            assert!(patch.debt.is_none());
        }
        other => panic!("unexpected action {:?}", other),
    }
}

#[test]
fn test_decodes_checklist_type() {
    let action =
        Action::from_json(r#"{"type":"SET_CHECKLIST_COMPLETED","checklistType":"hipotecario"}"#)
            .unwrap();
    assert_eq!(
        action,
        Action::SetChecklistCompleted {
            checklist_type: CreditType::Hipotecario
        }
    );
}

#[test]
fn test_unknown_tag_decodes_to_unknown() {
    let action = Action::from_json(r#"{"type":"SELL_PORTFOLIO"}"#).unwrap();
    assert_eq!(action, Action::Unknown);
    assert_eq!(action.kind(), "UNKNOWN");
}

#[test]
fn test_malformed_payload_is_a_decode_error() {
    let err = Action::from_json(r#"{"type":"SUBMIT_QUIZ","lessonId":"1"}"#).unwrap_err();
    assert!(matches!(err, crate::errors::Error::ActionDecode(_)));
    assert!(Action::from_json("[]").is_err());
}

#[test]
fn test_register_password_is_never_serialized() {
    let action = Action::from_json(
        r#"{"type":"REGISTER","name":"Ana","email":"ana@example.com","password":"secret",
            "currency":{"code":"PEN","symbol":"S/","name":"Sol Peruano (PEN)","locale":"es-PE"}}"#,
    )
    .unwrap();
    assert_eq!(action.kind(), "REGISTER");
    let json = serde_json::to_string(&action).unwrap();
    assert!(json.contains("\"type\":\"REGISTER\""));
    assert!(!json.contains("secret"));
}
