use uuid::Uuid;

pub const GOAL_ID_PREFIX: &str = "goal";
pub const TRANSACTION_ID_PREFIX: &str = "tx";
pub const HISTORY_ID_PREFIX: &str = "hist";
pub const NOTIFICATION_ID_PREFIX: &str = "notif";
pub const CALCULATION_ID_PREFIX: &str = "calc";

/// Generates a unique id of the form `{prefix}_{uuid v4}`.
///
/// The prefix names the kind of entity so ids stay readable in logs.
pub fn new_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_prefixed_and_unique() {
        let a = new_id(GOAL_ID_PREFIX);
        let b = new_id(GOAL_ID_PREFIX);
        assert!(a.starts_with("goal_"));
        assert_eq!(a.len(), "goal_".len() + 36);
        assert_ne!(a, b);
    }
}
