pub mod id_utils;
pub mod time_utils;

pub use id_utils::new_id;
pub use time_utils::{activity_date_from_utc, Clock, FixedClock, SystemClock};
