/// Lowest simulated credit score
pub const MIN_CREDIT_SCORE: i32 = 300;

/// Highest simulated credit score
pub const MAX_CREDIT_SCORE: i32 = 850;

/// Minimum quiz percentage needed to complete a lesson
pub const QUIZ_PASSING_PERCENTAGE: u32 = 70;

/// Points awarded for a scenario decision with a positive impact
pub const POINTS_PER_GOOD_DECISION: u32 = 2;

/// Points awarded the first time a lesson quiz is passed
pub const POINTS_PER_LESSON: u32 = 10;

/// Points awarded when an action plan item is completed
pub const POINTS_PER_ACTION_ITEM: u32 = 5;

/// Minimum age accepted by onboarding
pub const MIN_APPLICANT_AGE: u32 = 18;

/// Currency code used when none is configured (Peruvian sol)
pub const DEFAULT_CURRENCY_CODE: &str = "PEN";

/// Seconds to wait for the plan generator or document analyzer
pub const DEFAULT_COLLABORATOR_TIMEOUT_SECS: u64 = 15;

/// Name of the demo account created by `LOGIN`
pub const DEMO_USER_NAME: &str = "Carlos Carrazco";

/// Email of the demo account created by `LOGIN`
pub const DEMO_USER_EMAIL: &str = "admin@avanzaplus.com";

/// Avatar seed of the demo account
pub const DEMO_USER_AVATAR_SEED: &str = "carlos.carrazco";

/// Avatar service used for generated profile pictures
pub const AVATAR_BASE_URL: &str = "https://i.pravatar.cc/150?u=";

/// Number of items a generated action plan is expected to contain
pub const ACTION_PLAN_LENGTH: usize = 3;
