use serde::{Deserialize, Serialize};

use super::navigation::AppPage;
use crate::store::AppState;

/// Top-level screen of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", content = "page", rename_all = "camelCase")]
pub enum Screen {
    AuthFlow,
    Loading,
    Onboarding,
    Tutorial,
    GuidedSetup,
    MainApp(AppPage),
}

/// Derives the screen from the session flags, first unmet step wins.
///
/// `active_page` only matters once every onboarding step is done.
pub fn resolve_screen(state: &AppState, active_page: AppPage) -> Screen {
    if !state.is_authenticated {
        return Screen::AuthFlow;
    }
    let Some(user) = state.user.as_ref() else {
        return Screen::Loading;
    };
    if !user.has_completed_onboarding {
        Screen::Onboarding
    } else if !user.has_completed_tutorial {
        Screen::Tutorial
    } else if !user.has_completed_guided_setup {
        Screen::GuidedSetup
    } else {
        Screen::MainApp(active_page)
    }
}
