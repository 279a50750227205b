use serde::{Deserialize, Serialize};

/// The five primary tabs of the bottom navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NavTab {
    Home,
    Goals,
    Finanzas,
    Lessons,
    Profile,
}

/// Every page of the main app, primary tabs and sub-pages alike.
///
/// Held by the UI shell, not by the session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum AppPage {
    #[default]
    Home,
    Goals,
    Finanzas,
    Lessons,
    Profile,
    History,
    Wallet,
    Subscription,
    Marketplace,
    Faq,
    CalculatorHistory,
    Settings,
    Checklist,
    GoalsPage,
    WalletPage,
}

impl AppPage {
    /// The tab this page is, if it is one of the primary tabs.
    pub fn as_tab(&self) -> Option<NavTab> {
        match self {
            AppPage::Home => Some(NavTab::Home),
            AppPage::Goals => Some(NavTab::Goals),
            AppPage::Finanzas => Some(NavTab::Finanzas),
            AppPage::Lessons => Some(NavTab::Lessons),
            AppPage::Profile => Some(NavTab::Profile),
            _ => None,
        }
    }
}

impl From<NavTab> for AppPage {
    fn from(tab: NavTab) -> Self {
        match tab {
            NavTab::Home => AppPage::Home,
            NavTab::Goals => AppPage::Goals,
            NavTab::Finanzas => AppPage::Finanzas,
            NavTab::Lessons => AppPage::Lessons,
            NavTab::Profile => AppPage::Profile,
        }
    }
}

/// Tab highlighted while `page` is shown.
///
/// Sub-pages highlight the tab they are reached from; anything unmapped
/// falls back to home.
pub fn active_nav_tab(page: AppPage) -> NavTab {
    match page {
        AppPage::WalletPage
        | AppPage::Marketplace
        | AppPage::CalculatorHistory
        | AppPage::Checklist => NavTab::Finanzas,
        AppPage::History | AppPage::Subscription | AppPage::Faq | AppPage::Settings => {
            NavTab::Profile
        }
        other => other.as_tab().unwrap_or(NavTab::Home),
    }
}

/// The bottom navigation hides while a lesson is open.
pub fn is_nav_visible(viewing_lesson: bool) -> bool {
    !viewing_lesson
}

/// The header only shows on the primary tabs, and never over a lesson.
pub fn is_header_visible(page: AppPage, viewing_lesson: bool) -> bool {
    is_nav_visible(viewing_lesson) && page.as_tab().is_some()
}
