use crate::advisor_core::Advisor;

/// Props handed to the root component for every LiveView session.
#[derive(Clone)]
pub struct AppProps {
    pub advisor: Advisor,
    /// Address shown by the share action.
    pub page_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Chat,
    Settings,
}

pub struct NavItem {
    pub label: &'static str,
    /// `None` for entries that are shown but go nowhere yet.
    pub target: Option<Page>,
}

pub static PRIMARY_NAV: [NavItem; 6] = [
    NavItem { label: "Home", target: Some(Page::Landing) },
    NavItem { label: "Conversations", target: Some(Page::Chat) },
    NavItem { label: "Models", target: None },
    NavItem { label: "Integrations", target: None },
    NavItem { label: "Users", target: None },
    NavItem { label: "Settings", target: Some(Page::Settings) },
];

pub static SECONDARY_NAV: [NavItem; 2] = [
    NavItem { label: "Documentation", target: None },
    NavItem { label: "Analytics", target: None },
];

impl NavItem {
    pub fn class(&self, current: Page) -> &'static str {
        match self.target {
            Some(target) if target == current => "nav-item active",
            Some(_) => "nav-item",
            None => "nav-item inert",
        }
    }
}

/// Starter card on the empty chat screen.
pub struct Suggestion {
    pub title: &'static str,
    pub blurb: &'static str,
    pub sample: Option<&'static str>,
}

pub static SUGGESTIONS: [Suggestion; 4] = [
    Suggestion {
        title: "Compare top LLMs",
        blurb: "Get a detailed comparison of leading models like GPT-4, Claude 3, and more",
        sample: Some("1"),
    },
    Suggestion {
        title: "Budget-friendly options",
        blurb: "Discover cost-effective LLMs for startups and small projects",
        sample: Some("2"),
    },
    Suggestion {
        title: "Specialized use cases",
        blurb: "Find models optimized for specific tasks like coding, content generation, or RAG",
        sample: None,
    },
    Suggestion {
        title: "Enterprise solutions",
        blurb: "Get recommendations for secure, scalable LLMs for enterprise use",
        sample: None,
    },
];

/// Entry in the recent conversations list with no transcript behind it.
pub struct UnlinkedRecent {
    pub title: &'static str,
    pub timestamp: &'static str,
}

pub static UNLINKED_RECENT: [UnlinkedRecent; 1] = [UnlinkedRecent {
    title: "RAG Implementation Models",
    timestamp: "Aug 10, 2024",
}];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsTab {
    General,
    Models,
    Appearance,
    Notifications,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 4] = [
        SettingsTab::General,
        SettingsTab::Models,
        SettingsTab::Appearance,
        SettingsTab::Notifications,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsTab::General => "General",
            SettingsTab::Models => "Models",
            SettingsTab::Appearance => "Appearance",
            SettingsTab::Notifications => "Notifications",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    Idle,
    Saved,
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor_core::{find_sample, SAMPLE_HISTORIES};

    #[test]
    fn test_nav_class() {
        assert_eq!(PRIMARY_NAV[0].class(Page::Landing), "nav-item active");
        assert_eq!(PRIMARY_NAV[1].class(Page::Landing), "nav-item");
        assert_eq!(PRIMARY_NAV[2].class(Page::Chat), "nav-item inert");
    }

    #[test]
    fn test_suggestions_point_at_samples() {
        for suggestion in SUGGESTIONS.iter() {
            if let Some(id) = suggestion.sample {
                assert!(find_sample(id).is_some(), "{}", suggestion.title);
            }
        }
        assert_eq!(SUGGESTIONS.iter().filter(|s| s.sample.is_some()).count(), 2);
    }

    #[test]
    fn test_unlinked_recent_has_no_sample() {
        for entry in UNLINKED_RECENT.iter() {
            assert!(SAMPLE_HISTORIES.iter().all(|s| s.title != entry.title));
        }
        assert_eq!(UNLINKED_RECENT[0].timestamp, "Aug 10, 2024");
    }
}
