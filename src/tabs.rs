//! Page Tabs

/// Top-level page tabs. `id()` matches the tab content element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Profile,
    Recommendations,
    Visualization,
}

/// Work to start when a tab becomes active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabEntry {
    /// Nothing beyond showing the content
    Show,
    /// Fetch fresh chart data; results are never cached between visits
    FetchVisualizations,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Profile, Tab::Recommendations, Tab::Visualization];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Profile => "user-info",
            Tab::Recommendations => "recommendations",
            Tab::Visualization => "visualization",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Profile => "Your Information",
            Tab::Recommendations => "Recommendations",
            Tab::Visualization => "Visualization",
        }
    }

    pub fn on_enter(&self) -> TabEntry {
        match self {
            Tab::Visualization => TabEntry::FetchVisualizations,
            _ => TabEntry::Show,
        }
    }
}
