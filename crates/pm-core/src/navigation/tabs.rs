use serde::{Deserialize, Serialize};

/// Bottom navigation tab on the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    Search,
    Profile,
    Settings,
}

/// Tab selection inside the main screen.
///
/// Pure selection: any tab can be selected at any time. Independent of the
/// screen history; the shell resets it to `Home` whenever `Main` is entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabController {
    active: Tab,
}

impl TabController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Selects `tab`, returning `true` when the active tab changed.
    pub fn select(&mut self, tab: Tab) -> bool {
        let changed = self.active != tab;
        self.active = tab;
        changed
    }

    pub fn reset(&mut self) {
        self.active = Tab::Home;
    }
}
