//! Tray menu model

use std::fmt;
use std::sync::Arc;

/// Callback invoked when a tray menu action is selected
pub type TrayAction = Arc<dyn Fn() + Send + Sync>;

/// One entry of a tray menu
#[derive(Clone)]
pub enum TrayMenuItem {
    /// A clickable entry
    Action(ActionItem),
    /// A nested menu
    Submenu(SubmenuItem),
    /// A visual separator
    Separator,
}

/// A clickable tray menu entry
#[derive(Clone)]
pub struct ActionItem {
    /// Label shown in the menu
    pub title: String,
    /// Invoked when the entry is selected
    pub action: TrayAction,
    /// Disabled entries are shown greyed out
    pub enabled: bool,
}

impl ActionItem {
    /// Create an enabled action item
    pub fn new<S: Into<String>>(title: S, action: TrayAction) -> Self {
        Self {
            title: title.into(),
            action,
            enabled: true,
        }
    }

    /// Set whether the entry can be selected
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl fmt::Debug for ActionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionItem")
            .field("title", &self.title)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

/// A nested tray menu
#[derive(Debug, Clone)]
pub struct SubmenuItem {
    /// Label shown in the parent menu
    pub title: String,
    /// Entries of the submenu
    pub items: Vec<TrayMenuItem>,
}

impl fmt::Debug for TrayMenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Action(item) => item.fmt(f),
            Self::Submenu(item) => item.fmt(f),
            Self::Separator => f.write_str("Separator"),
        }
    }
}
