//! UI themes reported by the operating system

use serde::{Deserialize, Serialize};

/// Light or dark appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light appearance; reported when the system theme cannot be determined
    #[default]
    Light,
    /// Dark appearance
    Dark,
}
