use serde::{Deserialize, Serialize};

/// Brand colors applied across the customer-facing pages. Defaults to the
/// emerald palette.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text_primary: String,
    pub text_secondary: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#059669".to_string(),
            secondary: "#10b981".to_string(),
            accent: "#f0fdf4".to_string(),
            background: "#ffffff".to_string(),
            text_primary: "#111827".to_string(),
            text_secondary: "#4b5563".to_string(),
        }
    }
}
