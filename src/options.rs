use serde::Deserialize;

/// Options for render-plan computation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanOptions {
    /// Attach label text to markers (default: true)
    #[serde(default = "default_true")]
    pub include_labels: bool,

    /// Override the built-in 20-color palette. Colors are any CSS color
    /// strings; tracks cycle through the list by index (default: none)
    #[serde(default)]
    pub palette: Option<Vec<String>>,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            include_labels: true,
            palette: None,
        }
    }
}

fn default_true() -> bool {
    true
}
