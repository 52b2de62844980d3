use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Modern,
    Classic,
    Minimal,
    Playful,
    Professional,
    Creative,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Monochrome,
    Complementary,
    Analogous,
    Vibrant,
    Muted,
}

/// Caller-supplied knobs steering strategy generation. All fields are
/// optional; enhancers fall back to their own defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementPreferences {
    pub style: Option<Style>,
    pub color_scheme: Option<ColorScheme>,
    #[serde(default)]
    pub preserve_content: bool,
    #[serde(default)]
    pub auto_approve: bool,
}

impl EnhancementPreferences {
    pub fn style_or_default(&self) -> Style {
        self.style.unwrap_or(Style::Modern)
    }
}
