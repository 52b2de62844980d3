use super::enhancer::Enhancer;
use super::scoring::strategy_id;
use crate::enhance::domain::color::Rgb;
use crate::enhance::types::{
    ChangeSet, DecorativeChanges, DecorativeElement, DocumentAnalysis, EnhancementPreferences,
    EnhancementStrategy, Priority, Style,
};
use crate::error::EnhancerError;

const DEFAULT_ACCENT: &str = "#5B8DEF";
const SHAPES: [&str; 4] = ["circle", "blob", "line", "triangle"];
const POSITIONS: [&str; 4] = ["top-left", "top-right", "bottom-left", "bottom-right"];

/// Proposes decorative accents for disengaging documents. Touches only
/// the `decorativeElements` change domain.
pub struct DecorativeEnhancer;

impl Enhancer for DecorativeEnhancer {
    fn analyze(
        &self,
        analysis: &DocumentAnalysis,
        preferences: &EnhancementPreferences,
    ) -> Result<Vec<EnhancementStrategy>, EnhancerError> {
        if analysis.engagement.score >= 70.0 {
            return Ok(Vec::new());
        }

        let style = preferences.style_or_default();
        let accent = accent_color(analysis)?;
        let count = element_count(style);

        let elements = (0..count)
            .map(|index| DecorativeElement {
                shape: SHAPES[index % SHAPES.len()].to_string(),
                position: POSITIONS[index % POSITIONS.len()].to_string(),
                size: 48.0 + (index as f64) * 16.0,
                opacity: 0.12,
                color: accent.clone(),
            })
            .collect();

        Ok(vec![EnhancementStrategy {
            id: strategy_id("decorative-enhancer"),
            name: "Decorative Accents".to_string(),
            description: format!("Adds {count} subtle accent shapes to lift engagement"),
            priority: Priority::Low,
            impact: 35.0,
            changes: ChangeSet::decorative(DecorativeChanges { elements }),
        }])
    }

    fn name(&self) -> &'static str {
        "DecorativeEnhancer"
    }
}

fn element_count(style: Style) -> usize {
    match style {
        Style::Minimal => 2,
        Style::Playful => 8,
        _ => 4,
    }
}

fn accent_color(analysis: &DocumentAnalysis) -> Result<String, EnhancerError> {
    match analysis.palette.first() {
        Some(hex) => Ok(Rgb::parse(hex)?.to_hsl().rotate(30.0).to_hex()),
        None => Ok(DEFAULT_ACCENT.to_string()),
    }
}
