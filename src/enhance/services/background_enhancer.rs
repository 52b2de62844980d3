use super::enhancer::Enhancer;
use super::scoring::strategy_id;
use crate::enhance::domain::color::Rgb;
use crate::enhance::types::{
    BackgroundChanges, BackgroundKind, ChangeSet, DocumentAnalysis, EnhancementPreferences,
    EnhancementStrategy, Priority, Style,
};
use crate::error::EnhancerError;

const NEUTRAL_BACKGROUND: &str = "#F7F7F9";

/// Proposes a background treatment for documents that score poorly
/// overall. Touches only the `background` change domain.
pub struct BackgroundEnhancer;

impl Enhancer for BackgroundEnhancer {
    fn analyze(
        &self,
        analysis: &DocumentAnalysis,
        preferences: &EnhancementPreferences,
    ) -> Result<Vec<EnhancementStrategy>, EnhancerError> {
        if analysis.overall_score >= 75.0 {
            return Ok(Vec::new());
        }

        let style = preferences.style_or_default();
        let kind = kind_for(style);
        let value = background_value(kind, analysis)?;

        Ok(vec![EnhancementStrategy {
            id: strategy_id("background-enhancer"),
            name: "Refined Background".to_string(),
            description: format!("Replaces the background with a {} treatment", kind_label(kind)),
            priority: Priority::Medium,
            impact: 40.0,
            changes: ChangeSet::background(BackgroundChanges { kind, value }),
        }])
    }

    fn name(&self) -> &'static str {
        "BackgroundEnhancer"
    }
}

fn kind_for(style: Style) -> BackgroundKind {
    match style {
        Style::Minimal => BackgroundKind::Solid,
        Style::Classic => BackgroundKind::Pattern,
        Style::Playful | Style::Creative => BackgroundKind::Gradient,
        Style::Modern | Style::Professional => BackgroundKind::Gradient,
    }
}

fn kind_label(kind: BackgroundKind) -> &'static str {
    match kind {
        BackgroundKind::Solid => "solid",
        BackgroundKind::Gradient => "gradient",
        BackgroundKind::Pattern => "pattern",
        BackgroundKind::Image => "image",
    }
}

/// Derive the background value from the document's primary color when
/// one exists; documents without a palette fall back to a neutral tint.
fn background_value(
    kind: BackgroundKind,
    analysis: &DocumentAnalysis,
) -> Result<String, EnhancerError> {
    let tint = match analysis.palette.first() {
        Some(hex) => Rgb::parse(hex)?.to_hsl().with_lightness(0.96).to_hex(),
        None => NEUTRAL_BACKGROUND.to_string(),
    };

    Ok(match kind {
        BackgroundKind::Solid => tint,
        BackgroundKind::Gradient => format!("linear-gradient(135deg, {tint}, #FFFFFF)"),
        BackgroundKind::Pattern => format!("dot-grid:{tint}"),
        BackgroundKind::Image => tint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(overall_score: f64, palette: Vec<&str>) -> DocumentAnalysis {
        DocumentAnalysis {
            overall_score,
            palette: palette.into_iter().map(String::from).collect(),
            ..DocumentAnalysis::default()
        }
    }

    #[test]
    fn test_quiet_above_threshold() {
        let strategies = BackgroundEnhancer
            .analyze(&analysis(80.0, vec!["#336699"]), &EnhancementPreferences::default())
            .unwrap();
        assert!(strategies.is_empty());
    }

    #[test]
    fn test_kind_follows_style() {
        for (style, expected) in [
            (Style::Minimal, BackgroundKind::Solid),
            (Style::Classic, BackgroundKind::Pattern),
            (Style::Playful, BackgroundKind::Gradient),
            (Style::Modern, BackgroundKind::Gradient),
        ] {
            let preferences = EnhancementPreferences {
                style: Some(style),
                ..EnhancementPreferences::default()
            };
            let strategies = BackgroundEnhancer
                .analyze(&analysis(60.0, vec!["#336699"]), &preferences)
                .unwrap();
            assert_eq!(strategies[0].changes.background.as_ref().unwrap().kind, expected);
        }
    }

    #[test]
    fn test_tint_derived_from_palette() {
        let preferences = EnhancementPreferences {
            style: Some(Style::Minimal),
            ..EnhancementPreferences::default()
        };
        let strategies = BackgroundEnhancer
            .analyze(&analysis(60.0, vec!["#336699"]), &preferences)
            .unwrap();
        let background = strategies[0].changes.background.as_ref().unwrap();
        assert_ne!(background.value, NEUTRAL_BACKGROUND);
        assert!(background.value.starts_with('#'));
    }

    #[test]
    fn test_missing_palette_falls_back_to_neutral() {
        let preferences = EnhancementPreferences {
            style: Some(Style::Minimal),
            ..EnhancementPreferences::default()
        };
        let strategies = BackgroundEnhancer
            .analyze(&analysis(60.0, vec![]), &preferences)
            .unwrap();
        assert_eq!(
            strategies[0].changes.background.as_ref().unwrap().value,
            NEUTRAL_BACKGROUND
        );
    }

    #[test]
    fn test_invalid_palette_color_is_an_error() {
        let result = BackgroundEnhancer
            .analyze(&analysis(60.0, vec!["nope"]), &EnhancementPreferences::default());
        assert!(matches!(result, Err(EnhancerError::InvalidColor(_))));
    }

    #[test]
    fn test_priority_and_impact() {
        let strategies = BackgroundEnhancer
            .analyze(&analysis(60.0, vec!["#336699"]), &EnhancementPreferences::default())
            .unwrap();
        assert_eq!(strategies[0].priority, Priority::Medium);
        assert_eq!(strategies[0].impact, 40.0);
    }
}
