use indexmap::IndexMap;

use super::enhancer::Enhancer;
use super::scoring::{score_to_impact, strategy_id};
use crate::enhance::domain::color::{ensure_contrast, Hsl, Rgb};
use crate::enhance::types::{
    ChangeSet, ColorAdjustments, ColorChanges, ColorScheme, DocumentAnalysis,
    EnhancementPreferences, EnhancementStrategy, Priority,
};
use crate::error::EnhancerError;

const WCAG_AA_CONTRAST: f64 = 4.5;

/// Proposes palette and contrast-accessibility strategies for the
/// `colors` change domain.
pub struct ColorEnhancer;

impl Enhancer for ColorEnhancer {
    fn analyze(
        &self,
        analysis: &DocumentAnalysis,
        preferences: &EnhancementPreferences,
    ) -> Result<Vec<EnhancementStrategy>, EnhancerError> {
        let mut strategies = Vec::new();

        if analysis.colors.score < 80.0 {
            strategies.push(self.palette_strategy(analysis, preferences)?);
        }

        if analysis.colors.has_issue("Poor contrast") {
            strategies.push(self.accessibility_strategy(analysis)?);
        }

        Ok(strategies)
    }

    fn name(&self) -> &'static str {
        "ColorEnhancer"
    }
}

impl ColorEnhancer {
    fn palette_strategy(
        &self,
        analysis: &DocumentAnalysis,
        preferences: &EnhancementPreferences,
    ) -> Result<EnhancementStrategy, EnhancerError> {
        let scheme = preferences
            .color_scheme
            .unwrap_or_else(|| infer_scheme(analysis.palette.len()));

        let first = analysis
            .palette
            .first()
            .ok_or(EnhancerError::EmptyPalette)?;
        let base = Rgb::parse(first)?.to_hsl();

        let palette = scheme_palette(base, scheme);
        let replacements = build_replacements(&analysis.palette, &palette);

        Ok(EnhancementStrategy {
            id: strategy_id("color-enhancer"),
            name: "Optimized Color Palette".to_string(),
            description: format!(
                "Rebuilds the palette around a {} scheme derived from the current primary color",
                scheme_label(scheme)
            ),
            priority: Priority::High,
            impact: score_to_impact(analysis.colors.score),
            changes: ChangeSet::colors(ColorChanges {
                palette,
                adjustments: adjustments_from_issues(analysis),
                replacements,
            }),
        })
    }

    /// Biases the existing palette toward WCAG AA: every color after the
    /// first is nudged until it reaches 4.5:1 against the first, which is
    /// treated as the dominant background.
    fn accessibility_strategy(
        &self,
        analysis: &DocumentAnalysis,
    ) -> Result<EnhancementStrategy, EnhancerError> {
        let first = analysis
            .palette
            .first()
            .ok_or(EnhancerError::EmptyPalette)?;
        let background = Rgb::parse(first)?;

        let mut palette = vec![background.to_hex()];
        let mut replacements = IndexMap::new();
        for original in analysis.palette.iter().skip(1) {
            let color = Rgb::parse(original)?;
            let fixed = ensure_contrast(color, background, WCAG_AA_CONTRAST);
            palette.push(fixed.to_hex());
            if fixed != color {
                replacements.insert(original.clone(), fixed.to_hex());
            }
        }

        Ok(EnhancementStrategy {
            id: strategy_id("color-enhancer"),
            name: "Accessibility Contrast Fix".to_string(),
            description: "Adjusts palette colors until text-to-background contrast meets WCAG AA"
                .to_string(),
            priority: Priority::High,
            impact: 90.0,
            changes: ChangeSet::colors(ColorChanges {
                palette,
                adjustments: ColorAdjustments {
                    contrast: 1.4,
                    ..ColorAdjustments::default()
                },
                replacements,
            }),
        })
    }
}

/// Scheme fallback when the caller expressed no preference: small
/// palettes suggest restrained schemes, large ones suggest vibrancy.
fn infer_scheme(palette_size: usize) -> ColorScheme {
    if palette_size <= 2 {
        ColorScheme::Monochrome
    } else if palette_size <= 3 {
        ColorScheme::Complementary
    } else if palette_size <= 5 {
        ColorScheme::Analogous
    } else {
        ColorScheme::Vibrant
    }
}

fn scheme_label(scheme: ColorScheme) -> &'static str {
    match scheme {
        ColorScheme::Monochrome => "monochrome",
        ColorScheme::Complementary => "complementary",
        ColorScheme::Analogous => "analogous",
        ColorScheme::Vibrant => "vibrant",
        ColorScheme::Muted => "muted",
    }
}

/// Derive the proposed palette from the base color's hue via HSL
/// rotation rules per scheme.
fn scheme_palette(base: Hsl, scheme: ColorScheme) -> Vec<String> {
    let colors = match scheme {
        ColorScheme::Monochrome => vec![
            base.with_lightness(0.25),
            base.with_lightness(0.45),
            base.with_lightness(0.65),
            base.with_lightness(0.85),
        ],
        ColorScheme::Complementary => vec![
            base,
            base.rotate(180.0),
            base.lighten(0.15),
            base.rotate(180.0).lighten(0.15),
        ],
        ColorScheme::Analogous => vec![
            base.rotate(-30.0),
            base,
            base.rotate(30.0),
            base.rotate(60.0),
        ],
        ColorScheme::Vibrant => {
            let boosted = base.saturate(1.3);
            vec![boosted, boosted.rotate(120.0), boosted.rotate(240.0)]
        }
        ColorScheme::Muted => {
            let softened = base.saturate(0.5);
            vec![softened, softened.rotate(30.0), softened.darken(0.15)]
        }
    };
    colors.into_iter().map(Hsl::to_hex).collect()
}

/// Pair each existing palette color with an optimized counterpart,
/// cycling through the proposed palette when the current one is longer.
fn build_replacements(current: &[String], proposed: &[String]) -> IndexMap<String, String> {
    let mut replacements = IndexMap::new();
    if proposed.is_empty() {
        return replacements;
    }
    for (index, original) in current.iter().enumerate() {
        replacements.insert(original.clone(), proposed[index % proposed.len()].clone());
    }
    replacements
}

/// Adjustment multipliers derived from the detected color issues.
fn adjustments_from_issues(analysis: &DocumentAnalysis) -> ColorAdjustments {
    let colors = &analysis.colors;
    ColorAdjustments {
        contrast: if colors.has_issue("Poor contrast") {
            1.3
        } else {
            1.0
        },
        saturation: if colors.has_issue("Dull colors") || colors.has_issue("Low saturation") {
            1.25
        } else if colors.has_issue("Oversaturated") {
            0.8
        } else {
            1.0
        },
        brightness: if colors.has_issue("Too dark") {
            1.2
        } else if colors.has_issue("Too bright") {
            0.9
        } else {
            1.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enhance::domain::color::contrast_ratio;
    use crate::enhance::types::DimensionReport;

    fn analysis_with_colors(score: f64, issues: Vec<&str>, palette: Vec<&str>) -> DocumentAnalysis {
        DocumentAnalysis {
            colors: DimensionReport {
                score,
                issues: issues.into_iter().map(String::from).collect(),
            },
            palette: palette.into_iter().map(String::from).collect(),
            ..DocumentAnalysis::default()
        }
    }

    #[test]
    fn test_no_strategies_for_strong_colors() {
        let analysis = analysis_with_colors(88.0, vec![], vec!["#336699"]);
        let strategies = ColorEnhancer
            .analyze(&analysis, &EnhancementPreferences::default())
            .unwrap();
        assert!(strategies.is_empty());
    }

    #[test]
    fn test_palette_strategy_impact_follows_score() {
        let analysis = analysis_with_colors(55.0, vec![], vec!["#336699", "#FFFFFF"]);
        let strategies = ColorEnhancer
            .analyze(&analysis, &EnhancementPreferences::default())
            .unwrap();
        assert_eq!(strategies.len(), 1);
        assert_eq!(strategies[0].impact, 60.0);
        assert_eq!(strategies[0].priority, Priority::High);
        assert!(strategies[0].changes.colors.is_some());
    }

    #[test]
    fn test_contrast_issue_adds_accessibility_strategy() {
        let analysis =
            analysis_with_colors(55.0, vec!["Poor contrast"], vec!["#FFFFFF", "#CCCCCC"]);
        let strategies = ColorEnhancer
            .analyze(&analysis, &EnhancementPreferences::default())
            .unwrap();
        assert_eq!(strategies.len(), 2);
        assert_eq!(strategies[0].impact, 60.0);
        assert_eq!(strategies[1].impact, 90.0);
        assert_eq!(strategies[1].name, "Accessibility Contrast Fix");
    }

    #[test]
    fn test_accessibility_palette_meets_wcag_aa() {
        let analysis =
            analysis_with_colors(75.0, vec!["Poor contrast"], vec!["#FFFFFF", "#BBBBBB", "#999999"]);
        let strategies = ColorEnhancer
            .analyze(&analysis, &EnhancementPreferences::default())
            .unwrap();
        let accessibility = &strategies[1];
        let colors = accessibility.changes.colors.as_ref().unwrap();
        let background = Rgb::parse(&colors.palette[0]).unwrap();
        for hex in colors.palette.iter().skip(1) {
            let color = Rgb::parse(hex).unwrap();
            assert!(contrast_ratio(color, background) >= WCAG_AA_CONTRAST);
        }
        assert!(!colors.replacements.is_empty());
    }

    #[test]
    fn test_scheme_inference_by_palette_size() {
        assert_eq!(infer_scheme(1), ColorScheme::Monochrome);
        assert_eq!(infer_scheme(2), ColorScheme::Monochrome);
        assert_eq!(infer_scheme(3), ColorScheme::Complementary);
        assert_eq!(infer_scheme(5), ColorScheme::Analogous);
        assert_eq!(infer_scheme(6), ColorScheme::Vibrant);
    }

    #[test]
    fn test_preferred_scheme_wins_over_inference() {
        let analysis = analysis_with_colors(55.0, vec![], vec!["#336699"]);
        let preferences = EnhancementPreferences {
            color_scheme: Some(ColorScheme::Muted),
            ..EnhancementPreferences::default()
        };
        let strategies = ColorEnhancer.analyze(&analysis, &preferences).unwrap();
        assert!(strategies[0].description.contains("muted"));
    }

    #[test]
    fn test_replacements_cover_every_current_color() {
        let analysis = analysis_with_colors(
            55.0,
            vec![],
            vec!["#111111", "#222222", "#333333", "#444444", "#555555", "#666666"],
        );
        let strategies = ColorEnhancer
            .analyze(&analysis, &EnhancementPreferences::default())
            .unwrap();
        let colors = strategies[0].changes.colors.as_ref().unwrap();
        assert_eq!(colors.replacements.len(), 6);
        assert_eq!(
            colors.replacements.keys().next().unwrap(),
            "#111111"
        );
    }

    #[test]
    fn test_empty_palette_is_an_error() {
        let analysis = analysis_with_colors(55.0, vec![], vec![]);
        let result = ColorEnhancer.analyze(&analysis, &EnhancementPreferences::default());
        assert!(matches!(result, Err(EnhancerError::EmptyPalette)));
    }

    #[test]
    fn test_invalid_hex_is_an_error() {
        let analysis = analysis_with_colors(55.0, vec![], vec!["bogus"]);
        let result = ColorEnhancer.analyze(&analysis, &EnhancementPreferences::default());
        assert!(matches!(result, Err(EnhancerError::InvalidColor(_))));
    }

    #[test]
    fn test_adjustments_follow_issues() {
        let analysis = analysis_with_colors(
            55.0,
            vec!["Poor contrast", "Dull colors", "Too dark"],
            vec!["#336699"],
        );
        let strategies = ColorEnhancer
            .analyze(&analysis, &EnhancementPreferences::default())
            .unwrap();
        let adjustments = &strategies[0].changes.colors.as_ref().unwrap().adjustments;
        assert_eq!(adjustments.contrast, 1.3);
        assert_eq!(adjustments.saturation, 1.25);
        assert_eq!(adjustments.brightness, 1.2);
    }
}
