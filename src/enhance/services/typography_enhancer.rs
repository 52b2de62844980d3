use super::enhancer::Enhancer;
use super::scoring::{score_to_impact, strategy_id};
use crate::enhance::types::{
    ChangeSet, DocumentAnalysis, EnhancementPreferences, EnhancementStrategy, Priority, Style,
    TypographyChanges,
};
use crate::error::EnhancerError;

/// Heading/body pairings per style.
const FONT_PAIRINGS: [(Style, &str, &str); 6] = [
    (Style::Modern, "Inter", "Inter"),
    (Style::Classic, "Playfair Display", "Source Serif Pro"),
    (Style::Minimal, "Helvetica Neue", "Helvetica Neue"),
    (Style::Playful, "Quicksand", "Nunito"),
    (Style::Professional, "IBM Plex Sans", "IBM Plex Sans"),
    (Style::Creative, "Abril Fatface", "Work Sans"),
];

/// Families set tight by default; they get their letter-spacing opened
/// up, everything else gets tightened slightly.
const TIGHT_FAMILIES: [&str; 3] = ["Inter", "Helvetica Neue", "IBM Plex Sans"];

const READABLE_HEADING: &str = "Open Sans";
const READABLE_BODY: &str = "Open Sans";

/// Proposes type-system and readability strategies for the `typography`
/// change domain.
pub struct TypographyEnhancer;

impl Enhancer for TypographyEnhancer {
    fn analyze(
        &self,
        analysis: &DocumentAnalysis,
        preferences: &EnhancementPreferences,
    ) -> Result<Vec<EnhancementStrategy>, EnhancerError> {
        let mut strategies = Vec::new();

        if analysis.typography.score < 85.0 {
            strategies.push(self.type_system_strategy(analysis, preferences));
        }

        if analysis.engagement.readability < 70.0 {
            strategies.push(self.readability_strategy(analysis));
        }

        Ok(strategies)
    }

    fn name(&self) -> &'static str {
        "TypographyEnhancer"
    }
}

impl TypographyEnhancer {
    fn type_system_strategy(
        &self,
        analysis: &DocumentAnalysis,
        preferences: &EnhancementPreferences,
    ) -> EnhancementStrategy {
        let style = preferences.style_or_default();
        let (heading_font, body_font) = pairing_for(style);

        let base_size = if analysis.typography.has_issue("Text too small") {
            18.0
        } else {
            16.0
        };
        let scale_ratio = scale_ratio_for(analysis);

        EnhancementStrategy {
            id: strategy_id("typography-enhancer"),
            name: "Systematic Type Scale".to_string(),
            description: format!(
                "Pairs {heading_font} headings with {body_font} body text on a {scale_ratio} modular scale"
            ),
            priority: Priority::High,
            impact: score_to_impact(analysis.typography.score),
            changes: ChangeSet::typography(TypographyChanges {
                heading_font: heading_font.to_string(),
                body_font: body_font.to_string(),
                base_size,
                scale_ratio,
                heading_sizes: heading_sizes(base_size, scale_ratio),
                line_height: line_height_for(base_size),
                letter_spacing: letter_spacing_for(heading_font),
                paragraph_spacing: base_size * 0.75,
            }),
        }
    }

    /// Fixed legibility-first settings for documents that read poorly.
    fn readability_strategy(&self, analysis: &DocumentAnalysis) -> EnhancementStrategy {
        let base_size = if analysis.typography.has_issue("Text too small") {
            20.0
        } else {
            18.0
        };
        let scale_ratio = 1.25;

        EnhancementStrategy {
            id: strategy_id("typography-enhancer"),
            name: "Readability Boost".to_string(),
            description:
                "Switches to a highly legible typeface with larger text and relaxed spacing"
                    .to_string(),
            priority: Priority::High,
            impact: 85.0,
            changes: ChangeSet::typography(TypographyChanges {
                heading_font: READABLE_HEADING.to_string(),
                body_font: READABLE_BODY.to_string(),
                base_size,
                scale_ratio,
                heading_sizes: heading_sizes(base_size, scale_ratio),
                line_height: 1.6,
                letter_spacing: 0.02,
                paragraph_spacing: base_size * 0.75 * 1.5,
            }),
        }
    }
}

fn pairing_for(style: Style) -> (&'static str, &'static str) {
    FONT_PAIRINGS
        .iter()
        .find(|(candidate, _, _)| *candidate == style)
        .map(|(_, heading, body)| (*heading, *body))
        .unwrap_or((FONT_PAIRINGS[0].1, FONT_PAIRINGS[0].2))
}

/// Type-scale ratio by required hierarchy depth: an explicit hierarchy
/// issue demands the steepest scale, a weak score a moderate one, and a
/// merely imperfect score the gentlest.
fn scale_ratio_for(analysis: &DocumentAnalysis) -> f64 {
    let hierarchy_flagged = analysis
        .typography
        .issues
        .iter()
        .any(|issue| issue.to_ascii_lowercase().contains("hierarchy"));

    if hierarchy_flagged {
        1.5
    } else if analysis.typography.score < 70.0 {
        1.25
    } else {
        1.2
    }
}

/// Sizes for heading levels 1..=6, largest first, generated by repeated
/// multiplication of the base size.
fn heading_sizes(base_size: f64, scale_ratio: f64) -> Vec<f64> {
    let mut sizes: Vec<f64> = (1..=6)
        .scan(base_size, |size, _| {
            *size *= scale_ratio;
            Some((*size * 100.0).round() / 100.0)
        })
        .collect();
    sizes.reverse();
    sizes
}

fn line_height_for(base_size: f64) -> f64 {
    if base_size >= 18.0 {
        1.6
    } else {
        1.5
    }
}

fn letter_spacing_for(heading_font: &str) -> f64 {
    if TIGHT_FAMILIES.contains(&heading_font) {
        0.01
    } else {
        -0.01
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enhance::types::{DimensionReport, EngagementReport};

    fn analysis(typography_score: f64, issues: Vec<&str>, readability: f64) -> DocumentAnalysis {
        DocumentAnalysis {
            typography: DimensionReport {
                score: typography_score,
                issues: issues.into_iter().map(String::from).collect(),
            },
            engagement: EngagementReport {
                score: 75.0,
                readability,
                issues: vec![],
            },
            ..DocumentAnalysis::default()
        }
    }

    #[test]
    fn test_no_strategies_for_strong_typography() {
        let strategies = TypographyEnhancer
            .analyze(&analysis(90.0, vec![], 80.0), &EnhancementPreferences::default())
            .unwrap();
        assert!(strategies.is_empty());
    }

    #[test]
    fn test_type_system_defaults() {
        let strategies = TypographyEnhancer
            .analyze(&analysis(60.0, vec![], 80.0), &EnhancementPreferences::default())
            .unwrap();
        assert_eq!(strategies.len(), 1);
        let typography = strategies[0].changes.typography.as_ref().unwrap();
        assert_eq!(typography.heading_font, "Inter");
        assert_eq!(typography.base_size, 16.0);
        assert_eq!(typography.scale_ratio, 1.25);
        assert_eq!(typography.line_height, 1.5);
        assert_eq!(typography.letter_spacing, 0.01);
        assert_eq!(strategies[0].impact, 60.0);
    }

    #[test]
    fn test_small_text_issue_raises_base_size() {
        let strategies = TypographyEnhancer
            .analyze(
                &analysis(60.0, vec!["Text too small"], 80.0),
                &EnhancementPreferences::default(),
            )
            .unwrap();
        let typography = strategies[0].changes.typography.as_ref().unwrap();
        assert_eq!(typography.base_size, 18.0);
        assert_eq!(typography.line_height, 1.6);
    }

    #[test]
    fn test_hierarchy_issue_steepens_scale() {
        let strategies = TypographyEnhancer
            .analyze(
                &analysis(80.0, vec!["Weak visual hierarchy"], 80.0),
                &EnhancementPreferences::default(),
            )
            .unwrap();
        let typography = strategies[0].changes.typography.as_ref().unwrap();
        assert_eq!(typography.scale_ratio, 1.5);
    }

    #[test]
    fn test_heading_sizes_descend_from_repeated_multiplication() {
        let sizes = heading_sizes(16.0, 1.25);
        assert_eq!(sizes.len(), 6);
        assert_eq!(sizes[5], 20.0);
        assert_eq!(sizes[4], 25.0);
        for pair in sizes.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn test_style_selects_pairing() {
        let preferences = EnhancementPreferences {
            style: Some(Style::Classic),
            ..EnhancementPreferences::default()
        };
        let strategies = TypographyEnhancer
            .analyze(&analysis(60.0, vec![], 80.0), &preferences)
            .unwrap();
        let typography = strategies[0].changes.typography.as_ref().unwrap();
        assert_eq!(typography.heading_font, "Playfair Display");
        assert_eq!(typography.body_font, "Source Serif Pro");
        assert_eq!(typography.letter_spacing, -0.01);
    }

    #[test]
    fn test_low_readability_adds_readability_strategy() {
        let strategies = TypographyEnhancer
            .analyze(&analysis(60.0, vec![], 65.0), &EnhancementPreferences::default())
            .unwrap();
        assert_eq!(strategies.len(), 2);
        let readability = &strategies[1];
        assert_eq!(readability.impact, 85.0);
        let typography = readability.changes.typography.as_ref().unwrap();
        assert_eq!(typography.base_size, 18.0);
        assert_eq!(typography.line_height, 1.6);
        assert!(typography.letter_spacing > 0.0);
        assert_eq!(typography.paragraph_spacing, 18.0 * 0.75 * 1.5);
    }

    #[test]
    fn test_readability_strategy_fires_alone_when_typography_is_fine() {
        let strategies = TypographyEnhancer
            .analyze(&analysis(90.0, vec![], 50.0), &EnhancementPreferences::default())
            .unwrap();
        assert_eq!(strategies.len(), 1);
        assert_eq!(strategies[0].name, "Readability Boost");
    }
}
