use indexmap::IndexMap;

use super::enhancer::Enhancer;
use super::scoring::{score_to_impact, strategy_id};
use crate::enhance::types::{
    Alignment, ChangeSet, DocumentAnalysis, EnhancementPreferences, EnhancementStrategy, GridSpec,
    LayoutChanges, Priority, Style,
};
use crate::error::EnhancerError;

struct GridPreset {
    name: &'static str,
    columns: u32,
    gutter: f64,
    margin: f64,
}

/// Five named presets; playful and creative share the asymmetric grid.
const MODULAR: GridPreset = GridPreset {
    name: "modular-12",
    columns: 12,
    gutter: 24.0,
    margin: 80.0,
};
const MANUSCRIPT: GridPreset = GridPreset {
    name: "manuscript-8",
    columns: 8,
    gutter: 20.0,
    margin: 120.0,
};
const AIRY: GridPreset = GridPreset {
    name: "airy-4",
    columns: 4,
    gutter: 40.0,
    margin: 120.0,
};
const ASYMMETRIC: GridPreset = GridPreset {
    name: "asym-16",
    columns: 16,
    gutter: 28.0,
    margin: 60.0,
};
const COLUMN: GridPreset = GridPreset {
    name: "column-12",
    columns: 12,
    gutter: 16.0,
    margin: 40.0,
};

/// Proposes structural, spacing, and alignment strategies for the
/// `layout` change domain.
pub struct LayoutEnhancer;

impl Enhancer for LayoutEnhancer {
    fn analyze(
        &self,
        analysis: &DocumentAnalysis,
        preferences: &EnhancementPreferences,
    ) -> Result<Vec<EnhancementStrategy>, EnhancerError> {
        let mut strategies = Vec::new();

        if analysis.layout.score < 80.0 {
            strategies.push(self.structural_strategy(analysis, preferences));
        }

        if analysis.layout.has_issue("Insufficient white space") {
            strategies.push(self.spacing_strategy());
        }

        if analysis.layout.has_issue("Poor alignment") {
            strategies.push(self.alignment_strategy(analysis, preferences));
        }

        Ok(strategies)
    }

    fn name(&self) -> &'static str {
        "LayoutEnhancer"
    }
}

impl LayoutEnhancer {
    fn structural_strategy(
        &self,
        analysis: &DocumentAnalysis,
        preferences: &EnhancementPreferences,
    ) -> EnhancementStrategy {
        let style = preferences.style_or_default();
        let preset = preset_for(style);
        // Dense content issues call for more rows to distribute into.
        let rows = if analysis.layout.issues.len() >= 3 { 8 } else { 6 };

        EnhancementStrategy {
            id: strategy_id("layout-enhancer"),
            name: "Structured Grid".to_string(),
            description: format!(
                "Rebuilds the page on the {} grid with {} alignment",
                preset.name,
                alignment_label(alignment_for_style(style))
            ),
            priority: Priority::High,
            impact: score_to_impact(analysis.layout.score),
            changes: ChangeSet::layout(LayoutChanges {
                grid: GridSpec {
                    preset: preset.name.to_string(),
                    columns: preset.columns,
                    gutter: preset.gutter,
                    margin: preset.margin,
                    rows,
                },
                alignment: alignment_for_style(style),
                section_spacing: 48.0,
                emphasis: default_emphasis(),
            }),
        }
    }

    /// Fixed generous spacing for cramped documents.
    fn spacing_strategy(&self) -> EnhancementStrategy {
        EnhancementStrategy {
            id: strategy_id("layout-enhancer"),
            name: "Breathing Room".to_string(),
            description: "Opens up gutters, margins, and section spacing to relieve crowding"
                .to_string(),
            priority: Priority::Medium,
            impact: 80.0,
            changes: ChangeSet::layout(LayoutChanges {
                grid: GridSpec {
                    preset: "breathing-room".to_string(),
                    columns: 12,
                    gutter: 32.0,
                    margin: 100.0,
                    rows: 6,
                },
                alignment: Alignment::Left,
                section_spacing: 80.0,
                emphasis: default_emphasis(),
            }),
        }
    }

    /// Recomputes alignment from readability and formality signals.
    fn alignment_strategy(
        &self,
        analysis: &DocumentAnalysis,
        preferences: &EnhancementPreferences,
    ) -> EnhancementStrategy {
        let style = preferences.style_or_default();
        let alignment = if analysis.engagement.readability < 70.0 {
            // Ragged-right reads best for struggling documents.
            Alignment::Left
        } else {
            alignment_for_style(style)
        };

        EnhancementStrategy {
            id: strategy_id("layout-enhancer"),
            name: "Consistent Alignment".to_string(),
            description: format!(
                "Realigns content blocks to a consistent {} edge",
                alignment_label(alignment)
            ),
            priority: Priority::Medium,
            impact: 70.0,
            changes: ChangeSet::layout(LayoutChanges {
                grid: GridSpec {
                    preset: preset_for(style).name.to_string(),
                    columns: preset_for(style).columns,
                    gutter: preset_for(style).gutter,
                    margin: preset_for(style).margin,
                    rows: 6,
                },
                alignment,
                section_spacing: 48.0,
                emphasis: default_emphasis(),
            }),
        }
    }
}

fn preset_for(style: Style) -> &'static GridPreset {
    match style {
        Style::Modern => &MODULAR,
        Style::Classic => &MANUSCRIPT,
        Style::Minimal => &AIRY,
        Style::Playful | Style::Creative => &ASYMMETRIC,
        Style::Professional => &COLUMN,
    }
}

fn alignment_for_style(style: Style) -> Alignment {
    match style {
        Style::Classic | Style::Professional => Alignment::Justify,
        Style::Playful => Alignment::Center,
        _ => Alignment::Left,
    }
}

fn alignment_label(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Justify => "justified",
    }
}

fn default_emphasis() -> IndexMap<String, f64> {
    IndexMap::from([
        ("title".to_string(), 1.0),
        ("headings".to_string(), 0.8),
        ("body".to_string(), 0.6),
        ("captions".to_string(), 0.4),
    ])
}
