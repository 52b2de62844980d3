use std::sync::Arc;

use crate::config::EngineConfig;
use crate::enhance::services::{
    scoring::strategy_id, BackgroundEnhancer, ColorEnhancer, DecorativeEnhancer, Enhancer,
    LayoutEnhancer, TypographyEnhancer,
};
use crate::enhance::types::{
    ChangeDomain, ChangeSet, DocumentAnalysis, EnhancementPreferences, EnhancementStrategy,
    Priority,
};
use crate::error::EnhanceError;

/// Fans out to the specialized enhancers, then aggregates, filters,
/// de-conflicts, and ranks their candidates. Each invocation is fully
/// independent; the generator holds no per-document state.
pub struct StrategyGenerator {
    enhancers: Vec<Arc<dyn Enhancer>>,
    config: EngineConfig,
}

impl Default for StrategyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl StrategyGenerator {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        // Canonical order; it doubles as the ranking tie-break.
        Self {
            enhancers: vec![
                Arc::new(ColorEnhancer),
                Arc::new(TypographyEnhancer),
                Arc::new(LayoutEnhancer),
                Arc::new(BackgroundEnhancer),
                Arc::new(DecorativeEnhancer),
            ],
            config,
        }
    }

    /// Produce the ranked, conflict-free strategy list. Any enhancer
    /// failure aborts the whole call; no partial list is returned.
    pub async fn generate_strategies(
        &self,
        analysis: &DocumentAnalysis,
        preferences: Option<&EnhancementPreferences>,
    ) -> Result<Vec<EnhancementStrategy>, EnhanceError> {
        let preferences = Arc::new(preferences.cloned().unwrap_or_default());
        let analysis = Arc::new(analysis.clone());

        let handles: Vec<_> = self
            .enhancers
            .iter()
            .map(|enhancer| {
                let enhancer = Arc::clone(enhancer);
                let analysis = Arc::clone(&analysis);
                let preferences = Arc::clone(&preferences);
                tokio::task::spawn_blocking(move || enhancer.analyze(&analysis, &preferences))
            })
            .collect();

        // Join in canonical order so tie-breaks stay deterministic.
        let mut candidates = Vec::new();
        for result in futures::future::try_join_all(handles).await? {
            candidates.extend(result?);
        }
        tracing::debug!(count = candidates.len(), "collected candidate strategies");

        let filtered = filter_by_preferences(candidates, &preferences);
        let boosted = self.apply_low_score_boost(filtered, analysis.overall_score);
        let resolved = resolve_conflicts(boosted);
        let ranked = rank(resolved);
        tracing::info!(count = ranked.len(), "generated enhancement strategies");
        Ok(ranked)
    }

    /// Synthesize one combined strategy from the top-ranked survivors.
    pub async fn generate_optimal_strategy(
        &self,
        analysis: &DocumentAnalysis,
        preferences: Option<&EnhancementPreferences>,
    ) -> Result<EnhancementStrategy, EnhanceError> {
        let ranked = self.generate_strategies(analysis, preferences).await?;
        let top: Vec<EnhancementStrategy> =
            ranked.into_iter().take(self.config.optimal_top_n).collect();

        // Merge in descending impact order so any residual domain
        // collision resolves toward the stronger contributor.
        let mut by_impact: Vec<&EnhancementStrategy> = top.iter().collect();
        by_impact.sort_by(|a, b| b.impact.total_cmp(&a.impact));
        let mut changes = ChangeSet::default();
        for strategy in by_impact {
            changes.merge_missing(&strategy.changes);
        }

        let impact = diminishing_returns(top.iter().map(|strategy| strategy.impact));

        let description = if top.is_empty() {
            "No enhancements required".to_string()
        } else {
            let names: Vec<&str> = top.iter().map(|strategy| strategy.name.as_str()).collect();
            format!("Combines {}", names.join(", "))
        };

        Ok(EnhancementStrategy {
            id: strategy_id("optimal"),
            name: "Comprehensive Enhancement".to_string(),
            description,
            priority: Priority::High,
            impact,
            changes,
        })
    }

    /// Documents in poor overall shape get every surviving candidate's
    /// impact boosted; candidates are never dropped here.
    fn apply_low_score_boost(
        &self,
        mut candidates: Vec<EnhancementStrategy>,
        overall_score: f64,
    ) -> Vec<EnhancementStrategy> {
        if overall_score >= self.config.low_score_threshold {
            return candidates;
        }
        tracing::debug!(overall_score, "boosting impacts for low-scoring document");
        for strategy in &mut candidates {
            strategy.impact = (strategy.impact * self.config.low_score_boost).min(100.0);
        }
        candidates
    }
}

fn filter_by_preferences(
    candidates: Vec<EnhancementStrategy>,
    preferences: &EnhancementPreferences,
) -> Vec<EnhancementStrategy> {
    if preferences.auto_approve {
        return candidates;
    }
    if !preferences.preserve_content {
        return candidates;
    }

    let before = candidates.len();
    let kept: Vec<EnhancementStrategy> = candidates
        .into_iter()
        .filter(|strategy| !strategy.changes.restructures_content())
        .collect();
    tracing::debug!(
        dropped = before - kept.len(),
        "filtered content-restructuring strategies"
    );
    kept
}

/// Per-domain elimination: in every change domain the highest-impact
/// strategy wins (ties go to the earlier candidate); losers keep only
/// the domains they win, and strategies left empty are dropped.
fn resolve_conflicts(mut candidates: Vec<EnhancementStrategy>) -> Vec<EnhancementStrategy> {
    for domain in ChangeDomain::ALL {
        let winner = candidates
            .iter()
            .enumerate()
            .filter(|(_, strategy)| strategy.changes.contains(domain))
            .max_by(|(index_a, a), (index_b, b)| {
                a.impact.total_cmp(&b.impact).then(index_b.cmp(index_a))
            })
            .map(|(index, _)| index);

        let Some(winner) = winner else { continue };
        for (index, strategy) in candidates.iter_mut().enumerate() {
            if index != winner && strategy.changes.contains(domain) {
                tracing::debug!(
                    domain = ?domain,
                    loser = %strategy.id,
                    "conflict resolved"
                );
                strategy.changes.clear(domain);
            }
        }
    }

    candidates.retain(|strategy| !strategy.changes.is_empty());
    candidates
}

/// Stable descending sort by weighted score; ties keep enhancer
/// invocation order.
fn rank(mut strategies: Vec<EnhancementStrategy>) -> Vec<EnhancementStrategy> {
    strategies.sort_by(|a, b| b.score().total_cmp(&a.score()));
    strategies
}

/// Combined impact with diminishing returns: stacking fixes never sums
/// linearly.
fn diminishing_returns(impacts: impl Iterator<Item = f64>) -> f64 {
    let remaining_deficit: f64 = impacts.map(|impact| 1.0 - impact / 100.0).product();
    (100.0 * (1.0 - remaining_deficit)).clamp(0.0, 100.0)
}
