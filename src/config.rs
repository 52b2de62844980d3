use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Documents scoring below this overall threshold get their candidate
    /// impacts boosted.
    pub low_score_threshold: f64,
    /// Impact multiplier applied below the threshold (capped at 100).
    pub low_score_boost: f64,
    /// How many ranked strategies feed the synthesized optimal strategy.
    pub optimal_top_n: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            low_score_threshold: 50.0,
            low_score_boost: 1.10,
            optimal_top_n: 5,
        }
    }
}
