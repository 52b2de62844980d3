use chrono::Utc;

/// Map a dimension score to an estimated fix impact. Worse documents get
/// higher-impact fixes.
pub fn score_to_impact(score: f64) -> f64 {
    if score < 50.0 {
        80.0
    } else if score < 70.0 {
        60.0
    } else if score < 85.0 {
        40.0
    } else {
        20.0
    }
}

/// Strategy ids are `<enhancer-slug>-<unix-millis>`. Uniqueness is a soft
/// guarantee, not cryptographic.
pub fn strategy_id(slug: &str) -> String {
    format!("{slug}-{}", Utc::now().timestamp_millis())
}

/// Estimated gain from moving `current` to `potential`, clamped to [0, 100].
pub fn calculate_impact(current: f64, potential: f64) -> f64 {
    (potential - current).clamp(0.0, 100.0)
}
