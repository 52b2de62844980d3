use crate::enhance::types::{DocumentAnalysis, EnhancementPreferences, EnhancementStrategy};
use crate::error::EnhancerError;

/// Shared contract for the specialized enhancers. Implementations are
/// stateless pure functions of their inputs (aside from fixed internal
/// lookup tables), so they can run concurrently without coordination.
pub trait Enhancer: Send + Sync {
    fn analyze(
        &self,
        analysis: &DocumentAnalysis,
        preferences: &EnhancementPreferences,
    ) -> Result<Vec<EnhancementStrategy>, EnhancerError>;

    fn name(&self) -> &'static str;
}
