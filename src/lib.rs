pub mod config;
pub mod enhance;
pub mod error;

pub use config::EngineConfig;
pub use error::{EnhanceError, EnhancerError};

pub use enhance::orchestration::StrategyGenerator;
pub use enhance::types::{
    DocumentAnalysis, EnhancementPreferences, EnhancementStrategy, Priority,
};
