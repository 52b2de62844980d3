mod generator;

pub use generator::StrategyGenerator;
