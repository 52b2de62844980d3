use docshine::{DocumentAnalysis, EnhanceError, EnhancementPreferences, StrategyGenerator};
use tracing::Level;

fn init_logging() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
}

/// Reads a document analysis (and optionally preferences) from JSON
/// files and prints the ranked strategies plus the synthesized optimal
/// strategy.
#[tokio::main]
async fn main() -> Result<(), EnhanceError> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let Some(analysis_path) = args.next() else {
        eprintln!("usage: docshine <analysis.json> [preferences.json]");
        return Ok(());
    };

    let analysis: DocumentAnalysis =
        serde_json::from_str(&std::fs::read_to_string(&analysis_path)?)?;
    let preferences: Option<EnhancementPreferences> = match args.next() {
        Some(path) => Some(serde_json::from_str(&std::fs::read_to_string(&path)?)?),
        None => None,
    };

    let generator = StrategyGenerator::new();
    let strategies = generator
        .generate_strategies(&analysis, preferences.as_ref())
        .await?;
    println!("{}", serde_json::to_string_pretty(&strategies)?);

    let optimal = generator
        .generate_optimal_strategy(&analysis, preferences.as_ref())
        .await?;
    println!("{}", serde_json::to_string_pretty(&optimal)?);

    Ok(())
}
