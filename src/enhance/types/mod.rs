mod analysis;
mod changes;
mod preferences;
mod strategy;

pub use analysis::{DimensionReport, DocumentAnalysis, EngagementReport};
pub use changes::{
    Alignment, BackgroundChanges, BackgroundKind, ChangeDomain, ChangeSet, ColorAdjustments,
    ColorChanges, DecorativeChanges, DecorativeElement, GridSpec, LayoutChanges,
    TypographyChanges,
};
pub use preferences::{ColorScheme, EnhancementPreferences, Style};
pub use strategy::{EnhancementStrategy, Priority};
