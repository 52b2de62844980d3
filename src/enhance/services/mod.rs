mod background_enhancer;
mod color_enhancer;
mod decorative_enhancer;
mod enhancer;
mod layout_enhancer;
pub mod scoring;
mod typography_enhancer;

pub use background_enhancer::BackgroundEnhancer;
pub use color_enhancer::ColorEnhancer;
pub use decorative_enhancer::DecorativeEnhancer;
pub use enhancer::Enhancer;
pub use layout_enhancer::LayoutEnhancer;
pub use typography_enhancer::TypographyEnhancer;
