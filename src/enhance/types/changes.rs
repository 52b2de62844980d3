use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The category of visual property a strategy modifies. Conflict
/// resolution groups strategies by this key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ChangeDomain {
    Colors,
    Typography,
    Layout,
    Background,
    DecorativeElements,
}

impl ChangeDomain {
    pub const ALL: [ChangeDomain; 5] = [
        ChangeDomain::Colors,
        ChangeDomain::Typography,
        ChangeDomain::Layout,
        ChangeDomain::Background,
        ChangeDomain::DecorativeElements,
    ];

    /// Layout and typography restructure content; the preserve-content
    /// preference filters on this.
    pub fn restructures_content(self) -> bool {
        matches!(self, ChangeDomain::Layout | ChangeDomain::Typography)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ColorAdjustments {
    pub contrast: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl Default for ColorAdjustments {
    fn default() -> Self {
        Self {
            contrast: 1.0,
            saturation: 1.0,
            brightness: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ColorChanges {
    /// Proposed palette, ordered hex strings.
    pub palette: Vec<String>,
    pub adjustments: ColorAdjustments,
    /// Ordered old-hex to new-hex replacement map.
    pub replacements: IndexMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TypographyChanges {
    pub heading_font: String,
    pub body_font: String,
    pub base_size: f64,
    pub scale_ratio: f64,
    /// Sizes for heading levels 1 through 6, largest first.
    pub heading_sizes: Vec<f64>,
    pub line_height: f64,
    pub letter_spacing: f64,
    pub paragraph_spacing: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Justify,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridSpec {
    pub preset: String,
    pub columns: u32,
    pub gutter: f64,
    pub margin: f64,
    pub rows: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutChanges {
    pub grid: GridSpec,
    pub alignment: Alignment,
    pub section_spacing: f64,
    /// Ordered content-role to emphasis-weight map.
    pub emphasis: IndexMap<String, f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    Solid,
    Gradient,
    Pattern,
    Image,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundChanges {
    pub kind: BackgroundKind,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DecorativeElement {
    pub shape: String,
    pub position: String,
    pub size: f64,
    pub opacity: f64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DecorativeChanges {
    pub elements: Vec<DecorativeElement>,
}

/// Closed set of per-domain change payloads. One slot per change domain
/// keeps conflict grouping and merging exhaustive; a strategy normally
/// fills exactly one slot. Empty slots are skipped during serialization,
/// so the JSON shape is a map keyed by change domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorChanges>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<TypographyChanges>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutChanges>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundChanges>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decorative_elements: Option<DecorativeChanges>,
}

impl ChangeSet {
    pub fn colors(changes: ColorChanges) -> Self {
        Self {
            colors: Some(changes),
            ..Self::default()
        }
    }

    pub fn typography(changes: TypographyChanges) -> Self {
        Self {
            typography: Some(changes),
            ..Self::default()
        }
    }

    pub fn layout(changes: LayoutChanges) -> Self {
        Self {
            layout: Some(changes),
            ..Self::default()
        }
    }

    pub fn background(changes: BackgroundChanges) -> Self {
        Self {
            background: Some(changes),
            ..Self::default()
        }
    }

    pub fn decorative(changes: DecorativeChanges) -> Self {
        Self {
            decorative_elements: Some(changes),
            ..Self::default()
        }
    }

    pub fn contains(&self, domain: ChangeDomain) -> bool {
        match domain {
            ChangeDomain::Colors => self.colors.is_some(),
            ChangeDomain::Typography => self.typography.is_some(),
            ChangeDomain::Layout => self.layout.is_some(),
            ChangeDomain::Background => self.background.is_some(),
            ChangeDomain::DecorativeElements => self.decorative_elements.is_some(),
        }
    }

    pub fn clear(&mut self, domain: ChangeDomain) {
        match domain {
            ChangeDomain::Colors => self.colors = None,
            ChangeDomain::Typography => self.typography = None,
            ChangeDomain::Layout => self.layout = None,
            ChangeDomain::Background => self.background = None,
            ChangeDomain::DecorativeElements => self.decorative_elements = None,
        }
    }

    /// Domains present in this change set, in canonical order.
    pub fn domains(&self) -> Vec<ChangeDomain> {
        ChangeDomain::ALL
            .iter()
            .copied()
            .filter(|domain| self.contains(*domain))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        ChangeDomain::ALL.iter().all(|domain| !self.contains(*domain))
    }

    pub fn restructures_content(&self) -> bool {
        self.domains()
            .iter()
            .any(|domain| domain.restructures_content())
    }

    /// Copy payloads from `other` into slots this set has not filled yet.
    /// Merging contributors in descending impact order makes the stronger
    /// contributor win any collision.
    pub fn merge_missing(&mut self, other: &ChangeSet) {
        if self.colors.is_none() {
            self.colors.clone_from(&other.colors);
        }
        if self.typography.is_none() {
            self.typography.clone_from(&other.typography);
        }
        if self.layout.is_none() {
            self.layout.clone_from(&other.layout);
        }
        if self.background.is_none() {
            self.background.clone_from(&other.background);
        }
        if self.decorative_elements.is_none() {
            self.decorative_elements.clone_from(&other.decorative_elements);
        }
    }
}
