use serde::{Deserialize, Serialize};

/// Quality report for a single document dimension.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DimensionReport {
    pub score: f64,
    #[serde(default)]
    pub issues: Vec<String>,
}

impl DimensionReport {
    pub fn has_issue(&self, tag: &str) -> bool {
        self.issues.iter().any(|issue| issue.eq_ignore_ascii_case(tag))
    }
}

/// Engagement carries a dedicated readability sub-score on top of the
/// usual score/issues pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EngagementReport {
    pub score: f64,
    pub readability: f64,
    #[serde(default)]
    pub issues: Vec<String>,
}

/// Immutable quality assessment of a visual document, produced by the
/// external analysis collaborator. This crate never mutates it; field
/// completeness is the producer's responsibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAnalysis {
    pub colors: DimensionReport,
    pub typography: DimensionReport,
    pub layout: DimensionReport,
    pub engagement: EngagementReport,
    pub overall_score: f64,
    /// Current color palette, ordered hex strings.
    #[serde(default)]
    pub palette: Vec<String>,
    /// Current font families in use.
    #[serde(default)]
    pub fonts: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_issue_is_case_insensitive() {
        let report = DimensionReport {
            score: 55.0,
            issues: vec!["Poor contrast".to_string()],
        };
        assert!(report.has_issue("poor contrast"));
        assert!(!report.has_issue("Insufficient white space"));
    }

    #[test]
    fn test_analysis_deserializes_with_missing_lists() {
        let json = r#"{
            "colors": {"score": 55.0, "issues": ["Poor contrast"]},
            "typography": {"score": 90.0},
            "layout": {"score": 82.0},
            "engagement": {"score": 75.0, "readability": 80.0},
            "overallScore": 68.0
        }"#;
        let analysis: DocumentAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.colors.score, 55.0);
        assert!(analysis.palette.is_empty());
        assert!(analysis.typography.issues.is_empty());
    }
}
