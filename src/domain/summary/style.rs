//! Summary style selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Presentation style requested for the generated summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStyle {
    /// Flowing prose.
    #[default]
    Narrative,
    /// Terse bullet points.
    Bullet,
    /// Business-report tone.
    Professional,
    /// Personal, takeaway-oriented tone.
    Reflective,
}

impl SummaryStyle {
    /// All selectable styles, in display order.
    pub const ALL: [SummaryStyle; 4] = [
        SummaryStyle::Narrative,
        SummaryStyle::Bullet,
        SummaryStyle::Professional,
        SummaryStyle::Reflective,
    ];

    /// Human-readable name, as it appears in the prompt.
    pub fn display_name(&self) -> &'static str {
        match self {
            SummaryStyle::Narrative => "Narrative",
            SummaryStyle::Bullet => "Bullet",
            SummaryStyle::Professional => "Professional",
            SummaryStyle::Reflective => "Reflective",
        }
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for SummaryStyle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "narrative" => Ok(SummaryStyle::Narrative),
            "bullet" => Ok(SummaryStyle::Bullet),
            "professional" => Ok(SummaryStyle::Professional),
            "reflective" => Ok(SummaryStyle::Reflective),
            other => Err(ValidationError::invalid_format(
                "style",
                format!("unknown style '{other}'"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&SummaryStyle::Professional).unwrap();
        assert_eq!(json, "\"professional\"");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(
            " Reflective ".parse::<SummaryStyle>().unwrap(),
            SummaryStyle::Reflective
        );
    }

    #[test]
    fn rejects_unknown_styles() {
        assert!("poetic".parse::<SummaryStyle>().is_err());
    }

    #[test]
    fn default_is_narrative() {
        assert_eq!(SummaryStyle::default(), SummaryStyle::Narrative);
    }
}
