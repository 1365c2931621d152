use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PopulationError;

/// The four views offered by the dashboard dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryType {
    Total,
    Gender,
    Age,
    Ethnicity,
}

impl SummaryType {
    pub const ALL: [SummaryType; 4] = [Self::Total, Self::Gender, Self::Age, Self::Ethnicity];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::Gender => "gender",
            Self::Age => "age",
            Self::Ethnicity => "ethnicity",
        }
    }

    /// Label shown in the dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Total => "Total Population Over Time",
            Self::Gender => "Gender Breakdown",
            Self::Age => "Age Group Comparison",
            Self::Ethnicity => "Ethnicity Distribution",
        }
    }
}

impl fmt::Display for SummaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryType {
    type Err = PopulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| PopulationError::InvalidSelection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_selections_parse() {
        for t in SummaryType::ALL {
            assert_eq!(t.as_str().parse::<SummaryType>().unwrap(), t);
        }
    }

    #[test]
    fn test_unknown_selection_is_invalid() {
        let err = "pyramid".parse::<SummaryType>().unwrap_err();
        assert!(matches!(err, PopulationError::InvalidSelection(ref s) if s == "pyramid"));
    }

    #[test]
    fn test_selection_is_case_sensitive() {
        assert!("Total".parse::<SummaryType>().is_err());
    }
}
