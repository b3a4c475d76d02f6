use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workout category offered by the filter bar.
///
/// The wire value is what lands in the `workoutCategory` query parameter;
/// the label is what the select widget shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutCategory {
    #[default]
    All,
    Lower,
    Upper,
}

impl WorkoutCategory {
    /// Every category, in the order the select widget lists them.
    pub const ALL: [WorkoutCategory; 3] = [
        WorkoutCategory::All,
        WorkoutCategory::Lower,
        WorkoutCategory::Upper,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCategory::All => "all",
            WorkoutCategory::Lower => "lower",
            WorkoutCategory::Upper => "upper",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutCategory::All => "Todos",
            WorkoutCategory::Lower => "Treino Inferior",
            WorkoutCategory::Upper => "Treino Superior",
        }
    }
}

impl fmt::Display for WorkoutCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(WorkoutCategory::All),
            "lower" => Ok(WorkoutCategory::Lower),
            "upper" => Ok(WorkoutCategory::Upper),
            other => Err(anyhow::anyhow!("unknown workout category: {other:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WorkoutCategory;

    #[test]
    fn test_wire_values_parse_back() {
        for category in WorkoutCategory::ALL {
            let parsed: WorkoutCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Lower".parse::<WorkoutCategory>().is_err());
        assert!("".parse::<WorkoutCategory>().is_err());
    }

    #[test]
    fn test_labels_are_portuguese() {
        assert_eq!(WorkoutCategory::All.label(), "Todos");
        assert_eq!(WorkoutCategory::Lower.label(), "Treino Inferior");
        assert_eq!(WorkoutCategory::Upper.label(), "Treino Superior");
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(WorkoutCategory::default(), WorkoutCategory::All);
        assert_eq!(WorkoutCategory::default().to_string(), "all");
    }
}
