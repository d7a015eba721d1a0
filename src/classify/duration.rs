use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Word count at which instructions stop being `quick`
const MEDIUM_THRESHOLD: usize = 100;
/// Word count at which instructions become `long`
const LONG_THRESHOLD: usize = 300;

/// Coarse cook-time estimate derived from the length of the instructions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationBucket {
    Quick,
    Medium,
    Long,
    Unknown,
}

impl DurationBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationBucket::Quick => "quick",
            DurationBucket::Medium => "medium",
            DurationBucket::Long => "long",
            DurationBucket::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DurationBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quick" => Ok(DurationBucket::Quick),
            "medium" => Ok(DurationBucket::Medium),
            "long" => Ok(DurationBucket::Long),
            "unknown" => Ok(DurationBucket::Unknown),
            other => Err(format!(
                "unknown duration '{}', expected quick, medium, long or unknown",
                other
            )),
        }
    }
}

/// Estimate how long a recipe takes from its instruction text.
///
/// Counts whitespace-separated words; missing text is treated as empty.
pub fn classify_duration(instructions: Option<&str>) -> DurationBucket {
    let words = instructions
        .map(|text| text.split_whitespace().count())
        .unwrap_or(0);

    match words {
        0 => DurationBucket::Unknown,
        n if n < MEDIUM_THRESHOLD => DurationBucket::Quick,
        n if n < LONG_THRESHOLD => DurationBucket::Medium,
        _ => DurationBucket::Long,
    }
}
