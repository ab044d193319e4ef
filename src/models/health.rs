//! Health status and severity roll-up
//!
//! Statuses form a total order from most to least severe:
//! `Missing(1) < Degraded(2) < Progressing(3) < Healthy(4)`.
//! `Unknown` is the empty status: it has no rank and never overrides a ranked one.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Health of a single resource, or of a group after roll-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum HealthStatus {
    Missing,
    Degraded,
    Progressing,
    Healthy,
    /// No status reported (serialized as `""`)
    #[default]
    Unknown,
}

impl HealthStatus {
    /// Serialized form; `Unknown` is the empty string
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Missing => "missing",
            HealthStatus::Degraded => "degraded",
            HealthStatus::Progressing => "progressing",
            HealthStatus::Healthy => "healthy",
            HealthStatus::Unknown => "",
        }
    }

    /// Severity rank, lower is more severe. `Unknown` has none.
    pub fn rank(&self) -> Option<u8> {
        match self {
            HealthStatus::Missing => Some(1),
            HealthStatus::Degraded => Some(2),
            HealthStatus::Progressing => Some(3),
            HealthStatus::Healthy => Some(4),
            HealthStatus::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, HealthStatus::Unknown)
    }

    /// Parse a status string case-insensitively.
    ///
    /// Anything outside the ranked set (`Suspended`, `Unknown`, empty) maps to
    /// `HealthStatus::Unknown` so it can never win a roll-up.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "missing" => HealthStatus::Missing,
            "degraded" => HealthStatus::Degraded,
            "progressing" => HealthStatus::Progressing,
            "healthy" => HealthStatus::Healthy,
            _ => HealthStatus::Unknown,
        }
    }

    /// Combine two statuses into the more severe one
    pub fn combine(self, other: HealthStatus) -> HealthStatus {
        combine(self, other)
    }
}

/// Roll two statuses up into one.
///
/// Both unknown gives unknown; one unknown gives the other; otherwise the
/// lower rank (more severe) wins.
pub fn combine(a: HealthStatus, b: HealthStatus) -> HealthStatus {
    match (a.rank(), b.rank()) {
        (None, None) => HealthStatus::Unknown,
        (None, Some(_)) => b,
        (Some(_), None) => a,
        (Some(ra), Some(rb)) => {
            if ra <= rb {
                a
            } else {
                b
            }
        }
    }
}

/// Fold any number of statuses with `combine`, starting from `Unknown`
pub fn fold_statuses<I>(statuses: I) -> HealthStatus
where
    I: IntoIterator<Item = HealthStatus>,
{
    statuses.into_iter().fold(HealthStatus::Unknown, combine)
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for HealthStatus {
    fn from(s: &str) -> Self {
        HealthStatus::parse_lenient(s)
    }
}

impl Serialize for HealthStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HealthStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .as_deref()
            .map(HealthStatus::parse_lenient)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use HealthStatus::*;

    const ALL: [HealthStatus; 5] = [Missing, Degraded, Progressing, Healthy, Unknown];

    #[test]
    fn test_combine_picks_more_severe() {
        assert_eq!(combine(Healthy, Degraded), Degraded);
        assert_eq!(combine(Progressing, Healthy), Progressing);
        assert_eq!(combine(Degraded, Missing), Missing);
    }

    #[test]
    fn test_combine_unknown_never_overrides() {
        assert_eq!(combine(Unknown, Unknown), Unknown);
        for status in ALL {
            assert_eq!(combine(status, Unknown), status);
            assert_eq!(combine(Unknown, status), status);
        }
    }

    #[test]
    fn test_combine_is_idempotent() {
        for status in ALL {
            assert_eq!(combine(status, status), status);
        }
    }

    #[test]
    fn test_fold_statuses() {
        assert_eq!(fold_statuses([]), Unknown);
        assert_eq!(fold_statuses([Healthy, Healthy, Degraded]), Degraded);
        assert_eq!(fold_statuses([Unknown, Progressing]), Progressing);
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(HealthStatus::parse_lenient("Healthy"), Healthy);
        assert_eq!(HealthStatus::parse_lenient("DEGRADED"), Degraded);
        assert_eq!(HealthStatus::parse_lenient("Suspended"), Unknown);
        assert_eq!(HealthStatus::parse_lenient(""), Unknown);
    }

    #[test]
    fn test_serde_uses_lowercase_and_empty_string() {
        assert_eq!(serde_json::to_string(&Degraded).unwrap(), "\"degraded\"");
        assert_eq!(serde_json::to_string(&Unknown).unwrap(), "\"\"");
        let parsed: HealthStatus = serde_json::from_str("\"Progressing\"").unwrap();
        assert_eq!(parsed, Progressing);
        let parsed: HealthStatus = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, Unknown);
    }
}
