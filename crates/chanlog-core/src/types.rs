//! Core types for chanlog: the [`Severity`] scale and the borrowed [`Record`].

use serde::Deserialize;

/// Log severity, totally ordered `Debug < Routine < Warning < Critical`.
///
/// The derived ordering follows declaration order and is the ordering every
/// filter comparison uses. The lowercase labels are stable: they appear in
/// rendered log lines and as values in policy config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Routine,
    Warning,
    Critical,
}

impl Severity {
    /// All severities, lowest first.
    pub const ALL: [Severity; 4] = [
        Severity::Debug,
        Severity::Routine,
        Severity::Warning,
        Severity::Critical,
    ];

    /// Stable lowercase label used in the line format and in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Routine => "routine",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }

    /// Severity at ordinal position `index`, lowest first.
    pub fn from_index(index: usize) -> Option<Severity> {
        Severity::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label for an ordinal severity position. Out-of-range positions render as
/// their decimal numeral instead of failing, so a raw index taken from an
/// untrusted source still produces something printable.
pub fn label_for_index(index: usize) -> String {
    match Severity::from_index(index) {
        Some(severity) => severity.as_str().to_string(),
        None => index.to_string(),
    }
}

/// One log event, borrowed from the `log` call site.
///
/// A record is built by [`Registry::log`](crate::Registry::log), handed by
/// reference to every registered sink in turn, and dropped as soon as fan-out
/// completes. Nothing retains it; only sinks with durable backends persist
/// its *rendering*.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    /// Channel tag identifying the logical subsystem ("network", "data", …).
    /// Case-sensitive, no normalization: filtering compares exact strings.
    pub channel: &'a str,
    pub severity: Severity,
    pub message: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn ordering_is_total_and_fixed() {
        for (i, a) in Severity::ALL.iter().enumerate() {
            for (j, b) in Severity::ALL.iter().enumerate() {
                assert_eq!(a < b, i < j, "{a} vs {b}");
                assert_eq!(a == b, i == j, "{a} vs {b}");
            }
        }
    }

    #[rstest]
    #[case(Severity::Debug, "debug")]
    #[case(Severity::Routine, "routine")]
    #[case(Severity::Warning, "warning")]
    #[case(Severity::Critical, "critical")]
    fn labels_are_stable(#[case] severity: Severity, #[case] label: &str) {
        assert_eq!(severity.as_str(), label);
        assert_eq!(severity.to_string(), label);
    }

    #[test]
    fn index_round_trips_in_range() {
        for (i, severity) in Severity::ALL.iter().enumerate() {
            assert_eq!(Severity::from_index(i), Some(*severity));
            assert_eq!(label_for_index(i), severity.as_str());
        }
        assert_eq!(Severity::from_index(4), None);
    }

    #[test]
    fn out_of_range_index_renders_as_decimal() {
        assert_eq!(label_for_index(4), "4");
        assert_eq!(label_for_index(255), "255");
    }
}
