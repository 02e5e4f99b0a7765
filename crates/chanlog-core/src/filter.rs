//! Per-sink accept policy: a per-channel minimum-severity table combined with
//! a blanket fallback threshold.
//!
//! The combination is a logical **OR**: a record passes if it clears the floor
//! configured for its channel, *or* if it clears the sink's fallback
//! threshold. The OR is load-bearing and intentionally asymmetric — a floor
//! can only loosen a stricter fallback, never tighten a looser one. A sink
//! with fallback [`Severity::Debug`] therefore accepts every record no matter
//! what the table says, while a sink with fallback [`Severity::Critical`]
//! still emits sub-critical records on channels whose floor admits them.

use crate::types::{Record, Severity};
use std::collections::HashMap;

/// Immutable accept policy for one [`Sink`](crate::Sink).
///
/// Built once with [`SeverityFilter::new`] plus [`floor`](Self::floor) calls
/// (or from a `[channels]` config table); never mutated afterwards.
#[derive(Debug, Clone)]
pub struct SeverityFilter {
    floors: HashMap<String, Severity>,
    fallback: Severity,
}

impl SeverityFilter {
    /// Policy with an empty floor table: only the fallback clause applies.
    pub fn new(fallback: Severity) -> Self {
        Self {
            floors: HashMap::new(),
            fallback,
        }
    }

    /// Set the minimum severity for one channel. Last write wins if the same
    /// channel is configured twice.
    pub fn floor(mut self, channel: impl Into<String>, floor: Severity) -> Self {
        self.floors.insert(channel.into(), floor);
        self
    }

    /// Policy from a channel→floor table, e.g. a deserialized `[channels]`
    /// config section.
    pub fn from_table(floors: &HashMap<String, Severity>, fallback: Severity) -> Self {
        Self {
            floors: floors.clone(),
            fallback,
        }
    }

    pub fn fallback(&self) -> Severity {
        self.fallback
    }

    /// Configured floor for `channel`, if any.
    pub fn channel_floor(&self, channel: &str) -> Option<Severity> {
        self.floors.get(channel).copied()
    }

    /// The accept decision. Pure and total: no side effects, no failure path.
    ///
    /// `accepts(r)` ⇔ (`r.channel` has floor F and `r.severity >= F`)
    /// ∨ (`r.severity >= fallback`). A channel absent from the table makes
    /// the first clause vacuously false.
    pub fn accepts(&self, record: &Record<'_>) -> bool {
        let clears_floor = self
            .floors
            .get(record.channel)
            .is_some_and(|floor| record.severity >= *floor);
        clears_floor || record.severity >= self.fallback
    }
}
