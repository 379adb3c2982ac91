//! FilterSpec construction and per-event decisions.

use std::collections::BTreeSet;

use super::condition::{Condition, RawCondition};
use crate::domain::error::GateError;
use crate::domain::types::{Decision, Event};

/// Raw selector value that enables keeping conditions on absent properties.
/// The comparison is case-sensitive; anything else means "drop".
const KEEP_UNDEFINED_AFFIRMATIVE: &str = "Yes";

/// The validated, immutable rule set: ordered conditions, the drop-by-name
/// set, and the missing-property policy.
///
/// Built once at configuration load and read-only afterwards, so it can be
/// shared freely across per-event evaluations.
#[derive(Debug, Clone)]
pub struct FilterSpec {
    conditions: Vec<Condition>,
    events_to_drop: BTreeSet<String>,
    keep_undefined_properties: bool,
}

impl FilterSpec {
    /// Build a FilterSpec from raw configuration inputs.
    ///
    /// `raw_conditions` is the contents of the filter definitions file (JSON
    /// array of condition records), or `None` when no file is configured.
    /// `raw_drop_list` is a comma-delimited list of event names.
    /// `raw_keep_undefined` keeps conditions on absent properties satisfied
    /// when it is exactly `"Yes"`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the condition source does not decode
    /// as a sequence of condition records, or when any condition fails
    /// validation. On failure no partial FilterSpec is produced.
    pub fn build(
        raw_conditions: Option<&str>,
        raw_drop_list: Option<&str>,
        raw_keep_undefined: Option<&str>,
    ) -> Result<Self, GateError> {
        let conditions = match raw_conditions {
            Some(src) => {
                let raw: Vec<RawCondition> = serde_json::from_str(src).map_err(|e| {
                    GateError::Config(format!("could not parse filter conditions: {e}"))
                })?;
                raw.into_iter()
                    .map(Condition::validate)
                    .collect::<Result<Vec<_>, _>>()?
            }
            None => Vec::new(),
        };

        let events_to_drop = raw_drop_list
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let keep_undefined_properties = raw_keep_undefined == Some(KEEP_UNDEFINED_AFFIRMATIVE);

        Ok(Self {
            conditions,
            events_to_drop,
            keep_undefined_properties,
        })
    }

    /// Decide whether an event should be kept or dropped.
    ///
    /// Evaluation order matters and is observable: events with no properties
    /// object at all are kept before the drop-by-name set is consulted, and
    /// the drop-by-name set is consulted before any condition runs.
    pub fn decide(&self, event: &Event) -> Decision {
        // Property-less events pass through; there is nothing to filter
        // against. Note this exempts them from name-based dropping too.
        let Some(properties) = event.properties.as_ref() else {
            return Decision::Keep;
        };

        if self.events_to_drop.contains(&event.event) {
            return Decision::Drop;
        }

        // Logical AND over all conditions; an empty set keeps the event.
        let keep = self.conditions.iter().all(|cond| {
            match properties.get(&cond.property) {
                None => self.keep_undefined_properties,
                Some(observed) => cond.is_satisfied_by(observed),
            }
        });

        if keep {
            Decision::Keep
        } else {
            Decision::Drop
        }
    }

    /// Pass-through entry point: returns the event unchanged when kept, `None`
    /// when suppressed.
    pub fn filter_event<'a>(&self, event: &'a Event) -> Option<&'a Event> {
        match self.decide(event) {
            Decision::Keep => Some(event),
            Decision::Drop => None,
        }
    }

    /// Number of validated conditions.
    pub fn condition_count(&self) -> usize {
        self.conditions.len()
    }

    /// Number of event names in the drop-by-name set.
    pub fn drop_name_count(&self) -> usize {
        self.events_to_drop.len()
    }
}
