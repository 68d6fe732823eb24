//! Transition history tracking.
//!
//! Records which action moved the calculator between phases and what the
//! display showed afterwards. `record` returns a new history with the entry
//! appended; `push` appends in place for owners that keep a single history.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single dispatched action.
///
/// # Example
///
/// ```rust
/// use keypad::core::{Phase, TransitionRecord};
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: Phase::Entering,
///     to: Phase::OperatorPending,
///     action: "+".to_string(),
///     display: "12".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert!(record.changed_phase());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State> {
    /// Phase before the action
    pub from: S,
    /// Phase after the action
    pub to: S,
    /// Action token, e.g. `7`, `+`, `equals`
    pub action: String,
    /// Display text after the action
    pub display: String,
    /// When the action was dispatched
    pub timestamp: DateTime<Utc>,
}

impl<S: State> TransitionRecord<S> {
    pub fn changed_phase(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered, optionally bounded history of dispatched actions.
///
/// A capacity of zero means unbounded. When bounded, recording beyond the
/// capacity drops the oldest entries, so appending is O(1).
///
/// # Example
///
/// ```rust
/// use keypad::core::{Phase, TransitionHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let record = |from, to, action: &str| TransitionRecord {
///     from,
///     to,
///     action: action.to_string(),
///     display: "0".to_string(),
///     timestamp: Utc::now(),
/// };
///
/// let history = TransitionHistory::new()
///     .record(record(Phase::Entering, Phase::OperatorPending, "/"))
///     .record(record(Phase::OperatorPending, Phase::Error, "equals"));
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Phase::Entering, &Phase::OperatorPending, &Phase::Error]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionHistory<S: State> {
    transitions: VecDeque<TransitionRecord<S>>,
    capacity: usize,
}

impl<S: State> Default for TransitionHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> TransitionHistory<S> {
    /// Create a new, unbounded, empty history.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty history that keeps at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            transitions: VecDeque::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched. This copies every retained
    /// record; owners that only keep the latest history should use
    /// [`push`](Self::push).
    pub fn record(&self, transition: TransitionRecord<S>) -> Self {
        let mut next = self.clone();
        next.push(transition);
        next
    }

    /// Append a transition in place, dropping the oldest record when full.
    pub fn push(&mut self, transition: TransitionRecord<S>) {
        if self.capacity > 0 && self.transitions.len() == self.capacity {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Phases traversed: the `from` of the oldest retained record, then
    /// the `to` of every record in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last retained records.
    ///
    /// Returns `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Actions dispatched, oldest first.
    pub fn actions(&self) -> Vec<&str> {
        self.transitions.iter().map(|t| t.action.as_str()).collect()
    }

    pub fn transitions(&self) -> &VecDeque<TransitionRecord<S>> {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;

    fn record(from: Phase, to: Phase, action: &str) -> TransitionRecord<Phase> {
        TransitionRecord {
            from,
            to,
            action: action.to_string(),
            display: "0".to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: TransitionHistory<Phase> = TransitionHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert_eq!(history.capacity(), 0);
    }

    #[test]
    fn record_is_immutable() {
        let history = TransitionHistory::new();
        let new_history = history.record(record(Phase::Entering, Phase::Entering, "1"));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_returns_phase_sequence() {
        let history = TransitionHistory::new()
            .record(record(Phase::Entering, Phase::OperatorPending, "+"))
            .record(record(Phase::OperatorPending, Phase::Entering, "equals"));

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &Phase::Entering);
        assert_eq!(path[1], &Phase::OperatorPending);
        assert_eq!(path[2], &Phase::Entering);
    }

    #[test]
    fn capacity_drops_oldest() {
        let history = TransitionHistory::with_capacity(2)
            .record(record(Phase::Entering, Phase::Entering, "1"))
            .record(record(Phase::Entering, Phase::Entering, "2"))
            .record(record(Phase::Entering, Phase::OperatorPending, "+"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.actions(), vec!["2", "+"]);
    }

    #[test]
    fn push_appends_in_place_and_respects_capacity() {
        let mut history = TransitionHistory::with_capacity(3);
        for action in ["1", "2", "3", "4", "5"] {
            history.push(record(Phase::Entering, Phase::Entering, action));
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.actions(), vec!["3", "4", "5"]);
    }

    #[test]
    fn push_and_record_agree() {
        let mut pushed = TransitionHistory::with_capacity(2);
        let mut recorded = TransitionHistory::with_capacity(2);
        for action in ["+", "7", "equals"] {
            pushed.push(record(Phase::Entering, Phase::OperatorPending, action));
            recorded = recorded.record(record(Phase::Entering, Phase::OperatorPending, action));
        }

        assert_eq!(pushed.actions(), recorded.actions());
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let mut first = record(Phase::Entering, Phase::OperatorPending, "+");
        first.timestamp = start;
        let mut second = record(Phase::OperatorPending, Phase::Entering, "equals");
        second.timestamp = start + chrono::Duration::milliseconds(25);

        let history = TransitionHistory::new().record(first).record(second);

        assert_eq!(history.duration(), Some(Duration::from_millis(25)));
    }

    #[test]
    fn changed_phase_compares_endpoints() {
        assert!(record(Phase::Entering, Phase::Error, "equals").changed_phase());
        assert!(!record(Phase::Entering, Phase::Entering, "4").changed_phase());
    }

    #[test]
    fn history_serializes_correctly() {
        let history = TransitionHistory::with_capacity(8)
            .record(record(Phase::OperatorPending, Phase::Error, "equals"));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: TransitionHistory<Phase> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.capacity(), 8);
        assert_eq!(deserialized.transitions()[0].to, Phase::Error);
    }
}
