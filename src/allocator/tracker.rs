use std::collections::HashMap;

/// Nombre maximal de surveillances d'un enseignant sur une même date.
pub const DAILY_DUTY_LIMIT: u32 = 2;

/// Compteurs enseignant -> date -> surveillances.
///
/// Une entrée absente vaut 0 ; la lecture ne crée jamais d'entrée.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DutyTracker {
    counts: HashMap<String, HashMap<String, u32>>,
}

impl DutyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, teacher: &str, date: &str) -> u32 {
        self.counts
            .get(teacher)
            .and_then(|by_date| by_date.get(date))
            .copied()
            .unwrap_or(0)
    }

    /// Total toutes dates confondues.
    pub fn total(&self, teacher: &str) -> u32 {
        self.counts
            .get(teacher)
            .map(|by_date| by_date.values().sum())
            .unwrap_or(0)
    }

    pub fn has_reached_daily_limit(&self, teacher: &str, date: &str) -> bool {
        self.count(teacher, date) >= DAILY_DUTY_LIMIT
    }

    pub fn increment(&mut self, teacher: &str, date: &str) {
        *self
            .counts
            .entry(teacher.to_owned())
            .or_default()
            .entry(date.to_owned())
            .or_insert(0) += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
