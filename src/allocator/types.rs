use super::DutyTracker;
use crate::model::{Assignment, Rank};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Quotas par défaut, dans l'ordre de `Rank::ALL`.
const DEFAULT_QUOTAS: [(Rank, u32); 5] = [
    (Rank::Professor, 2),
    (Rank::ProfessorHod, 2),
    (Rank::AssociateProfessor, 3),
    (Rank::AssistantProfessor, 4),
    (Rank::Others, 5),
];

/// Nombre maximal de surveillances par grade, sur toute la session d'examens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotaTable {
    quotas: BTreeMap<Rank, u32>,
}

impl Default for QuotaTable {
    fn default() -> Self {
        Self {
            quotas: DEFAULT_QUOTAS.into_iter().collect(),
        }
    }
}

impl QuotaTable {
    /// Quota du grade ; un grade absent de la table prend le quota `Others`.
    pub fn quota(&self, rank: Rank) -> u32 {
        self.quotas
            .get(&rank)
            .or_else(|| self.quotas.get(&Rank::Others))
            .copied()
            .unwrap_or(0)
    }

    pub fn set(&mut self, rank: Rank, quota: u32) {
        self.quotas.insert(rank, quota);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Rank, u32)> + '_ {
        self.quotas.iter().map(|(r, q)| (*r, *q))
    }

    /// Applique des surcharges `intitulé -> quota` sur les valeurs par défaut.
    ///
    /// Contrairement au roster, un intitulé inconnu est ici une erreur.
    pub fn with_overrides(overrides: &HashMap<String, u32>) -> Result<Self, AllocError> {
        let mut table = Self::default();
        for (title, quota) in overrides {
            let rank = Rank::from_known_title(title)
                .ok_or_else(|| AllocError::UnknownRank(title.clone()))?;
            table.set(rank, *quota);
        }
        Ok(table)
    }

    /// Objet JSON `{"Professor": 2, "Others": 5, ...}`.
    pub fn from_json_str(raw: &str) -> Result<Self, AllocError> {
        let overrides: HashMap<String, u32> =
            serde_json::from_str(raw).map_err(|e| AllocError::InvalidQuotaFile(e.to_string()))?;
        Self::with_overrides(&overrides)
    }
}

/// Charge d'un enseignant à l'issue de la répartition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherLoad {
    pub name: String,
    pub rank: Rank,
    pub quota: u32,
    pub assigned: u32,
}

impl TeacherLoad {
    pub fn is_full(&self) -> bool {
        self.assigned >= self.quota
    }
}

/// Résultat complet d'une répartition.
#[derive(Debug, Clone, Default)]
pub struct Allocation {
    pub assignments: Vec<Assignment>,
    pub loads: Vec<TeacherLoad>,
    pub tracker: DutyTracker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    CourseConflict,     // surveille un cours qu'il enseigne
    DailyLimitExceeded, // plus de 2 surveillances le même jour
    QuotaExceeded,      // dépasse le quota du grade
    SerialGap,          // numérotation Sr. No. non contiguë
    UnknownInvigilator, // absent du roster
}

impl ViolationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ViolationKind::CourseConflict => "course_conflict",
            ViolationKind::DailyLimitExceeded => "daily_limit",
            ViolationKind::QuotaExceeded => "quota",
            ViolationKind::SerialGap => "serial_gap",
            ViolationKind::UnknownInvigilator => "unknown_invigilator",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub kind: ViolationKind,
    pub sr_no: usize,
    pub invigilator: String,
    pub detail: String,
}

#[derive(Error, Debug)]
pub enum AllocError {
    #[error("unknown rank in quota table: {0}")]
    UnknownRank(String),
    #[error("invalid quota file: {0}")]
    InvalidQuotaFile(String),
}
