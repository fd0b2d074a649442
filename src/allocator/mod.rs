mod assignment;
mod audit;
mod tracker;
mod types;

pub use tracker::{DutyTracker, DAILY_DUTY_LIMIT};
pub use types::{AllocError, Allocation, QuotaTable, TeacherLoad, Violation, ViolationKind};

use crate::model::{Assignment, Schedule, Teacher};
use tracing::info;

/// DutyAllocator : répartit les surveillances selon une table de quotas
#[derive(Debug, Clone, Default)]
pub struct DutyAllocator {
    quotas: QuotaTable,
}

impl DutyAllocator {
    pub fn new(quotas: QuotaTable) -> Self {
        Self { quotas }
    }

    pub fn quotas(&self) -> &QuotaTable {
        &self.quotas
    }

    /// Répartit en mettant à jour un tracker fourni par l'appelant.
    pub fn allocate(
        &self,
        teachers: &[Teacher],
        schedule: &Schedule,
        tracker: &mut DutyTracker,
    ) -> Vec<Assignment> {
        assignment::allocate(&self.quotas, teachers, schedule, tracker).0
    }

    /// Répartition complète avec un tracker neuf.
    pub fn run(&self, teachers: &[Teacher], schedule: &Schedule) -> Allocation {
        let mut tracker = DutyTracker::new();
        let (assignments, loads) =
            assignment::allocate(&self.quotas, teachers, schedule, &mut tracker);
        info!(
            teachers = teachers.len(),
            slots = schedule.slots.len(),
            assignments = assignments.len(),
            "allocation complete"
        );
        Allocation {
            assignments,
            loads,
            tracker,
        }
    }

    pub fn audit(&self, teachers: &[Teacher], assignments: &[Assignment]) -> Vec<Violation> {
        audit::audit(&self.quotas, teachers, assignments)
    }
}
