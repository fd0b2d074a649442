#![forbid(unsafe_code)]
//! Invigilation — répartition locale des surveillances d'examens (sans BD).
//!
//! - Entrées fichiers (CSV) : personnel et calendrier d'examens.
//! - Quotas par grade, pas de surveillance d'un cours enseigné, 2 par jour max.
//! - Parcours déterministe enseignant par enseignant, sans retour arrière.
//! - Sorties : feuille CSV et JSON, écrites de manière atomique.

pub mod allocator;
pub mod io;
pub mod model;
pub mod storage;

pub use allocator::{
    AllocError, Allocation, DutyAllocator, DutyTracker, QuotaTable, TeacherLoad, Violation,
    ViolationKind, DAILY_DUTY_LIMIT,
};
pub use model::{Assignment, CourseSet, ExamSlot, Rank, Schedule, Session, Teacher, TimeLabels};
pub use storage::{JsonSink, ResultSink, SheetSink};
