use super::{DutyTracker, QuotaTable, TeacherLoad};
use crate::model::{Assignment, ExamSlot, Schedule, Session, Teacher};
use tracing::{debug, trace, warn};

/// Parcours enseignant par enseignant, puis ligne par ligne, matin avant après-midi.
///
/// Aucun retour arrière : un enseignant placé tôt dans le roster remplit son
/// quota sur les premières sessions éligibles avant que le suivant soit examiné.
pub(super) fn allocate(
    quotas: &QuotaTable,
    teachers: &[Teacher],
    schedule: &Schedule,
    tracker: &mut DutyTracker,
) -> (Vec<Assignment>, Vec<TeacherLoad>) {
    let mut assignments = Vec::new();
    let mut loads = Vec::with_capacity(teachers.len());

    for teacher in teachers {
        let quota = quotas.quota(teacher.rank);
        let mut duties_assigned = 0u32;

        for slot in &schedule.slots {
            for (idx, session) in slot.sessions.iter().enumerate() {
                if duties_assigned >= quota {
                    break;
                }
                if !eligible(teacher, slot, session, tracker) {
                    continue;
                }
                let assignment = Assignment {
                    sr_no: assignments.len() + 1,
                    day: slot.day.clone(),
                    date: slot.date.clone(),
                    course_code: session.course_code.clone(),
                    course_name: session.course_name.clone(),
                    section: slot.section.clone(),
                    venue: slot.venue.clone(),
                    time: schedule.labels.for_session(idx).to_string(),
                    invigilator: teacher.name.clone(),
                };
                trace!(
                    sr_no = assignment.sr_no,
                    invigilator = %teacher.name,
                    course = %assignment.course_code,
                    date = %assignment.date,
                    "duty assigned"
                );
                assignments.push(assignment);
                duties_assigned += 1;
                tracker.increment(&teacher.name, &slot.date);
            }
        }

        debug!(
            teacher = %teacher.name,
            rank = %teacher.rank,
            quota,
            assigned = duties_assigned,
            "teacher processed"
        );
        if duties_assigned < quota {
            warn!(
                teacher = %teacher.name,
                quota,
                assigned = duties_assigned,
                "teacher left under quota"
            );
        }
        loads.push(TeacherLoad {
            name: teacher.name.clone(),
            rank: teacher.rank,
            quota,
            assigned: duties_assigned,
        });
    }

    (assignments, loads)
}

fn eligible(teacher: &Teacher, slot: &ExamSlot, session: &Session, tracker: &DutyTracker) -> bool {
    !session.course_code.is_empty()
        && !teacher.teaches(&session.course_code)
        && !tracker.has_reached_daily_limit(&teacher.name, &slot.date)
}
