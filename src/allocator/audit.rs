use super::{DutyTracker, QuotaTable, Violation, ViolationKind};
use crate::model::{Assignment, Teacher};
use std::collections::HashMap;

/// Revérifie une liste d'affectations (éventuellement retouchée à la main).
pub(super) fn audit(
    quotas: &QuotaTable,
    teachers: &[Teacher],
    assignments: &[Assignment],
) -> Vec<Violation> {
    // entrées homonymes : quotas cumulés, conflit seulement si toutes enseignent le cours
    let mut by_name: HashMap<&str, Vec<&Teacher>> = HashMap::new();
    for t in teachers {
        by_name.entry(t.name.as_str()).or_default().push(t);
    }

    let mut out = Vec::new();
    let mut daily = DutyTracker::new();

    for (idx, a) in assignments.iter().enumerate() {
        let mut push = |kind: ViolationKind, detail: String| {
            out.push(Violation {
                kind,
                sr_no: a.sr_no,
                invigilator: a.invigilator.clone(),
                detail,
            });
        };

        if a.sr_no != idx + 1 {
            push(
                ViolationKind::SerialGap,
                format!("expected Sr. No. {}, found {}", idx + 1, a.sr_no),
            );
        }

        let Some(entries) = by_name.get(a.invigilator.as_str()) else {
            push(ViolationKind::UnknownInvigilator, "not in roster".to_string());
            continue;
        };

        if entries.iter().all(|t| t.teaches(&a.course_code)) {
            push(
                ViolationKind::CourseConflict,
                format!("teaches {}", a.course_code),
            );
        }

        if daily.has_reached_daily_limit(&a.invigilator, &a.date) {
            push(
                ViolationKind::DailyLimitExceeded,
                format!("more than {} duties on {}", super::DAILY_DUTY_LIMIT, a.date),
            );
        }
        daily.increment(&a.invigilator, &a.date);

        let quota: u32 = entries.iter().map(|t| quotas.quota(t.rank)).sum();
        let total = daily.total(&a.invigilator);
        if total > quota {
            push(
                ViolationKind::QuotaExceeded,
                format!("{total} duties for quota {quota} ({})", entries[0].rank),
            );
        }
    }

    out
}
