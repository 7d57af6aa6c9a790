use crate::model::{Course, Deadline, EducationPlan};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Standard associate-degree-for-transfer unit requirement.
pub const TARGET_UNITS: f64 = 60.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub completed_units: f64,
    pub target_units: f64,
    /// Rounded to the nearest integer; deliberately not clamped at 100.
    pub completion_percentage: i64,
    pub total_courses: usize,
    pub completed_courses: usize,
    pub active_plans: usize,
    pub upcoming_deadlines: usize,
}

/// Pure function over a store snapshot; `now` is supplied by the caller so
/// the upcoming-deadline cutoff is deterministic under test.
pub fn compute_dashboard_stats(
    courses: &[Course],
    plans: &[EducationPlan],
    deadlines: &[Deadline],
    now: DateTime<Utc>,
) -> DashboardStats {
    let completed: Vec<&Course> = courses.iter().filter(|c| c.is_completed).collect();
    let completed_units: f64 = completed.iter().map(|c| c.units).sum();

    DashboardStats {
        completed_units,
        target_units: TARGET_UNITS,
        completion_percentage: (completed_units / TARGET_UNITS * 100.0).round() as i64,
        total_courses: courses.len(),
        completed_courses: completed.len(),
        active_plans: plans.iter().filter(|p| p.is_active).count(),
        upcoming_deadlines: deadlines
            .iter()
            .filter(|d| !d.is_completed && d.due_date > now)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewCourse, NewDeadline, NewEducationPlan, Priority};
    use chrono::Duration;

    fn course(units: f64, completed: bool) -> Course {
        NewCourse {
            course_code: "MATH 300".to_string(),
            title: "College Algebra".to_string(),
            units,
            description: None,
            institution_id: None,
            category: None,
            subcategory: None,
            prerequisites: Vec::new(),
            is_completed: completed,
            grade: None,
            semester_taken: None,
            year_taken: None,
            transfers_to: None,
        }
        .into_course("u".to_string())
    }

    fn deadline(due: DateTime<Utc>, completed: bool) -> Deadline {
        NewDeadline {
            title: "UC application".to_string(),
            description: None,
            due_date: due,
            deadline_type: "APPLICATION".to_string(),
            priority: Priority::High,
            is_completed: completed,
        }
        .into_deadline("u".to_string())
    }

    #[test]
    fn zero_completed_courses_is_zero_percent() {
        let courses = vec![course(4.0, false), course(3.0, false)];
        let stats = compute_dashboard_stats(&courses, &[], &[], Utc::now());
        assert_eq!(stats.completed_units, 0.0);
        assert_eq!(stats.completion_percentage, 0);
        assert_eq!(stats.total_courses, 2);
        assert_eq!(stats.completed_courses, 0);
    }

    #[test]
    fn percentage_is_not_clamped_at_one_hundred() {
        let courses: Vec<Course> = (0..14).map(|_| course(5.0, true)).collect();
        let stats = compute_dashboard_stats(&courses, &[], &[], Utc::now());
        assert_eq!(stats.completed_units, 70.0);
        assert_eq!(stats.completion_percentage, 117);
    }

    #[test]
    fn percentage_rounds_to_nearest_integer() {
        // 20 of 60 units -> 33.33...% -> 33
        let courses = vec![course(20.0, true)];
        let stats = compute_dashboard_stats(&courses, &[], &[], Utc::now());
        assert_eq!(stats.completion_percentage, 33);
    }

    #[test]
    fn upcoming_deadlines_exclude_completed_and_past() {
        let now = Utc::now();
        let deadlines = vec![
            deadline(now + Duration::days(7), false),
            deadline(now + Duration::days(7), true),
            deadline(now - Duration::days(1), false),
        ];
        let stats = compute_dashboard_stats(&[], &[], &deadlines, now);
        assert_eq!(stats.upcoming_deadlines, 1);
    }

    #[test]
    fn active_plans_counted() {
        let plans = vec![
            NewEducationPlan {
                name: "UC Davis CS".to_string(),
                target_institution: None,
                target_major: None,
                target_transfer_date: None,
                is_active: true,
            }
            .into_plan("u".to_string()),
            NewEducationPlan {
                name: "Backup".to_string(),
                target_institution: None,
                target_major: None,
                target_transfer_date: None,
                is_active: false,
            }
            .into_plan("u".to_string()),
        ];
        let stats = compute_dashboard_stats(&[], &plans, &[], Utc::now());
        assert_eq!(stats.active_plans, 1);
    }
}
