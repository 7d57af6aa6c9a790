use crate::model::Course;
use serde::Serialize;

/// One course together with its resolved prerequisites.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrerequisiteEntry {
    pub course: Course,
    /// Prerequisite codes resolved against the same course list; codes that
    /// match no course are dropped silently.
    pub prerequisites: Vec<Course>,
    /// True when every resolved prerequisite is completed.
    pub ready: bool,
    /// Resolved prerequisites not yet completed.
    pub remaining: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrerequisiteSummary {
    pub courses_with_prerequisites: usize,
    pub prerequisites_met: usize,
    pub prerequisites_pending: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrerequisiteChain {
    pub entries: Vec<PrerequisiteEntry>,
    pub summary: PrerequisiteSummary,
}

/// Resolve each course's prerequisite codes against the full course list by
/// exact string match. Flat one-level lookup, not a transitive traversal, so
/// no cycle handling is needed. Courses with no resolved prerequisite are
/// omitted from the chain entirely.
pub fn build_prerequisite_chain(courses: &[Course]) -> PrerequisiteChain {
    let entries: Vec<PrerequisiteEntry> = courses
        .iter()
        .filter(|course| !course.prerequisites.is_empty())
        .filter_map(|course| {
            let resolved: Vec<Course> = course
                .prerequisites
                .iter()
                .filter_map(|code| courses.iter().find(|c| &c.course_code == code))
                .cloned()
                .collect();

            if resolved.is_empty() {
                return None;
            }

            let remaining = resolved.iter().filter(|p| !p.is_completed).count();
            Some(PrerequisiteEntry {
                course: course.clone(),
                ready: remaining == 0,
                remaining,
                prerequisites: resolved,
            })
        })
        .collect();

    let met = entries.iter().filter(|e| e.ready).count();
    let summary = PrerequisiteSummary {
        courses_with_prerequisites: entries.len(),
        prerequisites_met: met,
        prerequisites_pending: entries.len() - met,
    };

    PrerequisiteChain { entries, summary }
}
