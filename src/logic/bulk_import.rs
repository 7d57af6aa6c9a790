use crate::model::NewCourse;
use serde::{Deserialize, Serialize};

const DEFAULT_UNITS: f64 = 3.0;

/// A parsed course awaiting operator review; nothing is persisted until the
/// confirm step posts the drafts back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    pub course_code: String,
    pub title: String,
    pub units: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    /// Comma-separated prerequisite codes as typed, split on confirm.
    #[serde(default)]
    pub prerequisites: String,
}

impl CourseDraft {
    fn new(course_code: String, title: String, units: f64, prerequisites: String) -> Self {
        let subcategory = course_code
            .split(' ')
            .next()
            .unwrap_or_default()
            .to_string();
        Self {
            course_code,
            title,
            units,
            description: String::new(),
            category: "MAJOR_PREP".to_string(),
            subcategory,
            prerequisites,
        }
    }

    pub fn into_new_course(self) -> NewCourse {
        NewCourse {
            course_code: self.course_code,
            title: self.title,
            units: self.units,
            description: (!self.description.is_empty()).then_some(self.description),
            institution_id: None,
            category: (!self.category.is_empty()).then_some(self.category),
            subcategory: (!self.subcategory.is_empty()).then_some(self.subcategory),
            prerequisites: self
                .prerequisites
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect(),
            is_completed: false,
            grade: None,
            semester_taken: None,
            year_taken: None,
            transfers_to: None,
        }
    }
}

/// One recognized line format. `applies` decides whether a line belongs to
/// this format; once a format claims a line, a parse failure skips the line
/// rather than falling through to the next matcher.
struct FormatMatcher {
    name: &'static str,
    applies: fn(&str) -> bool,
    parse: fn(&str) -> Option<CourseDraft>,
}

/// Tried in priority order.
const MATCHERS: &[FormatMatcher] = &[
    FormatMatcher {
        name: "pipe-delimited",
        applies: |line| line.contains('|'),
        parse: parse_pipe_line,
    },
    FormatMatcher {
        name: "dash-with-units",
        applies: |line| line.contains(" - "),
        parse: parse_dash_line,
    },
    FormatMatcher {
        name: "comma-delimited",
        applies: |line| line.contains(','),
        parse: parse_comma_line,
    },
];

/// Split free text into course drafts, one per recognized line. Malformed
/// lines are skipped with a warning rather than failing the batch.
pub fn parse_bulk_courses(text: &str) -> Vec<CourseDraft> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let Some(matcher) = MATCHERS.iter().find(|m| (m.applies)(line)) else {
                log::warn!("skipping course line with no recognized format: {}", line);
                return None;
            };
            let draft = (matcher.parse)(line);
            if draft.is_none() {
                log::warn!(
                    "skipping malformed {} course line: {}",
                    matcher.name,
                    line
                );
            }
            draft
        })
        .collect()
}

/// `MATH 300|College Algebra|4|MATH 120`
fn parse_pipe_line(line: &str) -> Option<CourseDraft> {
    let mut parts = line.split('|');
    let course_code = parts.next().unwrap_or_default().trim().to_string();
    let title = parts.next().unwrap_or_default().trim().to_string();
    let units = parts
        .next()
        .and_then(|p| parse_leading_int(p.trim()))
        .unwrap_or(DEFAULT_UNITS);
    let prerequisites = parts
        .next()
        .map(|p| strip_prerequisites_label(p.trim()).to_string())
        .unwrap_or_default();

    (!course_code.is_empty() && !title.is_empty())
        .then(|| CourseDraft::new(course_code, title, units, prerequisites))
}

/// `ENGL 101 - English Composition (3 units)`
fn parse_dash_line(line: &str) -> Option<CourseDraft> {
    let (code_section, rest) = line.split_once(" - ")?;
    let course_code = code_section.trim().to_string();

    let (units, title) = match find_units_parenthetical(rest) {
        Some((units, start, end)) => {
            let title = format!("{}{}", &rest[..start], &rest[end..]);
            (units, title.trim().to_string())
        }
        None => (DEFAULT_UNITS, rest.trim().to_string()),
    };

    (!course_code.is_empty() && !title.is_empty())
        .then(|| CourseDraft::new(course_code, title, units, String::new()))
}

/// `BIOL 400, Human Anatomy, 4 units, Prerequisites: BIOL 310`
fn parse_comma_line(line: &str) -> Option<CourseDraft> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    let course_code = parts.first().copied().unwrap_or_default().to_string();
    let title = parts.get(1).copied().unwrap_or_default().to_string();
    let units = parts
        .get(2)
        .and_then(|p| {
            let digits: String = p.chars().filter(char::is_ascii_digit).collect();
            digits.parse::<i64>().ok()
        })
        .map(|u| u as f64)
        .unwrap_or(DEFAULT_UNITS);
    let prerequisites = parts
        .get(3)
        .map(|p| strip_prerequisites_label(p).to_string())
        .unwrap_or_default();

    (!course_code.is_empty() && !title.is_empty())
        .then(|| CourseDraft::new(course_code, title, units, prerequisites))
}

/// Integer prefix of a field like "4" or "4 units"; decimals truncate at the
/// dot, matching the original importer.
fn parse_leading_int(field: &str) -> Option<f64> {
    let digits: String = field.chars().take_while(char::is_ascii_digit).collect();
    digits.parse::<i64>().ok().map(|u| u as f64)
}

/// Locate `(N units)` / `(N.5 unit)` in a dash-format line; returns the unit
/// count and the byte span of the parenthetical.
fn find_units_parenthetical(rest: &str) -> Option<(f64, usize, usize)> {
    let lower = rest.to_ascii_lowercase();
    let mut search_from = 0;
    while let Some(open_rel) = lower[search_from..].find('(') {
        let open = search_from + open_rel;
        if let Some(close_rel) = lower[open..].find(')') {
            let close = open + close_rel;
            let inner = lower[open + 1..close].trim();
            if let Some(number) = inner.strip_suffix("units").or_else(|| inner.strip_suffix("unit"))
            {
                if let Ok(units) = number.trim().parse::<f64>() {
                    return Some((units, open, close + 1));
                }
            }
            search_from = close + 1;
        } else {
            break;
        }
    }
    None
}

/// Drop a leading `Prerequisites:` / `Prerequisite:` label, case-insensitively.
fn strip_prerequisites_label(field: &str) -> &str {
    let lower = field.to_ascii_lowercase();
    for label in ["prerequisites:", "prerequisite:"] {
        if lower.starts_with(label) {
            return field[label.len()..].trim_start();
        }
    }
    field
}
