//! Small helpers shared across handlers.

use chrono::Utc;

/// Splits a course label of the form `"DEP CODE"` (e.g. `"CEN 3031"`) into
/// its department prefix and course code.
///
/// The backend expects a three-letter department and a four-or-five character
/// code; anything else is rejected here before a backend round trip.
pub fn split_course_label(label: &str) -> Option<(&str, &str)> {
    let (department, code) = label.split_once(' ')?;

    if department.len() != 3 || !(4..=5).contains(&code.len()) {
        return None;
    }

    Some((department, code))
}

/// Current UTC time in milliseconds, the unit chat history cutoffs use.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_well_formed_labels() {
        assert_eq!(split_course_label("CEN 3031"), Some(("CEN", "3031")));
        assert_eq!(split_course_label("COP 3502C"), Some(("COP", "3502C")));
    }

    #[test]
    fn rejects_malformed_labels() {
        assert_eq!(split_course_label("CEN3031"), None);
        assert_eq!(split_course_label("CENG 3031"), None);
        assert_eq!(split_course_label("CEN 31"), None);
        assert_eq!(split_course_label(""), None);
    }

    #[test]
    fn now_millis_is_millisecond_scale() {
        // Sanity bound: after 2020-01-01 expressed in ms.
        assert!(now_millis() > 1_577_836_800_000);
    }
}
