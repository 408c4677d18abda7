//! Pre-submission Validation
//!
//! Runs before any create or edit request; a draft that fails here never
//! reaches the network.

use std::sync::LazyLock;

use chrono::{NaiveTime, Timelike};
use regex::Regex;

use crate::domain::TaskDraft;
use crate::error::ValidationError;
use crate::quadrant::{SCORE_MAX, SCORE_MIN};

pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01]?[0-9]|2[0-3]):[0-5][0-9]$").expect("Invalid time regex pattern")
});

/// Parse an `H:MM` / `HH:MM` wall-clock time
pub fn parse_time(field: &'static str, value: &str) -> Result<NaiveTime, ValidationError> {
    let malformed = || ValidationError::MalformedTime {
        field,
        value: value.to_string(),
    };
    if !TIME_PATTERN.is_match(value) {
        return Err(malformed());
    }
    let (hours, minutes) = value.split_once(':').ok_or_else(malformed)?;
    let hours = hours.parse().map_err(|_| malformed())?;
    let minutes = minutes.parse().map_err(|_| malformed())?;
    NaiveTime::from_hms_opt(hours, minutes, 0).ok_or_else(malformed)
}

pub fn time_to_minutes(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Format minutes since midnight as zero-padded `HH:MM`
pub fn minutes_to_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn check_score(errors: &mut Vec<ValidationError>, axis: &'static str, score: Option<i32>) {
    if let Some(value) = score.filter(|v| !(SCORE_MIN..=SCORE_MAX).contains(v)) {
        errors.push(ValidationError::ScoreOutOfRange { axis, value });
    }
}

/// Every problem with a draft, in form order
pub fn check(draft: &TaskDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let title = draft.title.trim();
    if title.is_empty() {
        errors.push(ValidationError::EmptyTitle);
    } else if title.chars().count() > TITLE_MAX_CHARS {
        errors.push(ValidationError::TitleTooLong { max: TITLE_MAX_CHARS });
    }

    if let Some(description) = &draft.description {
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            errors.push(ValidationError::DescriptionTooLong { max: DESCRIPTION_MAX_CHARS });
        }
    }

    let start = draft.start_time.as_deref().map(|v| parse_time("start", v));
    let end = draft.end_time.as_deref().map(|v| parse_time("end", v));
    match (start, end) {
        (Some(Ok(start)), Some(Ok(end))) if start >= end => {
            errors.push(ValidationError::TimeRangeInverted);
        }
        (start, end) => {
            errors.extend(start.and_then(Result::err));
            errors.extend(end.and_then(Result::err));
        }
    }

    check_score(&mut errors, "importance", draft.importance_score);
    check_score(&mut errors, "urgency", draft.urgency_score);
    errors
}

/// First problem with a draft, if any
pub fn validate(draft: &TaskDraft) -> Result<(), ValidationError> {
    match check(draft).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn timed(start: &str, end: &str) -> TaskDraft {
        TaskDraft {
            title: "Standup".to_string(),
            start_time: Some(start.to_string()),
            end_time: Some(end.to_string()),
            ..Default::default()
        }
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn test_blank_title_rejected(#[case] title: &str) {
        let draft = TaskDraft { title: title.to_string(), ..Default::default() };
        assert_eq!(validate(&draft), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn test_length_limits_count_characters() {
        let ok = TaskDraft::new("é".repeat(TITLE_MAX_CHARS));
        assert_eq!(validate(&ok), Ok(()));

        let long = TaskDraft::new("x".repeat(TITLE_MAX_CHARS + 1));
        assert_eq!(validate(&long), Err(ValidationError::TitleTooLong { max: 100 }));

        let mut wordy = TaskDraft::new("ok");
        wordy.description = Some("d".repeat(DESCRIPTION_MAX_CHARS + 1));
        assert_eq!(validate(&wordy), Err(ValidationError::DescriptionTooLong { max: 500 }));
    }

    #[rstest]
    #[case("9:05", true)]
    #[case("09:05", true)]
    #[case("23:59", true)]
    #[case("24:00", false)]
    #[case("12:60", false)]
    #[case("12-30", false)]
    #[case("7:5", false)]
    fn test_time_format(#[case] value: &str, #[case] valid: bool) {
        assert_eq!(parse_time("start", value).is_ok(), valid);
    }

    #[test]
    fn test_time_range_must_be_increasing() {
        assert_eq!(validate(&timed("09:00", "10:30")), Ok(()));
        assert_eq!(validate(&timed("10:30", "10:30")), Err(ValidationError::TimeRangeInverted));
        assert_eq!(validate(&timed("11:00", "9:00")), Err(ValidationError::TimeRangeInverted));
    }

    #[test]
    fn test_check_collects_all_errors() {
        let draft = TaskDraft {
            title: String::new(),
            start_time: Some("25:00".into()),
            end_time: Some("nope".into()),
            urgency_score: Some(7),
            ..Default::default()
        };
        let errors = check(&draft);
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[0], ValidationError::EmptyTitle);
        assert_eq!(errors[3], ValidationError::ScoreOutOfRange { axis: "urgency", value: 7 });
    }

    #[test]
    fn test_create_form_message_for_inverted_times() {
        let draft = TaskDraft::from_form("Stand-up", "", "10:00", "09:45");
        let err = validate(&draft).unwrap_err();
        assert_eq!(err.to_string(), "start time must be before end time");
    }

    #[test]
    fn test_minutes_conversion() {
        let time = parse_time("start", "9:05").unwrap();
        assert_eq!(time_to_minutes(time), 545);
        assert_eq!(minutes_to_time(545), "09:05");
        assert_eq!(minutes_to_time(0), "00:00");
    }
}
