//! Priority Ordering
//!
//! `estimate_priority` reproduces the server's `final_priority` formula so
//! a drop can be previewed before the PATCH returns. Note the server
//! buckets with strict signs (`> 0`), unlike [`Quadrant::classify`].
//!
//! [`Quadrant::classify`]: crate::quadrant::Quadrant::classify

use std::cmp::Ordering;

use crate::domain::Task;
use crate::error::ValidationError;
use crate::quadrant::{SCORE_MAX, SCORE_MIN};

/// Priority assumed for tasks the server has not ranked
pub const DEFAULT_PRIORITY: i32 = 100;

fn check_axis(axis: &'static str, value: i32) -> Result<i32, ValidationError> {
    if (SCORE_MIN..=SCORE_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::ScoreOutOfRange { axis, value })
    }
}

/// Server-side priority in 100..=500, higher runs first
pub fn estimate_priority(importance: i32, urgency: i32) -> Result<i32, ValidationError> {
    let importance = check_axis("importance", importance)?;
    let urgency = check_axis("urgency", urgency)?;

    let priority = match (importance > 0, urgency > 0) {
        (true, true) => 400 + (importance + urgency) * 16,
        (true, false) => 300 + importance * 33,
        (false, true) => 200 + urgency * 33,
        (false, false) => 100 + (6 + importance + urgency) * 16,
    };
    Ok(priority)
}

fn effective_priority(task: &Task) -> i32 {
    task.final_priority
        .filter(|p| *p != 0)
        .unwrap_or(DEFAULT_PRIORITY)
}

fn compare(a: &Task, b: &Task) -> Ordering {
    a.completed
        .cmp(&b.completed)
        .then_with(|| effective_priority(b).cmp(&effective_priority(a)))
}

/// Open tasks first, then by priority, highest first. Stable.
pub fn sort_by_priority(tasks: &mut [Task]) {
    tasks.sort_by(compare);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(3, 3, 496)]
    #[case(1, 1, 432)]
    #[case(3, -3, 399)]
    #[case(1, 0, 333)]
    #[case(0, 3, 299)]
    #[case(0, 0, 196)]
    #[case(-3, -3, 100)]
    fn test_estimate_priority(#[case] importance: i32, #[case] urgency: i32, #[case] expected: i32) {
        assert_eq!(estimate_priority(importance, urgency), Ok(expected));
    }

    #[test]
    fn test_estimate_rejects_out_of_range() {
        assert_eq!(
            estimate_priority(4, 0),
            Err(ValidationError::ScoreOutOfRange { axis: "importance", value: 4 })
        );
        assert!(estimate_priority(0, -4).is_err());
    }

    #[test]
    fn test_sort_open_first_then_priority() {
        let mut done = Task::new(1, "done");
        done.completed = true;
        done.final_priority = Some(500);
        let mut high = Task::new(2, "high");
        high.final_priority = Some(450);
        let unranked = Task::new(3, "unranked");
        let mut zero = Task::new(4, "zero");
        zero.final_priority = Some(0);
        let mut low = Task::new(5, "low");
        low.final_priority = Some(50);

        let mut tasks = vec![done, low, unranked, high, zero];
        sort_by_priority(&mut tasks);

        let order: Vec<_> = tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(order, ["high", "unranked", "zero", "low", "done"]);
    }
}
