//! Coordinate Mapper
//!
//! Converts between the score domain (importance and urgency, each an
//! integer in [-3, 3]) and canvas positions in percent, and classifies a
//! pair of scores into one of the four quadrants.
//!
//! None of these functions clamp: a drag that strays past the canvas edge
//! yields a position outside [0, 100] or a score outside [-3, 3], and the
//! caller decides when to clamp.

use serde::{Deserialize, Serialize};

pub const SCORE_MIN: i32 = -3;
pub const SCORE_MAX: i32 = 3;

const SCORE_SPAN: f64 = (SCORE_MAX - SCORE_MIN) as f64;

/// Map a score onto [0, 100]: -3 -> 0, 0 -> 50, 3 -> 100
pub fn score_to_position(score: f64) -> f64 {
    ((score - SCORE_MIN as f64) / SCORE_SPAN) * 100.0
}

/// Inverse of [`score_to_position`], rounded to the nearest score.
///
/// Halves round towards positive infinity, so position 25 (score -1.5)
/// maps to -1, not -2.
pub fn position_to_score(position: f64) -> i32 {
    round_half_up((position / 100.0) * SCORE_SPAN + SCORE_MIN as f64) as i32
}

// f64::round rounds halves away from zero, which would turn -1.5 into -2.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Scores under a canvas point.
///
/// `x` runs left to right along urgency; `y` is measured from the top,
/// while importance grows upwards. Returns `(importance, urgency)`.
pub fn scores_at(x_percent: f64, y_percent: f64) -> (i32, i32) {
    let urgency = position_to_score(x_percent);
    let importance = position_to_score(100.0 - y_percent);
    (importance, urgency)
}

/// Where a task point is drawn, as `(left%, top%)`
pub fn placement(importance: i32, urgency: i32) -> (f64, f64) {
    let left = score_to_position(urgency as f64);
    let top = 100.0 - score_to_position(importance as f64);
    (left, top)
}

/// Quadrant of the importance/urgency board.
///
/// Zero counts as the important (or urgent) side on both axes, so a task
/// scored (0, 0) is `Q1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// Important and urgent
    Q1,
    /// Important, not urgent
    Q2,
    /// Not important, urgent
    Q3,
    /// Neither
    Q4,
}

/// Presentation metadata of a quadrant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantInfo {
    pub code: &'static str,
    pub label: &'static str,
    /// Solid color for task points and borders
    pub color: &'static str,
    /// Translucent fill for the quadrant background
    pub fill: &'static str,
}

const QUADRANT_INFO: [QuadrantInfo; 4] = [
    QuadrantInfo {
        code: "L1",
        label: "Important & urgent",
        color: "#ef4444",
        fill: "rgba(239, 68, 68, 0.1)",
    },
    QuadrantInfo {
        code: "L2",
        label: "Important, not urgent",
        color: "#22c55e",
        fill: "rgba(34, 197, 94, 0.1)",
    },
    QuadrantInfo {
        code: "L3",
        label: "Not important, urgent",
        color: "#f97316",
        fill: "rgba(249, 115, 22, 0.1)",
    },
    QuadrantInfo {
        code: "L4",
        label: "Not important, not urgent",
        color: "#a855f7",
        fill: "rgba(168, 85, 247, 0.1)",
    },
];

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Quadrant::Q1, Quadrant::Q2, Quadrant::Q3, Quadrant::Q4];

    pub fn classify(importance: i32, urgency: i32) -> Self {
        match (importance >= 0, urgency >= 0) {
            (true, true) => Quadrant::Q1,
            (true, false) => Quadrant::Q2,
            (false, true) => Quadrant::Q3,
            (false, false) => Quadrant::Q4,
        }
    }

    pub fn info(self) -> QuadrantInfo {
        QUADRANT_INFO[self.index()]
    }

    fn index(self) -> usize {
        match self {
            Quadrant::Q1 => 0,
            Quadrant::Q2 => 1,
            Quadrant::Q3 => 2,
            Quadrant::Q4 => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_round_trip_every_score() {
        for score in SCORE_MIN..=SCORE_MAX {
            assert_eq!(position_to_score(score_to_position(score as f64)), score);
        }
    }

    #[rstest]
    #[case(-3.0, 0.0)]
    #[case(0.0, 50.0)]
    #[case(3.0, 100.0)]
    #[case(-6.0, -50.0)]
    fn test_score_to_position(#[case] score: f64, #[case] expected: f64) {
        assert!((score_to_position(score) - expected).abs() < 1e-9);
    }

    #[rstest]
    #[case(25.0, -1)]
    #[case(75.0, 2)]
    #[case(0.0, -3)]
    #[case(100.0, 3)]
    #[case(49.0, 0)]
    #[case(-20.0, -4)]
    #[case(130.0, 5)]
    fn test_position_to_score(#[case] position: f64, #[case] expected: i32) {
        assert_eq!(position_to_score(position), expected);
    }

    #[rstest]
    #[case(0, 0, Quadrant::Q1)]
    #[case(0, -1, Quadrant::Q2)]
    #[case(-1, 0, Quadrant::Q3)]
    #[case(-1, -1, Quadrant::Q4)]
    #[case(3, 3, Quadrant::Q1)]
    #[case(-3, -3, Quadrant::Q4)]
    fn test_classify_boundaries(
        #[case] importance: i32,
        #[case] urgency: i32,
        #[case] expected: Quadrant,
    ) {
        assert_eq!(Quadrant::classify(importance, urgency), expected);
    }

    #[test]
    fn test_quadrant_info_table() {
        assert_eq!(Quadrant::Q1.info().color, "#ef4444");
        assert_eq!(Quadrant::Q4.info().code, "L4");
        let codes: Vec<_> = Quadrant::ALL.iter().map(|q| q.info().code).collect();
        assert_eq!(codes, ["L1", "L2", "L3", "L4"]);
    }

    #[test]
    fn test_canvas_corners() {
        // top-left is most important, least urgent
        assert_eq!(scores_at(0.0, 0.0), (3, -3));
        assert_eq!(scores_at(100.0, 100.0), (-3, 3));
        assert_eq!(scores_at(50.0, 50.0), (0, 0));
        assert_eq!(placement(3, -3), (0.0, 0.0));
        assert_eq!(placement(0, 0), (50.0, 50.0));
    }

    proptest! {
        #[test]
        fn prop_position_is_monotonic(a in -10.0f64..10.0, b in -10.0f64..10.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(score_to_position(lo) <= score_to_position(hi));
        }

        #[test]
        fn prop_placement_round_trips(importance in SCORE_MIN..=SCORE_MAX, urgency in SCORE_MIN..=SCORE_MAX) {
            let (left, top) = placement(importance, urgency);
            prop_assert_eq!(scores_at(left, top), (importance, urgency));
        }
    }
}
