//! Canonical grade ordering and grade-label normalization.
//!
//! Mountain Project grades sometimes carry a protection rating suffix,
//! ex: `5.9 R`. A pyramid only cares about technical difficulty, so the
//! suffix is stripped before grouping.

/// Yosemite Decimal System grades in increasing difficulty, in the order
/// Mountain Project interleaves letter and plus/minus variants.
const YDS_ORDER: &[&str] = &[
    "3rd", "4th", "5.0", "5.1", "5.2", "5.3",
    "5.4", "5.5", "5.6", "5.7", "5.8", "5.9",
    "5.10-", "5.10a", "5.10b", "5.10", "5.10+", "5.10c", "5.10d",
    "5.11-", "5.11a", "5.11b", "5.11", "5.11+", "5.11c", "5.11d",
    "5.12-", "5.12a", "5.12b", "5.12", "5.12+", "5.12c", "5.12d",
    "5.13-", "5.13a", "5.13b", "5.13", "5.13+", "5.13c", "5.13d",
    "5.14-", "5.14a", "5.14b", "5.14", "5.14+", "5.14c", "5.14d",
    "5.15-", "5.15a", "5.15b", "5.15", "5.15+", "5.15c", "5.15d",
];

const PROTECTION_RATINGS: &[&str] = &["PG13", "R", "X"];

/// Immutable grade configuration injected into the pyramid pipeline:
/// the total sort order for grades plus the protection-rating tokens
/// recognized as grade suffixes.
#[derive(Debug, Clone)]
pub struct GradeLadder {
    order: Vec<String>,
    protection_ratings: Vec<String>,
}

impl Default for GradeLadder {
    fn default() -> Self {
        Self::new(
            YDS_ORDER.iter().copied(),
            PROTECTION_RATINGS.iter().copied(),
        )
    }
}

impl GradeLadder {
    pub fn new<'a, G, P>(order: G, protection_ratings: P) -> Self
    where
        G: IntoIterator<Item = &'a str>,
        P: IntoIterator<Item = &'a str>,
    {
        Self {
            order: order.into_iter().map(str::to_string).collect(),
            protection_ratings: protection_ratings
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Grades in increasing difficulty.
    pub fn grades(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Position of `grade` in the ladder, or `None` for grades outside it
    /// (bouldering V-grades, typos).
    pub fn index_of(&self, grade: &str) -> Option<usize> {
        self.order.iter().position(|g| g == grade)
    }

    /// Strips a trailing protection rating from `raw` if one is present.
    ///
    /// Anything else trailing the grade is not ours to interpret and is
    /// returned unchanged.
    pub fn clean<'a>(&self, raw: &'a str) -> &'a str {
        let mut tokens = raw.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some(grade), Some(suffix))
                if self.protection_ratings.iter().any(|p| p == suffix) =>
            {
                grade
            }
            _ => raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_strips_recognized_protection_ratings() {
        let ladder = GradeLadder::default();
        assert_eq!(ladder.clean("5.9 R"), "5.9");
        assert_eq!(ladder.clean("5.10a PG13"), "5.10a");
        assert_eq!(ladder.clean("5.12d X"), "5.12d");
    }

    #[test]
    fn clean_leaves_plain_grades_alone() {
        let ladder = GradeLadder::default();
        assert_eq!(ladder.clean("5.9"), "5.9");
        assert_eq!(ladder.clean("5.10a"), "5.10a");
        assert_eq!(ladder.clean(""), "");
    }

    #[test]
    fn clean_preserves_unrecognized_suffixes() {
        let ladder = GradeLadder::default();
        assert_eq!(ladder.clean("5.9 Variation"), "5.9 Variation");
        assert_eq!(ladder.clean("5.9 r"), "5.9 r");
    }

    #[test]
    fn index_of_follows_ladder_order() {
        let ladder = GradeLadder::default();
        let nine = ladder.index_of("5.9").expect("5.9 in ladder");
        let ten_a = ladder.index_of("5.10a").expect("5.10a in ladder");
        assert!(nine < ten_a);
        assert_eq!(ladder.index_of("V5"), None);
    }

    #[test]
    fn custom_ladders_are_constructible() {
        let ladder = GradeLadder::new(["easy", "hard"], ["sketchy"]);
        assert_eq!(ladder.index_of("hard"), Some(1));
        assert_eq!(ladder.clean("easy sketchy"), "easy");
        assert_eq!(ladder.clean("easy R"), "easy R");
    }
}
