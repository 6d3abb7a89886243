//! The filter-group-sort pipeline over ascent records.
//!
//! Records pass two filters (route type, lead style), group into sets of
//! unique route names keyed by cleaned grade, then sort by the canonical
//! ladder. Grades outside the ladder are dropped at the sort step without
//! a user-facing warning; that includes bouldering V-grades and typos.

use std::collections::{BTreeSet, HashMap, HashSet};

use log::debug;

use crate::{grades::GradeLadder, ticks::Ascent};

/// Lead styles that count as a genuine send on lead.
const LEAD_SENDS: &[&str] = &["Redpoint", "Onsight", "Flash", "Pinkpoint"];

/// Grade label mapped to the unique route names climbed at that grade.
pub type Pyramid = HashMap<String, BTreeSet<String>>;

/// Selection criteria deciding which ascents feed the pyramid.
#[derive(Debug, Clone)]
pub struct SendCriteria {
    /// Single requested category, matched case-insensitively against the
    /// record's category list.
    pub route_type: String,
    /// Accepted lead styles, matched exactly.
    pub lead_styles: HashSet<String>,
}

impl SendCriteria {
    /// Criteria for `route_type` with the default lead-send styles.
    pub fn for_route_type(route_type: &str) -> Self {
        Self {
            route_type: route_type.to_string(),
            lead_styles: LEAD_SENDS.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn accepts(&self, ascent: &Ascent) -> bool {
        matches_route_type(&self.route_type, &ascent.route_type)
            && self.lead_styles.contains(&ascent.lead_style)
    }
}

/// Whether `actual`, a comma-space separated category list such as
/// "Sport, TR", includes the single `requested` category. A route tagged
/// "Sport, Trad" matches both a sport and a trad request.
pub fn matches_route_type(requested: &str, actual: &str) -> bool {
    actual
        .split(", ")
        .any(|category| category.eq_ignore_ascii_case(requested))
}

/// Groups qualifying ascents into an unordered pyramid. Duplicate route
/// names at the same cleaned grade collapse to one entry.
pub fn build_pyramid(
    ascents: &[Ascent],
    criteria: &SendCriteria,
    ladder: &GradeLadder,
) -> Pyramid {
    let mut pyramid = Pyramid::new();
    for ascent in ascents.iter().filter(|a| criteria.accepts(a)) {
        let grade = ladder.clean(&ascent.rating);
        pyramid
            .entry(grade.to_string())
            .or_default()
            .insert(ascent.route.clone());
    }
    pyramid
}

/// Orders a pyramid by the canonical ladder. Keys absent from the ladder
/// are dropped.
pub fn sort_by_grade(
    mut pyramid: Pyramid,
    ladder: &GradeLadder,
) -> Vec<(String, BTreeSet<String>)> {
    let mut sorted = Vec::with_capacity(pyramid.len());
    for grade in ladder.grades() {
        if let Some(routes) = pyramid.remove(grade) {
            sorted.push((grade.to_string(), routes));
        }
    }
    for grade in pyramid.keys() {
        debug!("Dropping grade '{grade}' absent from the canonical ladder");
    }
    sorted
}
