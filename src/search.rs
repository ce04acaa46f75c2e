use crate::models::College;

/// Narrows an already-fetched college list by a free-text query, without a
/// network round trip.
///
/// The query is trimmed first; an empty query returns the whole collection.
/// Otherwise a college is kept iff the query is a case-insensitive substring
/// of its name or its location. Relative order is preserved and the source
/// collection is never mutated.
pub fn filter_colleges(colleges: &[College], query: &str) -> Vec<College> {
    let query = query.trim();
    if query.is_empty() {
        return colleges.to_vec();
    }
    let query = query.to_lowercase();
    colleges
        .iter()
        .filter(|college| {
            college.name.to_lowercase().contains(&query)
                || college.location.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::college_fixture;

    fn sample() -> Vec<College> {
        vec![
            college_fixture("Fergusson College", "Pune", None),
            college_fixture("St Xavier's College", "Mumbai", Some(5)),
            college_fixture("COEP Technological University", "Pune", Some(2)),
        ]
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let colleges = sample();
        assert_eq!(filter_colleges(&colleges, ""), colleges);
        assert_eq!(filter_colleges(&colleges, "   "), colleges);
    }

    #[test]
    fn matches_name_or_location_case_insensitively() {
        let colleges = sample();

        let by_location = filter_colleges(&colleges, "PUNE");
        let names: Vec<&str> = by_location.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Fergusson College", "COEP Technological University"]);

        let by_name = filter_colleges(&colleges, "xavier");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "St Xavier's College");
    }

    #[test]
    fn excluded_rows_match_neither_field() {
        let colleges = sample();
        let kept = filter_colleges(&colleges, "coep");
        for college in &colleges {
            let matches = college.name.to_lowercase().contains("coep")
                || college.location.to_lowercase().contains("coep");
            assert_eq!(kept.contains(college), matches);
        }
    }

    #[test]
    fn leading_and_trailing_whitespace_is_ignored() {
        let colleges = sample();
        assert_eq!(filter_colleges(&colleges, "  pune "), filter_colleges(&colleges, "pune"));
    }

    #[test]
    fn filtering_is_idempotent() {
        let colleges = sample();
        let once = filter_colleges(&colleges, "pune");
        let twice = filter_colleges(&once, "pune");
        assert_eq!(once, twice);
    }

    #[test]
    fn no_match_yields_empty_result() {
        let colleges = sample();
        assert!(filter_colleges(&colleges, "delhi").is_empty());
    }
}
