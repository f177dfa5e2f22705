//! Sort comparators for the result list.
//!
//! All sorts are stable: candidates that compare equal keep the order
//! they had coming out of the filters (which is snapshot order).

use crate::query::SortMode;
use candidate_store::Candidate;
use std::cmp::Ordering;

/// Best-effort years of experience from a free-text band.
///
/// Takes the first run of ASCII digits ("3-5 years" -> 3, "10+ years" -> 10).
/// Bands without digits, or with a number too large for `u32`, yield 0.
pub fn experience_years(band: &str) -> u32 {
    let digits: String = band
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Comparator for a sort mode
pub fn compare(mode: SortMode, a: &Candidate, b: &Candidate) -> Ordering {
    match mode {
        SortMode::Recent => b.date_added.cmp(&a.date_added),
        SortMode::Name => a.name.cmp(&b.name),
        SortMode::Experience => {
            experience_years(&b.experience_band).cmp(&experience_years(&a.experience_band))
        }
    }
}

/// Stable in-place sort of a candidate list
pub fn sort_candidates(candidates: &mut [&Candidate], mode: SortMode) {
    candidates.sort_by(|a, b| compare(mode, a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn candidate(name: &str, band: &str, added_day: u32) -> Candidate {
        Candidate {
            id: name.to_lowercase(),
            name: name.to_string(),
            experience_band: band.to_string(),
            date_added: Utc.with_ymd_and_hms(2024, 1, added_day, 0, 0, 0).unwrap(),
            ..Default::default()
        }
    }

    fn names(list: &[&Candidate]) -> Vec<String> {
        list.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_experience_years() {
        assert_eq!(experience_years("3-5 years"), 3);
        assert_eq!(experience_years("10+ years"), 10);
        assert_eq!(experience_years("Senior (7 yrs)"), 7);
        assert_eq!(experience_years("Student"), 0);
        assert_eq!(experience_years("Not specified"), 0);
        assert_eq!(experience_years(""), 0);
        assert_eq!(experience_years("99999999999 years"), 0);
    }

    #[test]
    fn test_recent_sort_is_stable() {
        let a = candidate("A", "", 1);
        let b = candidate("B", "", 5);
        let c = candidate("C", "", 1);
        let d = candidate("D", "", 9);

        let mut list = vec![&a, &b, &c, &d];
        sort_candidates(&mut list, SortMode::Recent);
        assert_eq!(names(&list), vec!["D", "B", "A", "C"]);
    }

    #[test]
    fn test_name_sort_is_ordinal_and_idempotent() {
        let a = candidate("bob", "", 1);
        let b = candidate("Alice", "", 1);
        let c = candidate("Zed", "", 1);

        let mut list = vec![&a, &b, &c];
        sort_candidates(&mut list, SortMode::Name);
        // Uppercase sorts before lowercase in ordinal comparison
        assert_eq!(names(&list), vec!["Alice", "Zed", "bob"]);

        let once = names(&list);
        sort_candidates(&mut list, SortMode::Name);
        assert_eq!(names(&list), once);
        assert!(list.windows(2).all(|w| w[0].name <= w[1].name));
    }

    #[test]
    fn test_experience_sort_puts_unparsable_last() {
        let a = candidate("A", "Student", 1);
        let b = candidate("B", "10+ years", 1);
        let c = candidate("C", "3-5 years", 1);
        let d = candidate("D", "Not specified", 1);

        let mut list = vec![&a, &b, &c, &d];
        sort_candidates(&mut list, SortMode::Experience);
        assert_eq!(names(&list), vec!["B", "C", "A", "D"]);
    }
}
