//! Groups sessions by calendar date, keeping first-seen order.

use crate::models::Session;
use chrono::NaiveDate;

use super::totals::total_duration_minutes;

/// Sessions of one calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub sessions: Vec<Session>,
}

impl DayGroup {
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn total_minutes(&self) -> i64 {
        total_duration_minutes(&self.sessions)
    }
}

/// Ordered mapping date → sessions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionsByDate {
    groups: Vec<DayGroup>,
}

impl SessionsByDate {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Keys as `YYYY-MM-DD`, in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.groups.iter().map(DayGroup::date_key).collect()
    }

    pub fn get(&self, date: &NaiveDate) -> Option<&[Session]> {
        self.groups
            .iter()
            .find(|g| g.date == *date)
            .map(|g| g.sessions.as_slice())
    }

    pub fn get_key(&self, key: &str) -> Option<&[Session]> {
        self.groups
            .iter()
            .find(|g| g.date_key() == key)
            .map(|g| g.sessions.as_slice())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayGroup> {
        self.groups.iter()
    }

    /// Groups re-ordered by date, newest first.
    pub fn newest_first(mut self) -> Vec<DayGroup> {
        self.groups.sort_by(|a, b| b.date.cmp(&a.date));
        self.groups
    }
}

impl IntoIterator for SessionsByDate {
    type Item = DayGroup;
    type IntoIter = std::vec::IntoIter<DayGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

pub fn group_by_date(sessions: &[Session]) -> SessionsByDate {
    let mut groups: Vec<DayGroup> = Vec::new();

    for s in sessions {
        match groups.iter_mut().find(|g| g.date == s.date) {
            Some(group) => group.sessions.push(s.clone()),
            None => groups.push(DayGroup {
                date: s.date,
                sessions: vec![s.clone()],
            }),
        }
    }

    SessionsByDate { groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::pairing::pair_entries_in;
    use crate::core::calculator::test_support::{check_in, check_out};
    use crate::utils::DisplayZone;

    #[test]
    fn three_dates_three_keys() {
        let entries = vec![
            check_in(1, "2025-09-01T09:00:00Z"),
            check_out(2, "2025-09-01T12:00:00Z"),
            check_in(3, "2025-09-01T13:00:00Z"),
            check_out(4, "2025-09-01T17:00:00Z"),
            check_in(5, "2025-09-02T09:00:00Z"),
            check_out(6, "2025-09-02T17:00:00Z"),
            check_in(7, "2025-09-04T22:00:00Z"),
            check_out(8, "2025-09-05T02:00:00Z"),
        ];
        let sessions = pair_entries_in(&entries, DisplayZone::utc());

        let grouped = group_by_date(&sessions);

        assert_eq!(grouped.keys(), ["2025-09-04", "2025-09-02", "2025-09-01"]);
        let first_day = grouped.get_key("2025-09-01").unwrap();
        assert_eq!(
            first_day.iter().map(|s| s.check_in.id).collect::<Vec<_>>(),
            [3, 1]
        );
        assert!(grouped.iter().all(|g| g.sessions.iter().all(|s| s.date == g.date)));
        assert_eq!(grouped.get_key("2025-09-04").unwrap().len(), 1);
        let second = NaiveDate::from_ymd_opt(2025, 9, 2).unwrap();
        assert_eq!(grouped.get(&second).unwrap()[0].check_in.id, 5);
        assert!(grouped.get_key("2025-09-05").is_none());
    }

    #[test]
    fn keys_follow_first_occurrence() {
        let sessions = pair_entries_in(
            &[
                check_in(1, "2025-09-01T09:00:00Z"),
                check_in(2, "2025-09-03T09:00:00Z"),
            ],
            DisplayZone::utc(),
        );
        let mut reordered = sessions.clone();
        reordered.reverse();

        assert_eq!(group_by_date(&reordered).keys(), ["2025-09-01", "2025-09-03"]);
        assert_eq!(
            group_by_date(&reordered)
                .newest_first()
                .iter()
                .map(DayGroup::date_key)
                .collect::<Vec<_>>(),
            ["2025-09-03", "2025-09-01"]
        );
    }

    #[test]
    fn empty_sessions_empty_mapping() {
        let grouped = group_by_date(&[]);
        assert!(grouped.is_empty());
        assert_eq!(grouped.len(), 0);
    }
}
