//! Display lists the welcome page derives from the fetched collections.

use chrono::{DateTime, Utc};

use crate::config;
use crate::models::{Competition, StatTileDef, StatisticDisplay, Talent, Workshop};

/// The first talents in the order the backend returned them.
pub fn showcased_talents(talents: &[Talent]) -> &[Talent] {
    &talents[..talents.len().min(config::SHOWCASED_TALENT_COUNT)]
}

pub fn featured_competition(competitions: &[Competition]) -> Option<&Competition> {
    competitions.iter().find(|c| c.status.is_active())
}

pub fn active_competition_count(competitions: &[Competition]) -> usize {
    competitions.iter().filter(|c| c.status.is_active()).count()
}

/// Workshops starting strictly after `now`, soonest first.
pub fn future_workshops(workshops: &[Workshop], now: DateTime<Utc>) -> Vec<Workshop> {
    let mut upcoming: Vec<Workshop> = workshops
        .iter()
        .filter(|w| w.start_time > now)
        .cloned()
        .collect();
    upcoming.sort_by_key(|w| w.start_time);
    upcoming
}

pub fn upcoming_workshops(workshops: &[Workshop], now: DateTime<Utc>) -> Vec<Workshop> {
    let mut upcoming = future_workshops(workshops, now);
    upcoming.truncate(config::UPCOMING_WORKSHOP_COUNT);
    upcoming
}

/// Live counts the statistic tiles can be bound to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatSources {
    pub users: usize,
    pub talents: usize,
    pub categories: usize,
    pub competitions: usize,
    pub workshops: usize,
    pub resources: usize,
}

impl StatSources {
    pub fn lookup(&self, source: &str) -> Option<usize> {
        match source {
            "users" => Some(self.users),
            "talents" => Some(self.talents),
            "categories" => Some(self.categories),
            "competitions" => Some(self.competitions),
            "workshops" => Some(self.workshops),
            "resources" => Some(self.resources),
            _ => None,
        }
    }

    /// Static tables hold their count back until the fetched sources settle,
    /// so every tile fills in from the same loading state.
    pub fn with_categories(mut self, count: usize, any_loading: bool) -> Self {
        self.categories = if any_loading { 0 } else { count };
        self
    }
}

pub fn statistics(tiles: &[StatTileDef], sources: &StatSources) -> Vec<StatisticDisplay> {
    tiles
        .iter()
        .map(|tile| StatisticDisplay {
            id: tile.id,
            title: tile.title,
            value: sources.lookup(tile.source),
            icon: tile.icon,
            color_class: tile.color_class,
        })
        .collect()
}

/// Skeletons stay up while anything is loading and no tile has a real number yet.
///
/// A tile bound to an unknown source never gets a number, so with such a tile
/// the check only passes once loading finishes.
pub fn show_stat_skeleton(any_loading: bool, stats: &[StatisticDisplay]) -> bool {
    any_loading && stats.iter().all(|s| matches!(s.value, None | Some(0)))
}

pub const UNAVAILABLE_STAT: &str = "—";

pub fn format_stat_value(value: Option<usize>) -> String {
    let Some(value) = value else {
        return UNAVAILABLE_STAT.to_string();
    };
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

pub fn deadline_phrase(deadline: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if deadline <= now {
        return "Closed".to_string();
    }
    match (deadline - now).num_days() {
        0 => "Closes today".to_string(),
        1 => "Closes in 1 day".to_string(),
        days => format!("Closes in {} days", days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CompetitionStatus;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn talent(id: i32) -> Talent {
        Talent {
            id,
            name: format!("Talent {}", id),
            category: "Music".into(),
            age: None,
            location: None,
            avatar_url: None,
            headline: None,
        }
    }

    fn competition(id: i32, status: CompetitionStatus) -> Competition {
        Competition {
            id,
            title: format!("Competition {}", id),
            status,
            description: None,
            prize: None,
            image_url: None,
            deadline: None,
        }
    }

    fn workshop(id: i32, start_time: DateTime<Utc>) -> Workshop {
        Workshop {
            id,
            title: format!("Workshop {}", id),
            instructor: None,
            start_time,
            image_url: None,
        }
    }

    #[test]
    fn showcases_first_twelve_in_given_order() {
        let talents: Vec<Talent> = (0..20).rev().map(talent).collect();
        let shown = showcased_talents(&talents);
        assert_eq!(shown.len(), 12);
        assert_eq!(shown[0].id, 19);
        assert_eq!(shown[11].id, 8);

        assert_eq!(showcased_talents(&talents[..3]).len(), 3);
    }

    #[test]
    fn features_first_open_or_upcoming_competition() {
        let competitions = vec![
            competition(1, CompetitionStatus::Closed),
            competition(2, CompetitionStatus::Upcoming),
            competition(3, CompetitionStatus::Open),
        ];
        assert_eq!(featured_competition(&competitions).map(|c| c.id), Some(2));
        assert_eq!(active_competition_count(&competitions), 2);

        let inactive = vec![
            competition(1, CompetitionStatus::Closed),
            competition(2, CompetitionStatus::Judging),
        ];
        assert!(featured_competition(&inactive).is_none());
    }

    #[test]
    fn upcoming_workshops_are_future_sorted_and_capped() {
        let t = now();
        let workshops = vec![
            workshop(1, t - Duration::hours(1)),
            workshop(2, t + Duration::hours(5)),
            workshop(3, t + Duration::hours(1)),
        ];
        let ids: Vec<i32> = upcoming_workshops(&workshops, t).iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![3, 2]);

        let mut more = workshops.clone();
        more.push(workshop(4, t + Duration::minutes(30)));
        let ids: Vec<i32> = upcoming_workshops(&more, t).iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![4, 3]);
        assert_eq!(future_workshops(&more, t).len(), 3);
    }

    #[test]
    fn workshop_starting_now_is_not_upcoming() {
        let t = now();
        assert!(upcoming_workshops(&[workshop(1, t)], t).is_empty());
    }

    #[test]
    fn statistics_map_sources_and_mark_unknown_ones() {
        let tiles = [
            StatTileDef { id: 1, title: "Talents", source: "talents", icon: "⭐", color_class: "a" },
            StatTileDef { id: 2, title: "Mentors", source: "mentors", icon: "🧑", color_class: "b" },
        ];
        let sources = StatSources { talents: 1_250, ..StatSources::default() };
        let stats = statistics(&tiles, &sources);
        assert_eq!(stats[0].value, Some(1_250));
        assert_eq!(stats[1].value, None);
        assert_eq!(format_stat_value(stats[0].value), "1,250");
        assert_eq!(format_stat_value(stats[1].value), UNAVAILABLE_STAT);
    }

    #[test]
    fn skeleton_only_while_loading_and_everything_is_empty() {
        let tiles = [
            StatTileDef { id: 1, title: "Talents", source: "talents", icon: "", color_class: "" },
            StatTileDef { id: 2, title: "Mentors", source: "mentors", icon: "", color_class: "" },
        ];
        let empty = statistics(&tiles, &StatSources::default());
        assert!(show_stat_skeleton(true, &empty));
        assert!(!show_stat_skeleton(false, &empty));

        let partial = statistics(&tiles, &StatSources { talents: 3, ..StatSources::default() });
        assert!(!show_stat_skeleton(true, &partial));
    }

    #[test]
    fn welcome_tiles_show_skeleton_while_collections_load() {
        use crate::content::{CATEGORIES, STAT_TILES};

        let loading = StatSources::default().with_categories(CATEGORIES.len(), true);
        let stats = statistics(STAT_TILES, &loading);
        assert!(stats.iter().all(|s| s.value == Some(0)));
        assert!(show_stat_skeleton(true, &stats));

        let settled = StatSources::default().with_categories(CATEGORIES.len(), false);
        let stats = statistics(STAT_TILES, &settled);
        assert!(!show_stat_skeleton(false, &stats));
        let categories = stats
            .iter()
            .zip(STAT_TILES)
            .find(|(_, tile)| tile.source == "categories")
            .map(|(stat, _)| stat.value);
        assert_eq!(categories, Some(Some(CATEGORIES.len())));
    }

    #[test]
    fn formats_counts_with_thousand_separators() {
        assert_eq!(format_stat_value(Some(0)), "0");
        assert_eq!(format_stat_value(Some(999)), "999");
        assert_eq!(format_stat_value(Some(1_000)), "1,000");
        assert_eq!(format_stat_value(Some(1_234_567)), "1,234,567");
    }

    #[test]
    fn deadline_phrases() {
        let t = now();
        assert_eq!(deadline_phrase(t - Duration::minutes(1), t), "Closed");
        assert_eq!(deadline_phrase(t, t), "Closed");
        assert_eq!(deadline_phrase(t + Duration::hours(3), t), "Closes today");
        assert_eq!(deadline_phrase(t + Duration::hours(30), t), "Closes in 1 day");
        assert_eq!(deadline_phrase(t + Duration::days(5), t), "Closes in 5 days");
    }
}
