use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Records fetched from the backend. The welcome page only ever reads these.

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Talent {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub age: Option<u8>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub headline: Option<String>,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionStatus {
    Open,
    Upcoming,
    Judging,
    Closed,
    #[serde(other)]
    Other,
}

impl CompetitionStatus {
    /// Open and upcoming competitions are the ones worth advertising.
    pub fn is_active(self) -> bool {
        matches!(self, CompetitionStatus::Open | CompetitionStatus::Upcoming)
    }

    pub fn label(self) -> &'static str {
        match self {
            CompetitionStatus::Open => "Open",
            CompetitionStatus::Upcoming => "Upcoming",
            CompetitionStatus::Judging => "Judging",
            CompetitionStatus::Closed => "Closed",
            CompetitionStatus::Other => "",
        }
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Competition {
    pub id: i32,
    pub title: String,
    pub status: CompetitionStatus,
    pub description: Option<String>,
    pub prize: Option<String>,
    pub image_url: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Workshop {
    pub id: i32,
    pub title: String,
    pub instructor: Option<String>,
    pub start_time: DateTime<Utc>,
    pub image_url: Option<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Resource {
    pub id: i32,
    pub title: String,
    pub kind: Option<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct UserSummary {
    pub id: i32,
}

// Static marketing content, see content.rs.

#[derive(Clone, PartialEq, Debug)]
pub struct Slide {
    pub id: u32,
    pub image_url: &'static str,
    pub title: Option<&'static str>,
    pub subtitle: Option<&'static str>,
    pub title_animation: Option<TitleAnimation>,
    pub subtitle_animation: Option<RevealMode>,
}

/// How a slide title is brought on screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TitleAnimation {
    Typed,
    Staggered(RevealMode),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RevealMode {
    Letter,
    Word,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Testimonial {
    pub id: u32,
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub avatar_url: Option<&'static str>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct CategoryShowcase {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub image_url: &'static str,
    pub link: &'static str,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Award {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, PartialEq, Debug)]
pub struct HowItWorksStep {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// A statistic tile as configured; `source` names the live count it shows.
#[derive(Clone, PartialEq, Debug)]
pub struct StatTileDef {
    pub id: u32,
    pub title: &'static str,
    pub source: &'static str,
    pub icon: &'static str,
    pub color_class: &'static str,
}

/// A statistic tile ready to render. `value` is `None` while no live count backs it.
#[derive(Clone, PartialEq, Debug)]
pub struct StatisticDisplay {
    pub id: u32,
    pub title: &'static str,
    pub value: Option<usize>,
    pub icon: &'static str,
    pub color_class: &'static str,
}

/// Query carried to the talents listing by the search bar.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct TalentQuery {
    #[serde(default)]
    pub search: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn decodes_competition_with_unknown_status() {
        let raw = r#"[
            {"id": 1, "title": "Spring Slam", "status": "open", "description": null,
             "prize": "$500", "image_url": null, "deadline": "2026-11-01T12:00:00Z"},
            {"id": 2, "title": "Archive", "status": "archived", "description": null,
             "prize": null, "image_url": null, "deadline": null}
        ]"#;
        let competitions: Vec<Competition> = serde_json::from_str(raw).unwrap();
        assert_eq!(competitions[0].status, CompetitionStatus::Open);
        assert_eq!(
            competitions[0].deadline,
            Some(Utc.with_ymd_and_hms(2026, 11, 1, 12, 0, 0).unwrap())
        );
        assert_eq!(competitions[1].status, CompetitionStatus::Other);
        assert!(!competitions[1].status.is_active());
    }

    #[test]
    fn decodes_workshop_start_time() {
        let raw = r#"{"id": 7, "title": "Stage presence", "instructor": "Ana",
                      "start_time": "2026-10-20T09:30:00Z", "image_url": null}"#;
        let workshop: Workshop = serde_json::from_str(raw).unwrap();
        assert_eq!(workshop.start_time, Utc.with_ymd_and_hms(2026, 10, 20, 9, 30, 0).unwrap());
    }

    #[test]
    fn talent_query_defaults_to_empty_search() {
        let query: TalentQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query, TalentQuery::default());
    }
}
