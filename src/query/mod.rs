//! Filtering and ordering of collections for display.
//!
//! Everything here works on borrowed slices and returns borrowed views; the
//! document itself is never reordered.

use std::cmp::Reverse;
use std::collections::HashSet;
use std::str::FromStr;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{
    CompletedProject, Newsletter, Project, ProjectStatus, Resource, TeamMember, Video,
};

/// Sentinel filter value that lets every record through.
pub const ALL: &str = "all";

static QUARTER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Q(\d)['’]?(\d{2})").expect("quarter pattern is valid"));

/// Records that take part in the free-text search box.
pub trait Searchable {
    fn search_fields(&self) -> [&str; 2];
}

impl Searchable for TeamMember {
    fn search_fields(&self) -> [&str; 2] {
        [&self.name, &self.role]
    }
}

impl Searchable for Project {
    fn search_fields(&self) -> [&str; 2] {
        [&self.title, &self.description]
    }
}

impl Searchable for Resource {
    fn search_fields(&self) -> [&str; 2] {
        [&self.title, &self.description]
    }
}

/// Case-insensitive substring match on the record's search fields.
pub fn matches_query<T: Searchable>(item: &T, query: &str) -> bool {
    let needle = query.to_lowercase();
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Keep records matching `query`; an empty query keeps everything in order.
pub fn filter_text<'a, T, I>(items: I, query: &str) -> Vec<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    if query.is_empty() {
        return items.into_iter().collect();
    }
    items
        .into_iter()
        .filter(|item| matches_query(*item, query))
        .collect()
}

/// Project board status dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ProjectStatus),
}

impl StatusFilter {
    pub fn accepts(&self, project: &Project) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => project.status == *status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

/// Project listing: status filter first, then the search box.
pub fn filter_projects<'a>(
    projects: &'a [Project],
    status: &StatusFilter,
    query: &str,
) -> Vec<&'a Project> {
    filter_text(projects.iter().filter(|p| status.accepts(p)), query)
}

/// Video category buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Blank and `all` both select every category.
    pub fn new(value: &str) -> Self {
        if value.is_empty() || value == ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL,
            CategoryFilter::Only(category) => category,
        }
    }

    pub fn accepts(&self, video: &Video) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => video.category == *category,
        }
    }
}

pub fn filter_videos<'a>(videos: &'a [Video], category: &CategoryFilter) -> Vec<&'a Video> {
    videos.iter().filter(|v| category.accepts(v)).collect()
}

/// `all` followed by each distinct category in first-seen order.
///
/// Derived from live data only: deleting the last video of a category drops
/// its button.
pub fn video_categories(videos: &[Video]) -> Vec<String> {
    let mut seen = HashSet::new();
    std::iter::once(ALL.to_string())
        .chain(
            videos
                .iter()
                .filter(|v| seen.insert(v.category.as_str()))
                .map(|v| v.category.clone()),
        )
        .collect()
}

/// Sort key parsed from a quarter label such as `Q3'25`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct QuarterKey {
    pub year: u32,
    pub quarter: u32,
}

impl QuarterKey {
    /// Unparsable labels yield year 0, quarter 0 and sort last.
    pub fn parse(label: &str) -> Self {
        QUARTER_PATTERN
            .captures(label)
            .and_then(|caps| {
                Some(QuarterKey {
                    year: caps.get(2)?.as_str().parse().ok()?,
                    quarter: caps.get(1)?.as_str().parse().ok()?,
                })
            })
            .unwrap_or_default()
    }
}

/// Newest first: year descending, then quarter descending.
pub fn sort_newsletters(newsletters: &[Newsletter]) -> Vec<&Newsletter> {
    let mut sorted: Vec<&Newsletter> = newsletters.iter().collect();
    sorted.sort_by_key(|n| Reverse(QuarterKey::parse(&n.quarter)));
    sorted
}

/// Layout of the Completed section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Insertion order
    #[default]
    Grid,
    /// Most recently completed first
    Timeline,
}

pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub fn order_completed(completed: &[CompletedProject], mode: ViewMode) -> Vec<&CompletedProject> {
    let mut ordered: Vec<&CompletedProject> = completed.iter().collect();
    if mode == ViewMode::Timeline {
        // None sorts below every date, so unparsable dates land at the end.
        ordered.sort_by_key(|p| Reverse(parse_iso_date(&p.completed_date)));
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResourceType;

    fn member(id: i64, name: &str, role: &str) -> TeamMember {
        TeamMember {
            id,
            name: name.to_string(),
            role: role.to_string(),
            image: String::new(),
            white_pages_url: String::new(),
        }
    }

    fn newsletter(id: i64, quarter: &str) -> Newsletter {
        Newsletter {
            id,
            title: format!("{} Newsletter", quarter),
            quarter: quarter.to_string(),
            url: format!("https://example.com/{}", id),
        }
    }

    fn project(id: i64, title: &str, status: ProjectStatus) -> Project {
        Project {
            id,
            title: title.to_string(),
            description: format!("About {}", title),
            status,
            progress: Some(10),
            owner: "Owner".to_string(),
            start_date: "2026-01-01".to_string(),
            target_end_date: None,
        }
    }

    fn video(id: i64, category: &str) -> Video {
        Video {
            id,
            title: format!("Video {}", id),
            description: String::new(),
            category: category.to_string(),
            url: String::new(),
            duration: "1:00".to_string(),
        }
    }

    fn completed(id: i64, date: &str) -> CompletedProject {
        CompletedProject {
            id,
            title: format!("Done {}", id),
            description: String::new(),
            impact: String::new(),
            completed_date: date.to_string(),
        }
    }

    #[test]
    fn test_text_filter_is_case_insensitive_over_both_fields() {
        let team = vec![
            member(1, "Ada Lovelace", "Team Lead"),
            member(2, "Grace Hopper", "Automation Engineer"),
            member(3, "Alan Turing", "Analyst"),
        ];

        let by_name: Vec<i64> = filter_text(&team, "HOPPER").iter().map(|m| m.id).collect();
        assert_eq!(by_name, vec![2]);

        let by_role: Vec<i64> = filter_text(&team, "lead").iter().map(|m| m.id).collect();
        assert_eq!(by_role, vec![1]);
    }

    #[test]
    fn test_empty_query_is_identity_and_filter_is_idempotent() {
        let team = vec![
            member(1, "Ada Lovelace", "Team Lead"),
            member(2, "Grace Hopper", "Engineer"),
            member(3, "Alan Turing", "Analyst"),
        ];

        let all: Vec<i64> = filter_text(&team, "").iter().map(|m| m.id).collect();
        assert_eq!(all, vec![1, 2, 3]);

        let once = filter_text(&team, "an");
        let twice = filter_text(once.iter().copied(), "an");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_resources_search_title_and_description() {
        let resources = vec![Resource {
            id: 1,
            title: "Team Handbook".to_string(),
            description: "Processes and best practices".to_string(),
            kind: ResourceType::GoogleDoc,
            url: String::new(),
        }];
        assert_eq!(filter_text(&resources, "best PRACTICES").len(), 1);
        assert!(filter_text(&resources, "Google").is_empty());
    }

    #[test]
    fn test_project_status_and_text_filters_combine() {
        let projects = vec![
            project(1, "Invoice bot", ProjectStatus::InProgress),
            project(2, "Ledger sync", ProjectStatus::Planning),
            project(3, "Invoice archive", ProjectStatus::Planning),
        ];

        let planning: Vec<i64> = filter_projects(&projects, &"planning".parse().unwrap(), "")
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(planning, vec![2, 3]);

        let planning_invoices: Vec<i64> =
            filter_projects(&projects, &"planning".parse().unwrap(), "invoice")
                .iter()
                .map(|p| p.id)
                .collect();
        assert_eq!(planning_invoices, vec![3]);

        assert_eq!(filter_projects(&projects, &StatusFilter::All, "").len(), 3);
        assert!("finished".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_video_categories_are_distinct_in_first_seen_order() {
        let videos = vec![
            video(1, "Tutorial"),
            video(2, "Overview"),
            video(3, "Tutorial"),
        ];
        assert_eq!(video_categories(&videos), vec!["all", "Tutorial", "Overview"]);
        assert_eq!(video_categories(&[]), vec!["all"]);

        let tutorials: Vec<i64> = filter_videos(&videos, &CategoryFilter::new("Tutorial"))
            .iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(tutorials, vec![1, 3]);
        assert_eq!(filter_videos(&videos, &CategoryFilter::new("all")).len(), 3);
    }

    #[test]
    fn test_newsletters_sort_year_then_quarter_with_unparsable_last() {
        let newsletters = vec![
            newsletter(1, "Q1'25"),
            newsletter(2, "Q4'24"),
            newsletter(3, "Q2'25"),
            newsletter(4, "bogus"),
        ];

        let order: Vec<&str> = sort_newsletters(&newsletters)
            .iter()
            .map(|n| n.quarter.as_str())
            .collect();
        assert_eq!(order, vec!["Q2'25", "Q1'25", "Q4'24", "bogus"]);
    }

    #[test]
    fn test_quarter_key_accepts_curly_or_missing_apostrophe() {
        assert_eq!(QuarterKey::parse("Q3’26"), QuarterKey { year: 26, quarter: 3 });
        assert_eq!(QuarterKey::parse("Q2 25"), QuarterKey::default());
        assert_eq!(QuarterKey::parse("Q225"), QuarterKey { year: 25, quarter: 2 });
        assert_eq!(
            QuarterKey::parse("Newsletter Q4'25"),
            QuarterKey { year: 25, quarter: 4 }
        );
    }

    #[test]
    fn test_completed_ordering_by_view_mode() {
        let items = vec![
            completed(1, "2025-03-01"),
            completed(2, "not a date"),
            completed(3, "2025-12-15"),
        ];

        let grid: Vec<i64> = order_completed(&items, ViewMode::Grid).iter().map(|c| c.id).collect();
        assert_eq!(grid, vec![1, 2, 3]);

        let timeline: Vec<i64> = order_completed(&items, ViewMode::Timeline)
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(timeline, vec![3, 1, 2]);
        assert_eq!(items[0].id, 1);
    }
}
