//! View projections for every section of the page.
//!
//! Rendering is a pure function of the document and the UI state the page
//! sends along; nothing here touches the store.

mod admin;

pub use admin::{render_admin, AdminTab, AdminView};

use serde::{Deserialize, Serialize};

use crate::models::{
    About, CompletedProject, Document, Project, Resource, ResourceType, TeamMember, Video,
};
use crate::query::{self, CategoryFilter, StatusFilter, ViewMode};

/// Selections the page is currently showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub team_query: String,
    pub project_query: String,
    pub project_status: StatusFilter,
    pub resource_query: String,
    pub video_category: CategoryFilter,
    pub view_mode: ViewMode,
    /// Open admin tab, `None` while the panel is closed
    pub admin_tab: Option<AdminTab>,
}

/// Placeholder shown instead of an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub icon: &'static str,
    pub message: &'static str,
}

/// Cards of one section, or the empty state when there are none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing<T> {
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
}

impl<T> Listing<T> {
    fn new(items: Vec<T>, icon: &'static str, message: &'static str) -> Self {
        let empty_state = items.is_empty().then_some(EmptyState { icon, message });
        Self { items, empty_state }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamCard {
    pub id: i64,
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub initials: String,
    /// Set only for clickable cards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub status_label: String,
    pub owner: String,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsView {
    pub listing: Listing<ProjectCard>,
    /// Link to the Monday.com board, absent when not configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monday_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedCard {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub impact: String,
    pub completed_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedView {
    pub view_mode: ViewMode,
    pub listing: Listing<CompletedCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoCard {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub url: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryButton {
    pub value: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideosView {
    pub categories: Vec<CategoryButton>,
    pub listing: Listing<VideoCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsletterOption {
    pub id: i64,
    pub title: String,
    pub url: String,
}

/// The newsletter dropdown; opening stays disabled until a choice is made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsletterPicker {
    pub placeholder: &'static str,
    pub options: Vec<NewsletterOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceIcon {
    Document,
    Spreadsheet,
    Presentation,
    File,
}

impl From<&ResourceType> for ResourceIcon {
    fn from(kind: &ResourceType) -> Self {
        match kind {
            ResourceType::GoogleDoc => ResourceIcon::Document,
            ResourceType::GoogleSheet => ResourceIcon::Spreadsheet,
            ResourceType::GoogleSlides => ResourceIcon::Presentation,
            _ => ResourceIcon::File,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCard {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub icon: ResourceIcon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Open plus completed projects
    pub total_projects: usize,
    pub completed_projects: usize,
    pub total_videos: usize,
    pub total_resources: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroStats {
    pub projects: usize,
    pub completed: usize,
    pub team: usize,
}

/// Everything the page displays, recomputed from scratch on each call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteView {
    pub about: About,
    pub team: Listing<TeamCard>,
    pub projects: ProjectsView,
    pub completed: CompletedView,
    pub videos: VideosView,
    pub newsletters: NewsletterPicker,
    pub resources: Listing<ResourceCard>,
    pub stats: Stats,
    pub hero: HeroStats,
    pub last_updated: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<AdminView>,
}

pub fn render_site(document: &Document, ui: &UiState, last_updated: &str) -> SiteView {
    SiteView {
        about: document.about.clone(),
        team: render_team(&document.team, &ui.team_query),
        projects: render_projects(document, ui),
        completed: render_completed(&document.completed, ui.view_mode),
        videos: render_videos(&document.videos, &ui.video_category),
        newsletters: render_newsletters(document),
        resources: render_resources(&document.resources, &ui.resource_query),
        stats: Stats {
            total_projects: document.projects.len() + document.completed.len(),
            completed_projects: document.completed.len(),
            total_videos: document.videos.len(),
            total_resources: document.resources.len(),
        },
        hero: HeroStats {
            projects: document.projects.len(),
            completed: document.completed.len(),
            team: document.team.len(),
        },
        last_updated: last_updated.to_string(),
        admin: ui.admin_tab.map(|tab| render_admin(document, tab)),
    }
}

/// Locale-style `M/D/YYYY`; values that are not ISO dates pass through unchanged.
pub fn display_date(value: &str) -> String {
    match query::parse_iso_date(value) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => value.to_string(),
    }
}

fn render_team(team: &[TeamMember], query: &str) -> Listing<TeamCard> {
    let cards = query::filter_text(team, query)
        .into_iter()
        .map(|member| TeamCard {
            id: member.id,
            name: member.name.clone(),
            role: member.role.clone(),
            image: non_empty(&member.image),
            initials: member.initials(),
            profile_url: member
                .is_clickable()
                .then(|| member.white_pages_url.clone()),
        })
        .collect();
    Listing::new(cards, "👥", "No team members found.")
}

fn render_projects(document: &Document, ui: &UiState) -> ProjectsView {
    let cards = query::filter_projects(
        &document.projects,
        &ui.project_status,
        &ui.project_query,
    )
    .into_iter()
    .map(project_card)
    .collect();
    ProjectsView {
        listing: Listing::new(cards, "📋", "No projects found."),
        monday_url: document.settings.monday_link().map(str::to_string),
    }
}

fn project_card(project: &Project) -> ProjectCard {
    ProjectCard {
        id: project.id,
        title: project.title.clone(),
        description: project.description.clone(),
        status: project.status.as_str().to_string(),
        status_label: project.status.label(),
        owner: project.owner.clone(),
        start_date: display_date(&project.start_date),
        target_end_date: project
            .target_end_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(display_date),
        progress: project.progress,
    }
}

fn render_completed(completed: &[CompletedProject], mode: ViewMode) -> CompletedView {
    let cards = query::order_completed(completed, mode)
        .into_iter()
        .map(|project| CompletedCard {
            id: project.id,
            title: project.title.clone(),
            description: project.description.clone(),
            impact: project.impact.clone(),
            completed_date: display_date(&project.completed_date),
        })
        .collect();
    CompletedView {
        view_mode: mode,
        listing: Listing::new(cards, "✅", "No completed projects yet."),
    }
}

fn render_videos(videos: &[Video], category: &CategoryFilter) -> VideosView {
    let categories = query::video_categories(videos)
        .into_iter()
        .map(|value| CategoryButton {
            label: if value == query::ALL {
                "All Videos".to_string()
            } else {
                value.clone()
            },
            active: value == category.as_str(),
            value,
        })
        .collect();
    let cards = query::filter_videos(videos, category)
        .into_iter()
        .map(|video| VideoCard {
            id: video.id,
            title: video.title.clone(),
            description: video.description.clone(),
            category: video.category.clone(),
            url: video.url.clone(),
            duration: video.duration.clone(),
        })
        .collect();
    VideosView {
        categories,
        listing: Listing::new(cards, "🎬", "No videos found."),
    }
}

fn render_newsletters(document: &Document) -> NewsletterPicker {
    let options: Vec<NewsletterOption> = query::sort_newsletters(&document.newsletters)
        .into_iter()
        .map(|n| NewsletterOption {
            id: n.id,
            title: n.title.clone(),
            url: n.url.clone(),
        })
        .collect();
    let placeholder = if options.is_empty() {
        "No newsletters available"
    } else {
        "-- Choose a newsletter --"
    };
    NewsletterPicker {
        placeholder,
        options,
    }
}

fn render_resources(resources: &[Resource], query: &str) -> Listing<ResourceCard> {
    let cards = query::filter_text(resources, query)
        .into_iter()
        .map(|resource| ResourceCard {
            id: resource.id,
            title: resource.title.clone(),
            description: resource.description.clone(),
            kind: resource.kind.to_string(),
            url: resource.url.clone(),
            icon: ResourceIcon::from(&resource.kind),
        })
        .collect();
    Listing::new(cards, "📚", "No resources found.")
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
