//! Projection of the admin panel's active tab.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::display_date;
use crate::models::{About, Document, ProjectStatus, ResourceType};

/// Tabs of the admin panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminTab {
    Team,
    Projects,
    Completed,
    Videos,
    Newsletters,
    Resources,
    About,
    Settings,
}

impl AdminTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminTab::Team => "team",
            AdminTab::Projects => "projects",
            AdminTab::Completed => "completed",
            AdminTab::Videos => "videos",
            AdminTab::Newsletters => "newsletters",
            AdminTab::Resources => "resources",
            AdminTab::About => "about",
            AdminTab::Settings => "settings",
        }
    }
}

impl fmt::Display for AdminTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "team" => Ok(AdminTab::Team),
            "projects" => Ok(AdminTab::Projects),
            "completed" => Ok(AdminTab::Completed),
            "videos" => Ok(AdminTab::Videos),
            "newsletters" => Ok(AdminTab::Newsletters),
            "resources" => Ok(AdminTab::Resources),
            "about" => Ok(AdminTab::About),
            "settings" => Ok(AdminTab::Settings),
            other => Err(format!("Unknown admin tab: {}", other)),
        }
    }
}

/// One row of the management list above each admin form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminListItem {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
    /// Team rows only: a White Pages profile is attached
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub linked: bool,
}

impl AdminListItem {
    fn plain(id: i64, title: &str, subtitle: String) -> Self {
        Self {
            id,
            title: title.to_string(),
            subtitle,
            image: None,
            initials: None,
            linked: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminView {
    pub tab: AdminTab,
    pub items: Vec<AdminListItem>,
    /// Choices for the tab's select field (project status, resource type)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Current values for the About form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<About>,
    /// Current value for the settings form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monday_url: Option<String>,
}

pub fn render_admin(document: &Document, tab: AdminTab) -> AdminView {
    let mut view = AdminView {
        tab,
        items: Vec::new(),
        options: Vec::new(),
        about: None,
        monday_url: None,
    };

    match tab {
        AdminTab::Team => {
            view.items = document
                .team
                .iter()
                .map(|member| AdminListItem {
                    id: member.id,
                    title: member.name.clone(),
                    subtitle: member.role.clone(),
                    image: (!member.image.is_empty()).then(|| member.image.clone()),
                    initials: Some(member.initials()),
                    linked: !member.white_pages_url.is_empty(),
                })
                .collect();
        }
        AdminTab::Projects => {
            view.items = document
                .projects
                .iter()
                .map(|p| AdminListItem::plain(p.id, &p.title, p.status.as_str().to_string()))
                .collect();
            view.options = ProjectStatus::OPTIONS
                .iter()
                .map(|s| s.as_str().to_string())
                .collect();
        }
        AdminTab::Completed => {
            view.items = document
                .completed
                .iter()
                .map(|c| AdminListItem::plain(c.id, &c.title, display_date(&c.completed_date)))
                .collect();
        }
        AdminTab::Videos => {
            view.items = document
                .videos
                .iter()
                .map(|v| {
                    AdminListItem::plain(v.id, &v.title, format!("{} • {}", v.category, v.duration))
                })
                .collect();
        }
        AdminTab::Newsletters => {
            view.items = document
                .newsletters
                .iter()
                .map(|n| AdminListItem::plain(n.id, &n.title, n.quarter.clone()))
                .collect();
        }
        AdminTab::Resources => {
            view.items = document
                .resources
                .iter()
                .map(|r| AdminListItem::plain(r.id, &r.title, r.kind.to_string()))
                .collect();
            view.options = ResourceType::OPTIONS
                .iter()
                .map(|t| t.as_str().to_string())
                .collect();
        }
        AdminTab::About => {
            view.about = Some(document.about.clone());
        }
        AdminTab::Settings => {
            view.monday_url = Some(document.settings.monday_url.clone().unwrap_or_default());
        }
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed_document;

    #[test]
    fn test_tab_names_round_trip() {
        for name in [
            "team",
            "projects",
            "completed",
            "videos",
            "newsletters",
            "resources",
            "about",
            "settings",
        ] {
            let tab: AdminTab = name.parse().unwrap();
            assert_eq!(tab.as_str(), name);
        }
        assert!("widgets".parse::<AdminTab>().is_err());
    }

    #[test]
    fn test_team_rows_show_avatar_and_link_flag() {
        let mut doc = seed_document();
        doc.team[0].white_pages_url = "https://whitepages.example.com/me".to_string();
        let view = render_admin(&doc, AdminTab::Team);

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].initials.as_deref(), Some("YN"));
        assert!(view.items[0].image.is_none());
        assert!(view.items[0].linked);
    }

    #[test]
    fn test_list_subtitles_per_tab() {
        let doc = seed_document();

        let videos = render_admin(&doc, AdminTab::Videos);
        assert_eq!(videos.items[0].subtitle, "Tutorial • 5:30");

        let completed = render_admin(&doc, AdminTab::Completed);
        assert_eq!(completed.items[0].subtitle, "12/15/2025");

        let projects = render_admin(&doc, AdminTab::Projects);
        assert_eq!(projects.items[0].subtitle, "in-progress");
        assert_eq!(projects.options.len(), 4);

        let resources = render_admin(&doc, AdminTab::Resources);
        assert_eq!(resources.options.last().map(String::as_str), Some("Other"));
    }

    #[test]
    fn test_singleton_tabs_carry_form_values() {
        let doc = seed_document();

        let about = render_admin(&doc, AdminTab::About);
        assert!(about.items.is_empty());
        assert_eq!(about.about.as_ref(), Some(&doc.about));

        let settings = render_admin(&doc, AdminTab::Settings);
        assert_eq!(settings.monday_url.as_deref(), Some(""));
    }
}
