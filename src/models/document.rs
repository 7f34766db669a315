//! The root document holding every collection of the site.

use serde::{Deserialize, Serialize};

use super::{CompletedProject, Newsletter, Project, Resource, TeamMember, Video};

/// Free-text blurbs shown in the About section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub mission: String,
    pub what_we_do: String,
    pub impact: String,
}

/// Site-wide settings edited from the admin panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Monday.com board link; empty or absent hides the call-to-action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monday_url: Option<String>,
}

impl Settings {
    /// The board URL when one is configured.
    pub fn monday_link(&self) -> Option<&str> {
        self.monday_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// The single persisted document.
///
/// Collections missing from older saved data deserialize as empty so every
/// repository always finds its collection present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub newsletters: Vec<Newsletter>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub completed: Vec<CompletedProject>,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl Document {
    /// Largest id across all collections, used to seed the id generator.
    pub fn max_id(&self) -> i64 {
        let ids = self
            .team
            .iter()
            .map(|r| r.id)
            .chain(self.newsletters.iter().map(|r| r.id))
            .chain(self.projects.iter().map(|r| r.id))
            .chain(self.completed.iter().map(|r| r.id))
            .chain(self.videos.iter().map(|r| r.id))
            .chain(self.resources.iter().map(|r| r.id));
        ids.max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_collections_default_to_empty() {
        let json = r#"{
            "about": {"mission": "m", "whatWeDo": "w", "impact": "i"},
            "team": [{"id": 7, "name": "Ada Lovelace", "role": "Lead", "image": "", "whitePagesUrl": ""}]
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();

        assert!(doc.newsletters.is_empty());
        assert!(doc.projects.is_empty());
        assert!(doc.settings.monday_link().is_none());
        assert_eq!(doc.team.len(), 1);
        assert_eq!(doc.max_id(), 7);
    }

    #[test]
    fn test_empty_monday_url_is_hidden() {
        let settings = Settings {
            monday_url: Some(String::new()),
        };
        assert!(settings.monday_link().is_none());

        let settings = Settings {
            monday_url: Some("https://example.monday.com/boards/1".to_string()),
        };
        assert_eq!(
            settings.monday_link(),
            Some("https://example.monday.com/boards/1")
        );
    }
}
