//! Admin form payloads and their coercion into record drafts.

use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{
    About, NewCompletedProject, NewNewsletter, NewProject, NewResource, NewTeamMember, NewVideo,
    ProjectStatus, ResourceType,
};
use crate::render::AdminTab;

/// Impact text recorded when a project is created as completed without one.
pub const DEFAULT_COMPLETED_IMPACT: &str = "Project successfully completed.";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamForm {
    /// Present when editing an existing member
    #[serde(default, alias = "id", deserialize_with = "optional_id")]
    pub member_id: Option<i64>,
    pub name: String,
    pub role: String,
    /// Data URI of a freshly uploaded photo
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub white_pages_url: Option<String>,
}

impl TeamForm {
    pub fn into_draft(self) -> NewTeamMember {
        NewTeamMember {
            name: self.name,
            role: self.role,
            image: self.image.unwrap_or_default(),
            white_pages_url: self.white_pages_url.unwrap_or_default(),
        }
    }
}

/// Numeric inputs arrive either as JSON numbers or as the raw input text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(i64),
    Text(String),
}

impl NumberInput {
    fn as_integer(&self) -> Option<i64> {
        match self {
            NumberInput::Number(n) => Some(*n),
            NumberInput::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// Parse the hidden id field of a form; blank means the form creates a record.
pub fn parse_record_id(text: &str) -> Result<Option<i64>, String> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse()
        .map(Some)
        .map_err(|_| format!("Invalid record id: {}", text))
}

fn optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberInput>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberInput::Number(id)) => Ok(Some(id)),
        Some(NumberInput::Text(text)) => parse_record_id(&text).map_err(de::Error::custom),
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectForm {
    #[serde(default, deserialize_with = "optional_id")]
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub progress: Option<NumberInput>,
    pub owner: String,
    pub start_date: String,
    #[serde(default)]
    pub target_end_date: Option<String>,
    /// Only read when the status is `completed`
    #[serde(default)]
    pub impact: Option<String>,
}

impl ProjectForm {
    /// Progress as a percentage clamped to 0..=100; blank or non-numeric input is dropped.
    pub fn progress(&self) -> Option<u8> {
        self.progress
            .as_ref()
            .and_then(NumberInput::as_integer)
            .map(|value| value.clamp(0, 100) as u8)
    }

    pub fn to_draft(&self) -> NewProject {
        NewProject {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status.clone(),
            progress: self.progress(),
            owner: self.owner.clone(),
            start_date: self.start_date.clone(),
            target_end_date: self.target_end_date.clone().filter(|d| !d.is_empty()),
        }
    }

    /// The completed-project twin written alongside a project created as completed.
    pub fn completed_twin(&self, today: &str) -> NewCompletedProject {
        let impact = self
            .impact
            .as_deref()
            .map(str::trim)
            .filter(|impact| !impact.is_empty())
            .unwrap_or(DEFAULT_COMPLETED_IMPACT);
        NewCompletedProject {
            title: self.title.clone(),
            description: self.description.clone(),
            impact: impact.to_string(),
            completed_date: today.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedForm {
    #[serde(default, deserialize_with = "optional_id")]
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub impact: String,
    pub completed_date: String,
}

impl CompletedForm {
    pub fn into_draft(self) -> NewCompletedProject {
        NewCompletedProject {
            title: self.title,
            description: self.description,
            impact: self.impact,
            completed_date: self.completed_date,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoForm {
    #[serde(default, deserialize_with = "optional_id")]
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub category: String,
    pub url: String,
    pub duration: String,
}

impl VideoForm {
    pub fn into_draft(self) -> NewVideo {
        NewVideo {
            title: self.title,
            description: self.description,
            category: self.category,
            url: self.url,
            duration: self.duration,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterForm {
    #[serde(default, deserialize_with = "optional_id")]
    pub id: Option<i64>,
    pub title: String,
    pub quarter: String,
    pub url: String,
}

impl NewsletterForm {
    pub fn into_draft(self) -> NewNewsletter {
        NewNewsletter {
            title: self.title,
            quarter: self.quarter,
            url: self.url,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceForm {
    #[serde(default, deserialize_with = "optional_id")]
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub url: String,
}

impl ResourceForm {
    pub fn into_draft(self) -> NewResource {
        NewResource {
            title: self.title,
            description: self.description,
            kind: self.kind,
            url: self.url,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsForm {
    #[serde(default)]
    pub monday_url: Option<String>,
}

/// A submitted admin form, one variant per tab.
#[derive(Debug, Clone)]
pub enum AdminForm {
    Team(TeamForm),
    Project(ProjectForm),
    Completed(CompletedForm),
    Video(VideoForm),
    Newsletter(NewsletterForm),
    Resource(ResourceForm),
    About(About),
    Settings(SettingsForm),
}

impl AdminForm {
    /// Decode the JSON body posted for `tab`.
    pub fn from_json(tab: AdminTab, body: serde_json::Value) -> Result<Self, AppError> {
        let form = match tab {
            AdminTab::Team => AdminForm::Team(serde_json::from_value(body)?),
            AdminTab::Projects => AdminForm::Project(serde_json::from_value(body)?),
            AdminTab::Completed => AdminForm::Completed(serde_json::from_value(body)?),
            AdminTab::Videos => AdminForm::Video(serde_json::from_value(body)?),
            AdminTab::Newsletters => AdminForm::Newsletter(serde_json::from_value(body)?),
            AdminTab::Resources => AdminForm::Resource(serde_json::from_value(body)?),
            AdminTab::About => AdminForm::About(serde_json::from_value(body)?),
            AdminTab::Settings => AdminForm::Settings(serde_json::from_value(body)?),
        };
        Ok(form)
    }

    pub fn tab(&self) -> AdminTab {
        match self {
            AdminForm::Team(_) => AdminTab::Team,
            AdminForm::Project(_) => AdminTab::Projects,
            AdminForm::Completed(_) => AdminTab::Completed,
            AdminForm::Video(_) => AdminTab::Videos,
            AdminForm::Newsletter(_) => AdminTab::Newsletters,
            AdminForm::Resource(_) => AdminTab::Resources,
            AdminForm::About(_) => AdminTab::About,
            AdminForm::Settings(_) => AdminTab::Settings,
        }
    }

    /// Required-field check applied where forms enter the backend.
    pub fn validate(&self) -> Result<(), AppError> {
        let required: Vec<(&str, &String)> = match self {
            AdminForm::Team(f) => vec![("name", &f.name), ("role", &f.role)],
            AdminForm::Project(f) => vec![
                ("title", &f.title),
                ("description", &f.description),
                ("owner", &f.owner),
                ("startDate", &f.start_date),
            ],
            AdminForm::Completed(f) => vec![
                ("title", &f.title),
                ("description", &f.description),
                ("impact", &f.impact),
                ("completedDate", &f.completed_date),
            ],
            AdminForm::Video(f) => vec![
                ("title", &f.title),
                ("description", &f.description),
                ("category", &f.category),
                ("url", &f.url),
                ("duration", &f.duration),
            ],
            AdminForm::Newsletter(f) => vec![
                ("title", &f.title),
                ("quarter", &f.quarter),
                ("url", &f.url),
            ],
            AdminForm::Resource(f) => vec![
                ("title", &f.title),
                ("description", &f.description),
                ("url", &f.url),
            ],
            AdminForm::About(f) => vec![
                ("mission", &f.mission),
                ("whatWeDo", &f.what_we_do),
                ("impact", &f.impact),
            ],
            AdminForm::Settings(_) => Vec::new(),
        };

        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(AppError::Validation(format!("{} is required", field)));
        }

        match self {
            AdminForm::Project(f) if !f.status.is_listed() => Err(AppError::Validation(format!(
                "Unknown project status: {}",
                f.status
            ))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project_form(progress: serde_json::Value) -> ProjectForm {
        serde_json::from_value(json!({
            "title": "Close automation",
            "description": "Automate the month-end close",
            "status": "planning",
            "progress": progress,
            "owner": "Ada",
            "startDate": "2026-02-01"
        }))
        .unwrap()
    }

    #[test]
    fn test_progress_coercion() {
        assert_eq!(project_form(json!(40)).progress(), Some(40));
        assert_eq!(project_form(json!("75")).progress(), Some(75));
        assert_eq!(project_form(json!(250)).progress(), Some(100));
        assert_eq!(project_form(json!("-5")).progress(), Some(0));
        assert_eq!(project_form(json!("")).progress(), None);
        assert_eq!(project_form(json!(null)).progress(), None);
    }

    #[test]
    fn test_completed_twin_defaults_impact() {
        let form = project_form(json!(100));
        let twin = form.completed_twin("2026-03-04");
        assert_eq!(twin.impact, DEFAULT_COMPLETED_IMPACT);
        assert_eq!(twin.completed_date, "2026-03-04");
        assert_eq!(twin.title, "Close automation");
    }

    #[test]
    fn test_from_json_dispatches_on_tab() {
        let form = AdminForm::from_json(
            AdminTab::Resources,
            json!({"title": "Guide", "description": "How to", "type": "User Guide", "url": "https://x"}),
        )
        .unwrap();
        assert_eq!(form.tab(), AdminTab::Resources);

        let err = AdminForm::from_json(AdminTab::Videos, json!({"title": "only a title"}));
        assert!(matches!(err, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_validate_reports_first_blank_field() {
        let form = AdminForm::Team(TeamForm {
            name: "Ada".to_string(),
            role: "  ".to_string(),
            ..Default::default()
        });
        match form.validate() {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "role is required"),
            other => panic!("expected validation error, got {:?}", other),
        }

        let settings = AdminForm::Settings(SettingsForm { monday_url: None });
        assert!(settings.validate().is_ok());

        let mut project = project_form(json!(10));
        project.status = ProjectStatus::Unlisted("archived".to_string());
        match AdminForm::Project(project).validate() {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Unknown project status: archived"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_ids_accept_numbers_strings_and_blank() {
        let team = |member_id: serde_json::Value| {
            AdminForm::from_json(
                AdminTab::Team,
                json!({"memberId": member_id, "name": "Ada", "role": "Analyst"}),
            )
        };

        match team(json!("")).unwrap() {
            AdminForm::Team(form) => assert_eq!(form.member_id, None),
            other => panic!("expected team form, got {:?}", other),
        }
        match team(json!("1700000000000")).unwrap() {
            AdminForm::Team(form) => assert_eq!(form.member_id, Some(1_700_000_000_000)),
            other => panic!("expected team form, got {:?}", other),
        }
        match team(json!(42)).unwrap() {
            AdminForm::Team(form) => assert_eq!(form.member_id, Some(42)),
            other => panic!("expected team form, got {:?}", other),
        }
        assert!(matches!(team(json!("abc")), Err(AppError::BadRequest(_))));

        let video: VideoForm = serde_json::from_value(json!({
            "id": " 17 ",
            "title": "t",
            "description": "d",
            "category": "c",
            "url": "u",
            "duration": "1:00"
        }))
        .unwrap();
        assert_eq!(video.id, Some(17));
    }
}
