//! Admin panel controller.
//!
//! Takes submitted forms, applies them through the store's repositories,
//! persists the document and returns the freshly rendered page together with
//! the notification to flash.

mod forms;

pub use forms::{parse_record_id, AdminForm, ProjectForm, TeamForm};

use chrono::Utc;
use serde::Serialize;

use crate::errors::AppError;
use crate::images::PendingImage;
use crate::models::{ProjectStatus, TeamMember};
use crate::render::{render_site, AdminTab, SiteView, UiState};
use crate::repository::{Draft, Record, Repository};
use crate::store::Store;

/// Asks the operator to confirm a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Result of a successful admin mutation.
#[derive(Debug, Clone, Serialize)]
pub struct AdminOutcome {
    pub notification: String,
    /// Public sections plus the list of the tab that was just edited
    pub view: SiteView,
}

/// Current values for the team form when editing a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamFormPrefill {
    pub member_id: i64,
    pub name: String,
    pub role: String,
    pub white_pages_url: String,
    pub image: String,
}

impl From<&TeamMember> for TeamFormPrefill {
    fn from(member: &TeamMember) -> Self {
        Self {
            member_id: member.id,
            name: member.name.clone(),
            role: member.role.clone(),
            white_pages_url: member.white_pages_url.clone(),
            image: member.image.clone(),
        }
    }
}

/// Singular noun for the records of a tab; `None` for the singleton tabs.
fn record_noun(tab: AdminTab) -> Option<&'static str> {
    match tab {
        AdminTab::Team => Some("team member"),
        AdminTab::Projects => Some("project"),
        AdminTab::Completed => Some("completed project"),
        AdminTab::Videos => Some("video"),
        AdminTab::Newsletters => Some("newsletter"),
        AdminTab::Resources => Some("resource"),
        AdminTab::About | AdminTab::Settings => None,
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Prompt shown before deleting a record of `tab`.
pub fn delete_prompt(tab: AdminTab) -> Option<String> {
    record_noun(tab).map(|noun| format!("Are you sure you want to delete this {}?", noun))
}

pub struct AdminController<'a> {
    store: &'a mut Store,
}

impl<'a> AdminController<'a> {
    pub fn new(store: &'a mut Store) -> Self {
        Self { store }
    }

    /// Apply a form, persist, and re-render with the form's tab active.
    pub async fn submit(
        &mut self,
        form: AdminForm,
        ui: &UiState,
    ) -> Result<AdminOutcome, AppError> {
        let tab = form.tab();
        tracing::info!("Admin submit on {} tab", tab);

        let notification = match form {
            AdminForm::Team(form) => {
                create_or_update(self.store.team(), form.member_id, form.into_draft(), tab)
            }
            AdminForm::Project(form) => self.apply_project(form),
            AdminForm::Completed(form) => {
                create_or_update(self.store.completed(), form.id, form.into_draft(), tab)
            }
            AdminForm::Video(form) => {
                create_or_update(self.store.videos(), form.id, form.into_draft(), tab)
            }
            AdminForm::Newsletter(form) => {
                create_or_update(self.store.newsletters(), form.id, form.into_draft(), tab)
            }
            AdminForm::Resource(form) => {
                create_or_update(self.store.resources(), form.id, form.into_draft(), tab)
            }
            AdminForm::About(about) => {
                self.store.set_about(about);
                "About section updated successfully!".to_string()
            }
            AdminForm::Settings(form) => {
                self.store.set_monday_url(form.monday_url.unwrap_or_default());
                "Settings updated successfully!".to_string()
            }
        };

        self.finish(tab, notification, ui).await
    }

    /// Submit the team form once its photo has finished encoding.
    pub async fn submit_team_with_image(
        &mut self,
        mut form: TeamForm,
        pending: Option<PendingImage>,
        ui: &UiState,
    ) -> Result<AdminOutcome, AppError> {
        if let Some(pending) = pending {
            form.image = Some(pending.wait().await?);
        }
        self.submit(AdminForm::Team(form), ui).await
    }

    /// Delete a record after confirmation.
    ///
    /// Declining returns `Ok(None)` and leaves the store untouched.
    pub async fn delete(
        &mut self,
        tab: AdminTab,
        id: i64,
        confirm: impl Confirm,
        ui: &UiState,
    ) -> Result<Option<AdminOutcome>, AppError> {
        let (Some(noun), Some(prompt)) = (record_noun(tab), delete_prompt(tab)) else {
            return Err(AppError::BadRequest(format!(
                "The {} tab has no records to delete",
                tab
            )));
        };

        if !confirm.confirm(&prompt) {
            tracing::debug!("Delete of {} {} declined", noun, id);
            return Ok(None);
        }

        let removed = match tab {
            AdminTab::Team => self.store.team().delete(id),
            AdminTab::Projects => self.store.projects().delete(id),
            AdminTab::Completed => self.store.completed().delete(id),
            AdminTab::Videos => self.store.videos().delete(id),
            AdminTab::Newsletters => self.store.newsletters().delete(id),
            AdminTab::Resources => self.store.resources().delete(id),
            AdminTab::About | AdminTab::Settings => false,
        };
        tracing::info!("Deleted {} {} (found: {})", noun, id, removed);

        let notification = format!("{} deleted", capitalize(noun));
        self.finish(tab, notification, ui).await.map(Some)
    }

    /// Prefill for editing a team member; `None` when the id is unknown.
    pub fn edit_team_member(&mut self, id: i64) -> Option<TeamFormPrefill> {
        self.store.team().get(id).map(TeamFormPrefill::from)
    }

    fn apply_project(&mut self, form: ProjectForm) -> String {
        if form.id.is_none() && form.status == ProjectStatus::Completed {
            let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
            let twin = self.store.completed().create(form.completed_twin(&today));
            tracing::info!("Recorded completed project {} for new project", twin.id);
        }
        create_or_update(
            self.store.projects(),
            form.id,
            form.to_draft(),
            AdminTab::Projects,
        )
    }

    async fn finish(
        &mut self,
        tab: AdminTab,
        notification: String,
        ui: &UiState,
    ) -> Result<AdminOutcome, AppError> {
        self.store.save().await?;

        let ui = UiState {
            admin_tab: Some(tab),
            ..ui.clone()
        };
        let view = render_site(self.store.document(), &ui, &self.store.last_updated());
        Ok(AdminOutcome { notification, view })
    }
}

/// Create when `id` is absent, otherwise replace the record with that id.
fn create_or_update<R, D>(
    mut repo: Repository<'_, R>,
    id: Option<i64>,
    draft: D,
    tab: AdminTab,
) -> String
where
    R: Record + Clone,
    D: Draft<Record = R>,
{
    match id {
        Some(id) => {
            repo.update(id, draft);
            updated_message(tab)
        }
        None => {
            repo.create(draft);
            added_message(tab)
        }
    }
}

fn added_message(tab: AdminTab) -> String {
    format!(
        "{} added successfully!",
        capitalize(record_noun(tab).unwrap_or("item"))
    )
}

fn updated_message(tab: AdminTab) -> String {
    format!(
        "{} updated successfully!",
        capitalize(record_noun(tab).unwrap_or("item"))
    )
}
