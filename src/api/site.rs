//! Public site endpoint.

use axum::extract::{Query, State};
use serde::Deserialize;

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::query::{CategoryFilter, StatusFilter, ViewMode};
use crate::render::{render_site, SiteView, UiState};
use crate::AppState;

/// Filter selections sent by the page.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteQuery {
    #[serde(default)]
    pub team_query: Option<String>,
    #[serde(default)]
    pub project_query: Option<String>,
    #[serde(default)]
    pub project_status: Option<String>,
    #[serde(default)]
    pub resource_query: Option<String>,
    #[serde(default)]
    pub video_category: Option<String>,
    #[serde(default)]
    pub view: Option<ViewMode>,
}

impl SiteQuery {
    pub fn into_ui_state(self) -> Result<UiState, AppError> {
        let project_status = match self.project_status.as_deref() {
            Some(status) if !status.is_empty() => status
                .parse::<StatusFilter>()
                .map_err(AppError::BadRequest)?,
            _ => StatusFilter::All,
        };

        Ok(UiState {
            team_query: self.team_query.unwrap_or_default(),
            project_query: self.project_query.unwrap_or_default(),
            project_status,
            resource_query: self.resource_query.unwrap_or_default(),
            video_category: self
                .video_category
                .as_deref()
                .map(CategoryFilter::new)
                .unwrap_or_default(),
            view_mode: self.view.unwrap_or_default(),
            admin_tab: None,
        })
    }
}

/// GET /api/site - Render every public section.
pub async fn get_site(
    State(state): State<AppState>,
    Query(query): Query<SiteQuery>,
) -> ApiResult<SiteView> {
    let store = state.store.lock().await;
    let last_updated = store.last_updated();

    let ui = match query.into_ui_state() {
        Ok(ui) => ui,
        Err(e) => return error(e, last_updated),
    };

    let view = render_site(store.document(), &ui, &last_updated);
    success(view, last_updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectStatus;

    #[test]
    fn test_empty_query_is_default_state() {
        let ui = SiteQuery::default().into_ui_state().unwrap();
        assert_eq!(ui, UiState::default());
    }

    #[test]
    fn test_query_parses_filters() {
        let query = SiteQuery {
            project_status: Some("on-hold".to_string()),
            video_category: Some("Tutorial".to_string()),
            view: Some(ViewMode::Timeline),
            ..Default::default()
        };
        let ui = query.into_ui_state().unwrap();

        assert_eq!(ui.project_status, StatusFilter::Only(ProjectStatus::OnHold));
        assert_eq!(ui.video_category.as_str(), "Tutorial");
        assert_eq!(ui.view_mode, ViewMode::Timeline);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let query = SiteQuery {
            project_status: Some("archived".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            query.into_ui_state(),
            Err(AppError::BadRequest(_))
        ));
    }
}
