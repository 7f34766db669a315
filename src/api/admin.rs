//! Admin panel API endpoints.

use axum::{
    body::Bytes,
    extract::{Multipart, Path, Query, State},
    http::{header, HeaderMap},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{error, success, ApiResult};
use crate::admin::{
    delete_prompt, parse_record_id, AdminController, AdminForm, AdminOutcome, TeamForm,
    TeamFormPrefill,
};
use crate::errors::AppError;
use crate::images::{ImageEncoder, PendingImage};
use crate::render::{render_admin, AdminTab, AdminView, UiState};
use crate::AppState;

fn parse_tab(tab: &str) -> Result<AdminTab, AppError> {
    tab.parse().map_err(AppError::NotFound)
}

/// GET /api/admin/:tab - List and form values for one tab.
pub async fn get_admin_tab(
    State(state): State<AppState>,
    Path(tab): Path<String>,
) -> ApiResult<AdminView> {
    let store = state.store.lock().await;
    let last_updated = store.last_updated();

    match parse_tab(&tab) {
        Ok(tab) => success(render_admin(store.document(), tab), last_updated),
        Err(e) => error(e, last_updated),
    }
}

/// POST /api/admin/:tab - Submit the tab's form.
pub async fn submit_admin_form(
    State(state): State<AppState>,
    Path(tab): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> ApiResult<AdminOutcome> {
    let mut store = state.store.lock().await;
    let last_updated = store.last_updated();

    let form = match parse_tab(&tab).and_then(|tab| AdminForm::from_json(tab, body)) {
        Ok(form) => form,
        Err(e) => return error(e, last_updated),
    };

    // Validate required fields
    if let Err(e) = form.validate() {
        return error(e, last_updated);
    }

    let result = AdminController::new(&mut store)
        .submit(form, &UiState::default())
        .await;

    match result {
        Ok(outcome) => success(outcome, store.last_updated()),
        Err(e) => error(e, last_updated),
    }
}

/// GET /api/admin/team/:id/edit - Prefill the team form for editing.
pub async fn edit_team_member(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<TeamFormPrefill> {
    let mut store = state.store.lock().await;
    let last_updated = store.last_updated();

    match AdminController::new(&mut store).edit_team_member(id) {
        Some(prefill) => success(prefill, last_updated),
        None => error(
            AppError::NotFound(format!("Team member {} not found", id)),
            last_updated,
        ),
    }
}

fn multipart_error(err: axum::extract::multipart::MultipartError) -> AppError {
    AppError::BadRequest(format!("Invalid multipart body: {}", err))
}

/// Read the team form fields; the photo starts encoding as soon as it arrives.
async fn read_team_form(
    multipart: &mut Multipart,
) -> Result<(TeamForm, Option<PendingImage>), AppError> {
    let mut form = TeamForm::default();
    let mut pending = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();

        if name == "image" {
            let mime = field.content_type().unwrap_or_default().to_string();
            let bytes = field.bytes().await.map_err(multipart_error)?;
            // An empty file input keeps the current photo
            if !bytes.is_empty() {
                pending = Some(ImageEncoder::spawn(bytes.to_vec(), mime)?);
            }
            continue;
        }

        let value = field.text().await.map_err(multipart_error)?;
        match name.as_str() {
            "memberId" | "id" => {
                form.member_id = parse_record_id(&value).map_err(AppError::BadRequest)?
            }
            "name" => form.name = value,
            "role" => form.role = value,
            "whitePagesUrl" => form.white_pages_url = Some(value),
            other => tracing::debug!("Ignoring team form field {}", other),
        }
    }

    Ok((form, pending))
}

/// POST /api/admin/team/form - Team form as multipart with an optional photo file.
pub async fn submit_team_form(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<AdminOutcome> {
    let parsed = read_team_form(&mut multipart).await;

    let mut store = state.store.lock().await;
    let last_updated = store.last_updated();

    let (form, pending) = match parsed {
        Ok(parsed) => parsed,
        Err(e) => return error(e, last_updated),
    };

    // Validate required fields
    if let Err(e) = AdminForm::Team(form.clone()).validate() {
        return error(e, last_updated);
    }

    let result = AdminController::new(&mut store)
        .submit_team_with_image(form, pending, &UiState::default())
        .await;

    match result {
        Ok(outcome) => success(outcome, store.last_updated()),
        Err(e) => error(e, last_updated),
    }
}

#[derive(Debug, Serialize)]
pub struct ImageUpload {
    /// `data:` URI for the team form's image field
    pub image: String,
}

/// POST /api/admin/team/image - Encode an uploaded photo.
pub async fn upload_team_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<ImageUpload> {
    let last_updated = state.store.lock().await.last_updated();

    let mime = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let pending = match ImageEncoder::spawn(body.to_vec(), mime) {
        Ok(pending) => pending,
        Err(e) => return error(e, last_updated),
    };

    match pending.wait().await {
        Ok(image) => success(ImageUpload { image }, last_updated),
        Err(e) => error(e, last_updated),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteParams {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub deleted: bool,
    /// Question to put to the operator when the delete was not confirmed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<AdminOutcome>,
}

/// DELETE /api/admin/:tab/:id - Delete a record once confirmed.
pub async fn delete_admin_record(
    State(state): State<AppState>,
    Path((tab, id)): Path<(String, i64)>,
    Query(params): Query<DeleteParams>,
) -> ApiResult<DeleteResult> {
    let mut store = state.store.lock().await;
    let last_updated = store.last_updated();

    let tab = match parse_tab(&tab) {
        Ok(tab) => tab,
        Err(e) => return error(e, last_updated),
    };

    let result = AdminController::new(&mut store)
        .delete(tab, id, |_: &str| params.confirm, &UiState::default())
        .await;

    match result {
        Ok(Some(outcome)) => success(
            DeleteResult {
                deleted: true,
                prompt: None,
                outcome: Some(outcome),
            },
            store.last_updated(),
        ),
        Ok(None) => success(
            DeleteResult {
                deleted: false,
                prompt: delete_prompt(tab),
                outcome: None,
            },
            last_updated,
        ),
        Err(e) => error(e, last_updated),
    }
}
