//! The single in-memory site document and its persistence.
//!
//! The document is loaded once at startup and written back whole after every
//! mutation. All changes to collections go through [`Repository`] views so
//! id allocation stays in one place.

mod seed;

pub use seed::seed_document;

use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::errors::AppError;
use crate::models::{
    About, CompletedProject, Document, Newsletter, Project, Resource, TeamMember, Video,
};
use crate::repository::{IdGenerator, Repository};
use crate::storage::KeyValueStore;

/// Key under which the serialized document is persisted.
pub const STORAGE_KEY: &str = "teamsiteData";

pub struct Store {
    kv: Arc<dyn KeyValueStore>,
    document: Document,
    ids: IdGenerator,
    last_updated: DateTime<Local>,
}

impl Store {
    /// Load the persisted document, falling back to the seed document when
    /// nothing is stored or the stored blob cannot be parsed.
    pub async fn load(kv: Arc<dyn KeyValueStore>) -> Self {
        let document = match kv.get(STORAGE_KEY).await {
            Ok(Some(blob)) => match serde_json::from_str::<Document>(&blob) {
                Ok(document) => document,
                Err(e) => {
                    tracing::warn!("Stored site data is malformed, using defaults: {}", e);
                    seed_document()
                }
            },
            Ok(None) => {
                tracing::info!("No stored site data, using defaults");
                seed_document()
            }
            Err(e) => {
                tracing::warn!("Failed to read stored site data, using defaults: {}", e);
                seed_document()
            }
        };

        Self::with_document(kv, document)
    }

    /// Wrap an already-built document without touching storage.
    pub fn with_document(kv: Arc<dyn KeyValueStore>, document: Document) -> Self {
        let ids = IdGenerator::starting_after(document.max_id());
        Self {
            kv,
            document,
            ids,
            last_updated: Local::now(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Display form of the last-updated stamp, e.g. "Oct 19, 2026".
    pub fn last_updated(&self) -> String {
        self.last_updated.format("%b %-d, %Y").to_string()
    }

    /// Serialize the whole document and overwrite the stored blob.
    ///
    /// A failed write leaves the in-memory mutation in place.
    pub async fn save(&mut self) -> Result<(), AppError> {
        let blob = serde_json::to_string(&self.document)
            .map_err(|e| AppError::Internal(format!("Failed to serialize site data: {}", e)))?;
        self.kv.set(STORAGE_KEY, &blob).await?;
        self.last_updated = Local::now();
        tracing::debug!("Saved site data ({} bytes)", blob.len());
        Ok(())
    }

    pub fn team(&mut self) -> Repository<'_, TeamMember> {
        Repository::new(&mut self.document.team, &mut self.ids)
    }

    pub fn projects(&mut self) -> Repository<'_, Project> {
        Repository::new(&mut self.document.projects, &mut self.ids)
    }

    pub fn completed(&mut self) -> Repository<'_, CompletedProject> {
        Repository::new(&mut self.document.completed, &mut self.ids)
    }

    pub fn videos(&mut self) -> Repository<'_, Video> {
        Repository::new(&mut self.document.videos, &mut self.ids)
    }

    pub fn newsletters(&mut self) -> Repository<'_, Newsletter> {
        Repository::new(&mut self.document.newsletters, &mut self.ids)
    }

    pub fn resources(&mut self) -> Repository<'_, Resource> {
        Repository::new(&mut self.document.resources, &mut self.ids)
    }

    pub fn set_about(&mut self, about: About) {
        self.document.about = about;
    }

    /// Set the Monday.com board link; an empty value hides the link.
    pub fn set_monday_url(&mut self, url: String) {
        self.document.settings.monday_url = Some(url);
    }
}
