//! Typed CRUD views over the collections of the store's document.
//!
//! Every collection shares one contract: insertion-ordered listing, creation
//! with a freshly allocated id, whole-record update by id, and delete by id.
//! Unknown ids on update or delete are silent no-ops.

mod ids;

pub use ids::IdGenerator;

/// A persisted record addressable by id.
pub trait Record {
    fn id(&self) -> i64;
}

/// Field values that become a record once an id is known.
pub trait Draft: Sized {
    type Record: Record;

    /// Build a brand-new record with the given id.
    fn build(self, id: i64) -> Self::Record;

    /// Replace the fields of `existing`, keeping its id.
    fn apply(self, existing: &Self::Record) -> Self::Record {
        self.build(existing.id())
    }
}

/// CRUD access to one collection, borrowed from the store.
pub struct Repository<'a, R> {
    items: &'a mut Vec<R>,
    ids: &'a mut IdGenerator,
}

impl<'a, R: Record + Clone> Repository<'a, R> {
    pub fn new(items: &'a mut Vec<R>, ids: &'a mut IdGenerator) -> Self {
        Self { items, ids }
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[R] {
        self.items.as_slice()
    }

    pub fn get(&self, id: i64) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Append a new record and return it.
    pub fn create<D: Draft<Record = R>>(&mut self, draft: D) -> R {
        let record = draft.build(self.ids.next_id());
        self.items.push(record.clone());
        tracing::debug!("Created record {}", record.id());
        record
    }

    /// Replace the record with `id`; `None` when no such record exists.
    pub fn update<D: Draft<Record = R>>(&mut self, id: i64, draft: D) -> Option<R> {
        let Some(slot) = self.items.iter_mut().find(|item| item.id() == id) else {
            tracing::debug!("Update skipped, record {} not found", id);
            return None;
        };
        *slot = draft.apply(slot);
        Some(slot.clone())
    }

    /// Remove the record with `id`; `false` when no such record exists.
    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        let removed = self.items.len() != before;
        if !removed {
            tracing::debug!("Delete skipped, record {} not found", id);
        }
        removed
    }
}
