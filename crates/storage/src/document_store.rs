//! Owner of the persisted document.

use athly_core::{Document, STORAGE_KEY};

use crate::repository::{KeyValueRepository, Result};

/// Holds the current document snapshot and persists it on every change.
///
/// There are no partial updates: callers derive a new full document and hand
/// it to [`replace`](Self::replace) (or let [`update`](Self::update) do the
/// deriving). Reads never fail. A missing or unreadable stored value loads as
/// [`Document::empty`].
pub struct DocumentStore {
    repo: Box<dyn KeyValueRepository>,
    key: String,
    current: Document,
}

impl DocumentStore {
    /// Open the store under the default key and load the last saved document.
    pub fn open(repo: impl KeyValueRepository + 'static) -> Self {
        Self::open_with_key(repo, STORAGE_KEY)
    }

    pub fn open_with_key(repo: impl KeyValueRepository + 'static, key: impl Into<String>) -> Self {
        let mut store = Self {
            repo: Box::new(repo),
            key: key.into(),
            current: Document::empty(),
        };
        store.current = store.load();
        store
    }

    /// Read the persisted document, falling back to the empty document.
    ///
    /// Read and parse failures are logged and swallowed.
    pub fn load(&self) -> Document {
        let raw = match self.repo.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Document::empty(),
            Err(e) => {
                tracing::warn!("Failed to read stored document {:?}: {}", self.key, e);
                return Document::empty();
            }
        };

        match Document::from_json(&raw) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(
                    "Stored document {:?} is unreadable, starting empty: {}",
                    self.key,
                    e
                );
                Document::empty()
            }
        }
    }

    /// Serialize and persist `doc` as a whole.
    pub fn save(&self, doc: &Document) -> Result<()> {
        let raw = doc.to_json()?;
        self.repo.set(&self.key, &raw)?;
        tracing::debug!(
            "Saved document: {} games, {} bullpen, {} workouts",
            doc.games.len(),
            doc.bullpen.len(),
            doc.workouts.len()
        );
        Ok(())
    }

    /// The current snapshot.
    pub fn document(&self) -> &Document {
        &self.current
    }

    /// Replace the snapshot with `doc` and persist it.
    ///
    /// Saving is best-effort: the in-memory snapshot is replaced even when the
    /// write fails, and the error is returned for the caller to report.
    pub fn replace(&mut self, doc: Document) -> Result<&Document> {
        self.current = doc;
        self.save(&self.current)?;
        Ok(&self.current)
    }

    /// Derive the next document from the current one and persist it.
    pub fn update<F>(&mut self, f: F) -> Result<&Document>
    where
        F: FnOnce(Document) -> Document,
    {
        let next = f(self.current.clone());
        self.replace(next)
    }

    /// Drop the stored document entirely and start over empty.
    pub fn clear(&mut self) -> Result<()> {
        self.current = Document::empty();
        self.repo.remove(&self.key)?;
        tracing::info!("Cleared stored document {:?}", self.key);
        Ok(())
    }
}
