//! Application context with dependency injection pattern.

use std::sync::Arc;

use anyhow::{Context, Result};
use athly_core::Document;
use athly_storage::{DocumentStore, FileKeyValueRepository};
use client_kbo::PlayerDirectory;

use crate::config::ClientConfig;
use crate::services::{PlayerLinkResolver, SyncTrigger};

/// Everything a front-end needs: the document store and the player directory.
pub struct AthlyContext {
    store: DocumentStore,
    directory: Arc<dyn PlayerDirectory>,
}

impl AthlyContext {
    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }

    /// Open the file-backed store and pick the directory from `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let data_dir = config.data_dir();
        let repo = FileKeyValueRepository::new(&data_dir)
            .with_context(|| format!("Failed to open data directory {}", data_dir.display()))?;

        tracing::debug!("Opening document store in {}", data_dir.display());

        Self::builder()
            .store(DocumentStore::open(repo))
            .directory(client_kbo::directory_for(&config.kbo))
            .build()
    }

    pub fn document(&self) -> &Document {
        self.store.document()
    }

    pub fn store_mut(&mut self) -> &mut DocumentStore {
        &mut self.store
    }

    pub fn directory(&self) -> &Arc<dyn PlayerDirectory> {
        &self.directory
    }

    pub fn link_resolver(&self) -> PlayerLinkResolver {
        PlayerLinkResolver::new(Arc::clone(&self.directory))
    }

    pub fn sync_trigger(&self) -> SyncTrigger {
        SyncTrigger::new(Arc::clone(&self.directory))
    }
}

/// Builder for [`AthlyContext`].
///
/// Both the store and the directory are required; `build` fails fast when
/// either is missing.
#[derive(Default)]
pub struct ContextBuilder {
    store: Option<DocumentStore>,
    directory: Option<Arc<dyn PlayerDirectory>>,
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(mut self, store: DocumentStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn directory(mut self, directory: Arc<dyn PlayerDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    pub fn build(self) -> Result<AthlyContext> {
        let store = self
            .store
            .context("Document store is required. Use .store() to set it.")?;
        let directory = self
            .directory
            .context("Player directory is required. Use .directory() to set it.")?;

        Ok(AthlyContext { store, directory })
    }
}
