//! Sync trigger for the linked player.
use anyhow::Result;
use athly_core::SyncScope;
use clap::Parser;
use client_core::AthlyContext;
use client_core::format::LINK_PROMPT;
use client_core::services::sync::SYNC_PENDING_MESSAGE;
use console::style;

/// Sync game data for the linked player
#[derive(Parser, Debug)]
pub struct SyncData {
    /// today | recent
    pub scope: SyncScope,
}

impl SyncData {
    pub async fn execute(self, ctx: &AthlyContext) -> Result<()> {
        let doc = ctx.document();
        if doc.linked_player.is_none() {
            println!("{}", style(LINK_PROMPT).red());
            return Ok(());
        }

        println!("{} {}", style(self.scope.label()).bold(), style(SYNC_PENDING_MESSAGE).dim());

        let mut trigger = ctx.sync_trigger();
        if let Some(message) = trigger.sync(doc, self.scope).await {
            println!("{message}");
        }
        Ok(())
    }
}
