//! Clear all stored data.
//!
//! Safety: Always prompts for confirmation before deletion unless `-y` is given.

use std::io::{self, Write};

use anyhow::{Context, Result};
use athly_core::Document;
use clap::Parser;
use client_core::AthlyContext;
use console::style;

/// Delete all stored records and the linked player
#[derive(Parser, Debug)]
pub struct Reset {
    /// Skip confirmation prompt (dangerous!)
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl Reset {
    pub fn execute(self, ctx: &mut AthlyContext) -> Result<()> {
        let summary = deletion_summary(ctx.document());
        if summary.is_empty() {
            println!("{}", style("초기화할 데이터가 없습니다.").dim());
            return Ok(());
        }

        println!("{}", style("Athly 데이터 초기화").yellow().bold());
        println!();
        println!("다음 항목이 삭제됩니다:");
        for line in &summary {
            println!("  {} {}", style("→").cyan(), line);
        }
        println!();

        if !self.yes && !confirm()? {
            println!("{}", style("취소했습니다.").dim());
            return Ok(());
        }

        ctx.store_mut()
            .clear()
            .context("Failed to delete stored document")?;

        println!("{}", style("✓ 초기화를 완료했습니다.").green().bold());
        Ok(())
    }
}

/// What a reset would delete, one line per item; empty when nothing is stored.
fn deletion_summary(doc: &Document) -> Vec<String> {
    let mut lines = Vec::new();
    if !doc.has_no_entries() {
        lines.push(format!(
            "경기 {}건, 불펜 {}건, 운동 {}건",
            doc.games.len(),
            doc.bullpen.len(),
            doc.workouts.len()
        ));
    }
    if let Some(player) = &doc.linked_player {
        lines.push(format!("연결된 선수 {}", player.name));
    }
    lines
}

/// Prompt user for confirmation
fn confirm() -> Result<bool> {
    print!("{} ", style("계속할까요? [y/N]").yellow().bold());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use athly_core::{GameEntry, Player};
    use athly_storage::{DocumentStore, FileKeyValueRepository};
    use client_kbo::{DemoConfig, DemoPlayerDirectory};
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn summary_lists_what_would_be_deleted() {
        assert!(deletion_summary(&Document::empty()).is_empty());

        let doc = Document::empty()
            .with_game(GameEntry::default())
            .with_game(GameEntry::default());
        assert_eq!(deletion_summary(&doc), vec!["경기 2건, 불펜 0건, 운동 0건"]);

        let doc = Document::empty()
            .with_linked_player(Player::new("70003", "안우진", "키움 히어로즈", "투수"));
        assert_eq!(deletion_summary(&doc), vec!["연결된 선수 안우진"]);
    }

    #[test]
    fn reset_with_yes_clears_store() {
        let temp_dir = TempDir::new().unwrap();
        let open = || {
            AthlyContext::builder()
                .store(DocumentStore::open(
                    FileKeyValueRepository::new(temp_dir.path()).unwrap(),
                ))
                .directory(Arc::new(DemoPlayerDirectory::new(DemoConfig::instant())))
                .build()
                .unwrap()
        };

        let mut ctx = open();
        ctx.store_mut()
            .update(|doc| {
                doc.with_linked_player(Player::new("70001", "김성민", "키움 히어로즈", "투수"))
                    .with_game(GameEntry::default())
            })
            .unwrap();

        Reset { yes: true }.execute(&mut ctx).unwrap();

        assert_eq!(ctx.document(), &Document::empty());
        assert_eq!(open().document(), &Document::empty());
    }
}
