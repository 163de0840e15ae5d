//! KBO player search and linking.
use anyhow::{Result, bail};
use athly_core::Player;
use clap::{Parser, Subcommand};
use client_core::format::{linked_player_line, player_detail};
use client_core::{AthlyContext, PlayerLinkResolver};
use console::style;

#[derive(Subcommand, Debug)]
pub enum PlayerCommand {
    /// Search players by name
    Search(PlayerSearch),

    /// Link the player with the given ID from a name search
    Link(PlayerLink),
}

#[derive(Parser, Debug)]
pub struct PlayerSearch {
    /// Name or part of a name, e.g. 안우진
    pub query: String,
}

#[derive(Parser, Debug)]
pub struct PlayerLink {
    /// Player ID as shown by `athly player search`
    pub id: String,

    /// Name search that returns the player
    #[arg(long)]
    pub query: String,
}

impl PlayerCommand {
    pub async fn execute(self, ctx: &mut AthlyContext) -> Result<()> {
        match self {
            PlayerCommand::Search(args) => {
                super::print_header("KBO 선수 연결", "선수 이름으로 검색하고 선택하면 연결됩니다.");
                let players = search(ctx, &args.query).await?;
                if players.is_empty() {
                    println!("{}", style("검색 결과가 없습니다.").dim());
                }
                for player in &players {
                    println!("{}", style(&player.name).bold());
                    println!("  {}", style(player_detail(player)).dim());
                }
                if !players.is_empty() {
                    println!();
                    println!(
                        "{}",
                        style(format!(
                            "연결: athly player link <ID> --query {}",
                            args.query
                        ))
                        .dim()
                    );
                }
            }
            PlayerCommand::Link(args) => {
                let players = search(ctx, &args.query).await?;
                let Some(player) = pick(players, &args.id) else {
                    bail!("'{}' 검색 결과에 ID {} 선수가 없습니다.", args.query, args.id);
                };

                match PlayerLinkResolver::link(ctx.store_mut(), player) {
                    Ok(doc) => println!(
                        "{} {}",
                        style("✓").green(),
                        linked_player_line(doc.linked_player.as_ref())
                    ),
                    Err(e) => {
                        tracing::warn!("Failed to persist linked player: {}", e);
                        eprintln!("{} 저장 실패: {}", style("✗").red().bold(), e);
                    }
                }
            }
        }
        Ok(())
    }
}

/// Run a search through the resolver, turning a recorded failure into an error.
async fn search(ctx: &AthlyContext, query: &str) -> Result<Vec<Player>> {
    let mut resolver = ctx.link_resolver();
    if !resolver.can_search(query) {
        bail!("검색할 선수 이름을 입력해주세요.");
    }

    let players = resolver.search(query).await.to_vec();
    if let Some(error) = &resolver.state().error {
        bail!("{error}");
    }
    Ok(players)
}

fn pick(players: Vec<Player>, id: &str) -> Option<Player> {
    players.into_iter().find(|player| player.id == id)
}
