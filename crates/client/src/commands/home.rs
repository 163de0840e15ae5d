//! Home view: linked player and the next step.
use anyhow::Result;
use clap::Parser;
use client_core::AthlyContext;
use client_core::format::linked_player_line;
use console::style;

/// Show the linked player and what to do next
#[derive(Parser, Debug)]
pub struct Home {}

impl Home {
    pub fn execute(self, ctx: &AthlyContext) -> Result<()> {
        let doc = ctx.document();

        super::print_header("Athly", "왕초보 시작버전");
        match &doc.linked_player {
            Some(player) => {
                println!("{}", linked_player_line(Some(player)));
                println!();
                println!("연결된 선수의 경기/박스스코어를 동기화하려면 아래 명령을 실행하세요.");
                println!("  {}", style("athly sync today").cyan());
                println!("  {}", style("athly sync recent").cyan());
            }
            None => {
                println!("{}", style(linked_player_line(None)).red());
                println!();
                println!(
                    "먼저 {} 로 선수를 연결해주세요.",
                    style("athly player search <이름>").cyan()
                );
            }
        }

        if doc.has_no_entries() {
            println!();
            println!(
                "{}",
                style("첫 기록은 athly game add / bullpen add / workout add 로 남길 수 있어요.").dim()
            );
        }

        Ok(())
    }
}
