/*
 * 终端界面
 *
 * - 画棋盘：白方在下，第 8 横线在最上面，空格用 . 表示
 * - 命令：
 *   - 走法串（如 Pe2e4）：在当前对局里走一步
 *   - 空行：重新读取当前对局
 *   - moves：列出走棋方所有合法走法
 *   - json：以 JSON 输出对局记录
 *   - q：退出
 */
use std::io::{BufRead, Write};

use anyhow::Context;
use engine::constant::BOARD_SIZE;
use engine::engine::Engine;
use tracing::debug;

use crate::game::{Game, GameRepository, GameService};

const FILES: &str = "    a b c d e f g h";
const BORDER: &str = "  +-----------------+";

/// Text picture of the board, followed by `CHECK!` when the side to move is in check.
pub fn render(engine: &Engine) -> String {
    let mut text = String::new();
    text.push_str(FILES);
    text.push('\n');
    text.push_str(BORDER);
    text.push('\n');
    for (row, rank) in engine.rows().iter().zip((1..=BOARD_SIZE).rev()) {
        text.push_str(&format!("{} |", rank));
        for figure in row.chars() {
            text.push(' ');
            text.push(figure);
        }
        text.push_str(&format!(" | {}\n", rank));
    }
    text.push_str(BORDER);
    text.push('\n');
    text.push_str(FILES);
    text.push('\n');
    if engine.is_check() {
        text.push_str("CHECK!\n");
    }
    text
}

fn redrawn<W: Write>(output: &mut W, game: &Game) -> anyhow::Result<()> {
    writeln!(output, "{}", render(&game.engine()))?;
    writeln!(output, "{}", game)?;
    Ok(())
}

/// Interactive loop over the service's current game until `q` or end of input.
pub fn run<R, B, W>(service: &mut GameService<R>, input: B, mut output: W) -> anyhow::Result<()>
where
    R: GameRepository,
    B: BufRead,
    W: Write,
{
    let mut game = service.current_game();
    redrawn(&mut output, &game)?;
    write!(output, "> ")?;
    output.flush().context("flushing prompt")?;

    for line in input.lines() {
        let line = line.context("reading command")?;
        let cmd = line.trim();
        match cmd {
            "q" => break,
            "" => {
                game = service.current_game();
                redrawn(&mut output, &game)?;
            }
            "moves" => {
                let moves = game.engine().legal_moves();
                writeln!(output, "{} moves: {}", moves.len(), moves.join(" "))?;
            }
            "json" => {
                let json = serde_json::to_string_pretty(&game).context("encoding game")?;
                writeln!(output, "{}", json)?;
            }
            token => {
                let before = game.fen.clone();
                game = service.make_move(game.id, token)?;
                if game.fen == before {
                    debug!(token, "move not played");
                    writeln!(output, "move not played: {}", token)?;
                } else {
                    redrawn(&mut output, &game)?;
                }
            }
        }
        write!(output, "> ")?;
        output.flush().context("flushing prompt")?;
    }
    writeln!(output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MemoryRepository;

    fn session(start: &str, commands: &str) -> String {
        let mut service = GameService::with_start_fen(MemoryRepository::default(), start);
        let mut output = Vec::new();
        run(&mut service, commands.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_render_start() {
        let text = render(&Engine::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], FILES);
        assert_eq!(lines[2], "8 | r n b q k b n r | 8");
        assert_eq!(lines[5], "5 | . . . . . . . . | 5");
        assert_eq!(lines[9], "1 | R N B Q K B N R | 1");
        assert!(!text.contains("CHECK!"));
    }

    #[test]
    fn test_render_check() {
        let text = render(&Engine::new("4r3/8/8/8/8/8/8/4K3 w - - 0 1"));
        assert!(text.ends_with("CHECK!\n"));
    }

    #[test]
    fn test_session_move() {
        let out = session(engine::constant::START_FEN, "Pe2e4\nq\n");
        assert!(out.contains("4 | . . . . P . . . | 4"));
        assert!(out.contains("LastMove = Pe2e4"));
        assert!(out.contains("YourColor = black"));
    }

    #[test]
    fn test_session_rejected() {
        let out = session(engine::constant::START_FEN, "Pe2e5\n");
        assert!(out.contains("move not played: Pe2e5"));
        assert!(!out.contains("LastMove = Pe2e5"));
    }

    #[test]
    fn test_session_moves_and_json() {
        let out = session("4r3/8/8/8/8/8/8/4K3 w - - 0 1", "moves\njson\nq\nmoves\n");
        assert!(out.contains("4 moves: Ke1d1 Ke1f1 Ke1d2 Ke1f2"));
        assert!(out.contains("\"Status\": \"play\""));
        // q 之后的命令不再执行
        assert_eq!(out.matches("moves:").count(), 1);
    }

    #[test]
    fn test_session_check_ends_game() {
        let out = session("4k3/8/8/8/8/8/8/R3K3 w - - 0 1", "Ra1a8\n\n");
        assert!(out.contains("CHECK!"));
        assert!(out.contains("Status = done"));
        // 空行重新读取当前对局，上一局已结束，开始新的一局
        assert!(out.contains("GameID = 2"));
    }
}
