/* 文本协议：按行读取命令，驱动一个引擎，回复写到输出流 */
use std::io::{BufRead, Write};
use std::sync::LazyLock;

use anyhow::Context;
use regex::Regex;
use tracing::{debug, info};

use crate::constant::START_FEN;
use crate::engine::Engine;

static POSITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:fen (?P<fen>\S+(?: \S+){5})|(?P<startpos>startpos))(?: moves (?P<moves>\S+(?: \S+)*))?$")
        .expect("position pattern")
});

#[derive(Default)]
pub struct Session {
    pub engine: Engine,
}

impl Session {
    pub fn new(engine: Engine) -> Self {
        Session { engine }
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line.context("reading command")?;
            if !self.handle(line.trim(), &mut output)? {
                break;
            }
            output.flush().context("flushing reply")?;
        }
        Ok(())
    }

    /// Execute one command. Returns `false` once the session should end.
    pub fn handle<W: Write>(&mut self, line: &str, output: &mut W) -> anyhow::Result<bool> {
        let mut token = line.splitn(2, ' ');
        let cmd = token.next().unwrap_or_default();
        match cmd {
            "" => {}
            "isready" => writeln!(output, "readyok")?,
            "position" => {
                if !self.position(token.next().unwrap_or_default()) {
                    writeln!(output, "unknown command: {}", line)?;
                }
            }
            "moves" => {
                let moves = self.engine.legal_moves();
                if moves.is_empty() {
                    writeln!(output, "moves")?;
                } else {
                    writeln!(output, "moves {}", moves.join(" "))?;
                }
            }
            "check" => writeln!(output, "check {}", self.engine.is_check())?,
            "fen" => writeln!(output, "fen {}", self.engine.fen())?,
            "quit" => {
                writeln!(output, "bye")?;
                return Ok(false);
            }
            _ => writeln!(output, "unknown command: {}", line)?,
        }
        Ok(true)
    }

    // position startpos|fen <...> [moves ...]，不合法的走法跳过
    fn position(&mut self, param: &str) -> bool {
        let Some(captures) = POSITION.captures(param) else {
            return false;
        };
        if let Some(fen) = captures.name("fen") {
            self.engine = Engine::new(fen.as_str());
        }
        if captures.name("startpos").is_some() {
            self.engine = Engine::new(START_FEN);
        }
        if let Some(moves) = captures.name("moves") {
            for m in moves.as_str().split(' ') {
                match self.engine.try_apply(m) {
                    Ok(next) => self.engine = next,
                    Err(err) => info!(%err, "skipping move"),
                }
            }
        }
        debug!(fen = self.engine.fen(), "position set");
        true
    }
}
