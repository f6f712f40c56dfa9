use chess_rules::game::{GameService, MemoryRepository};
use chess_rules::ui;
use clap::Parser;
use engine::constant::START_FEN;

#[derive(Parser, Debug)]
#[command(version, about = "Play chess moves in the terminal")]
struct CmdArgs {
    /// Starting position of a new game
    #[arg(long, value_name = "ENCODING", default_value = START_FEN)]
    fen: String,
    /// Log filter, overrides RUST_LOG
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cmd_args = CmdArgs::parse();
    common::init_tracing(cmd_args.log.as_deref(), "info");

    let mut service = GameService::with_start_fen(MemoryRepository::default(), &cmd_args.fen);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    ui::run(&mut service, stdin.lock(), stdout.lock())
}
