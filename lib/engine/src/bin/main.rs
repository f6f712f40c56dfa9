extern crate engine;

use engine::protocol::Session;

fn main() -> anyhow::Result<()> {
    common::init_tracing(None, "warn");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::default().run(stdin.lock(), stdout.lock())
}
