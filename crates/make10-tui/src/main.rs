mod app;
mod game;
mod input;
mod ui;

use make10_core::SumRule;

fn main() {
    let rule = if std::env::args().any(|a| a == "--tens") {
        SumRule::Tens
    } else {
        SumRule::Exact
    };

    if let Err(e) = app::run(rule) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
