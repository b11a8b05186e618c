mod app;

use colored::Colorize;
use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match app::run() {
        Ok(outcome) if outcome.is_success() => {}
        Ok(_) => std::process::exit(1),
        Err(err) => {
            eprintln!("{}", format!("{:#}", err).red());
            std::process::exit(1);
        }
    }
}
