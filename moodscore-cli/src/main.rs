//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use moodscore_cli::CliError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(err) = moodscore_cli::run() {
        if let CliError::ArgumentParsing(parse) = &err {
            parse.exit();
        }
        eprintln!("moodscore: {err}");
        std::process::exit(1);
    }
}
