use clap::Parser;
use colored::Colorize;
use netbuddy::cli::{normalize_args, run, CommandLine};
use netbuddy::config::Settings;
use netbuddy::logging::init_logging;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let settings = Settings::from_env();
    if let Err(e) = init_logging(&settings) {
        eprintln!("{e}");
    }
    log::info!("#Start main()");

    let commands = CommandLine::parse_from(normalize_args(std::env::args()));
    settings.apply_color(commands.no_color);

    let mut stdout = std::io::BufWriter::new(std::io::stdout().lock());
    if let Err(e) = run(&commands, &settings, &mut stdout) {
        log::error!("{e}");
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }
}
