//! relog binary entry point.

fn main() {
    if let Err(err) = relog::cli::run() {
        relog::ui::output::error(format!("{err:#}"));
        std::process::exit(1);
    }
}
