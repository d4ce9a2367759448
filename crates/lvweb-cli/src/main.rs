mod config;
mod error;
mod logging;
mod native;
mod project;

use clap::Parser;
use tracing::debug;

use config::Config;
use error::BuildError;

#[derive(Parser)]
#[command(name = "lvweb")]
#[command(about = "lvweb: translate a small web page into an LVGL C project")]
#[command(version)]
struct Cli {
    /// Fetch LVGL and lv_drivers, then compile the simulator (Linux only)
    #[arg(long)]
    build: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error resolving project root: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cli, &config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config) -> Result<(), BuildError> {
    debug!(root = %config.root.display(), build = cli.build, "starting");
    project::generate_project(config)?;

    if cli.build {
        native::maybe_build(config)?;
    }

    eprintln!(
        "LVGL sources generated under {}. Run `lvweb --build` on Linux with SDL2 dev packages to compile.",
        config.lvgl_dir.display()
    );
    Ok(())
}
