use clap::CommandFactory;
use clap::Parser;
use clap_complete::generate;

use tzclock::AppError;
use tzclock::Cli;
use tzclock::Commands;
use tzclock::app;
use tzclock::handlers;
use tzclock::telemetry;

fn main() {
    if let Err(e) = run() {
        if let Some(app_error) = e.downcast_ref::<AppError>() {
            eprintln!("Error: {}", app_error);
            eprintln!("Suggestion: {}", app_error.suggestion());
            std::process::exit(app_error.exit_code());
        }
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "tzclock", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Zones { format }) => {
            let _telemetry = telemetry::init("tzclock=warn");
            handlers::handle_zones(format).map_err(Into::into)
        }
        None => {
            let _telemetry = telemetry::init_for_ui("tzclock=info");
            app::run(cli.zone, cli.style).map_err(Into::into)
        }
    }
}
