mod config;
mod logging;
mod ui;

use std::process::ExitCode;

use config::AppConfig;
use rentscout_adapters::{
    present_property_detail, present_property_row, FsAssetSource, SeedListingStore,
};
use rentscout_application::{
    ApplicationError, ApplicationService, ListListingsCommand, ShowPropertyCommand,
};
use rentscout_domain::PropertyId;

fn main() -> ExitCode {
    let config = AppConfig::default();
    let _logger = logging::init_logging(&config.log_spec);
    let args: Vec<String> = std::env::args().collect();

    let service = match build_application_service(&config) {
        Ok(service) => service,
        Err(error) => {
            eprintln!("failed to seed listings: {error}");
            return ExitCode::from(1);
        }
    };

    let command = parse_command(&args);
    match run_command(command, &service) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            print_usage();
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn build_application_service(config: &AppConfig) -> Result<ApplicationService, ApplicationError> {
    let store = SeedListingStore::from_embedded()?;
    let assets = FsAssetSource::new(&config.assets_dir);
    log::info!(
        "seeded {} listings, indexed {} image assets under {}",
        store.len(),
        assets.indexed_names(),
        config.assets_dir
    );
    Ok(ApplicationService::new(Box::new(store), Box::new(assets)))
}

#[derive(Debug, Clone)]
enum Command {
    Ui,
    List,
    Show { property_id: i64 },
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn parse_command(args: &[String]) -> Result<Command, CommandError> {
    if args.len() <= 1 {
        return Ok(Command::Ui);
    }

    match args[1].as_str() {
        "ui" => Ok(Command::Ui),
        "list" => Ok(Command::List),
        "show" => {
            if args.len() < 3 {
                return Err(CommandError::Usage("missing property id".to_string()));
            }
            let property_id = args[2]
                .parse::<i64>()
                .map_err(|_| CommandError::Usage(format!("invalid property id: {}", args[2])))?;
            Ok(Command::Show { property_id })
        }
        other => Err(CommandError::Usage(format!("unknown command: {other}"))),
    }
}

fn run_command(
    command: Result<Command, CommandError>,
    service: &ApplicationService,
) -> Result<(), CommandError> {
    match command? {
        Command::Ui => ui::launch_window(service).map_err(CommandError::Runtime),
        Command::List => {
            let listings = service
                .list_listings(ListListingsCommand)
                .map_err(|error| CommandError::Runtime(format!("list failed: {error}")))?;
            for property in listings {
                println!("{}", present_property_row(&property));
            }
            Ok(())
        }
        Command::Show { property_id } => {
            let property_id = PropertyId::new(property_id)
                .map_err(|error| CommandError::Usage(format!("invalid property id: {error}")))?;
            let property = service
                .show_property(ShowPropertyCommand { property_id })
                .map_err(|error| CommandError::Runtime(format!("show failed: {error}")))?;
            println!("{}", present_property_detail(&property));
            Ok(())
        }
    }
}

fn print_usage() {
    println!("usage:");
    println!("  rentscout ui");
    println!("  rentscout list");
    println!("  rentscout show <property_id>");
}
