use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use truckyard::audit::AuditLogger;
use truckyard::cli::{main_menu, Prompter};
use truckyard::config::{DataPaths, Settings};
use truckyard::storage::Storage;

#[derive(Parser)]
#[command(
    name = "truckyard",
    version,
    about = "Fleet records and truck yard ledger for a small trucking company",
    long_about = "truckyard keeps daily revenue, workshop cost and mileage records \
                  in CSV files, logs trucks entering and leaving the yard, and \
                  runs payroll and sale discount calculations from a menu."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current configuration and paths
    Config,

    /// Write a settings file with the defaults, keeping an existing one
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = DataPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Config) => {
            println!("truckyard configuration");
            println!("=======================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Revenue:        {}", paths.revenue_file().display());
            println!("Workshop:       {}", paths.workshop_file().display());
            println!("Mileage:        {}", paths.mileage_file().display());
            println!("Yard history:   {}", paths.yard_history_file().display());
            println!();
            println!("Settings:");
            println!("  Company:       {}", settings.company.name);
            println!("  Clear screen:  {}", settings.clear_screen);
            println!("  Audit enabled: {}", settings.audit_enabled);

            let recent = AuditLogger::new(paths.audit_log()).read_recent(5)?;
            if !recent.is_empty() {
                println!();
                println!("Recent activity:");
                for entry in &recent {
                    println!("{}", entry.format_human_readable());
                }
            }
        }
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("Settings already exist at {}", paths.settings_file().display());
            } else {
                settings.save(&paths)?;
                println!("Settings written to {}", paths.settings_file().display());
            }
        }
        None => {
            let storage = Storage::new(paths, &settings)?;
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut prompter = Prompter::new(stdin.lock(), stdout.lock(), settings.clear_screen);

            match main_menu::run(&mut prompter, &storage, &settings) {
                Ok(()) => {}
                Err(e) if e.is_input_closed() => {}
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}
