use anyhow::Result;
use clap::{Parser, Subcommand};

use wallet_watch::cli::{handle_transaction_command, TransactionCommands};
use wallet_watch::config::{paths::WalletPaths, settings::Settings};
use wallet_watch::logging::{init_logging, LogOutput};
use wallet_watch::services::Controller;
use wallet_watch::storage::{initialize_storage, open_repository};

#[derive(Parser)]
#[command(
    name = "wallet-watch",
    version,
    about = "Personal income and expense tracker",
    long_about = "Wallet Watch records income and expenses, keeps running totals \
                  and a net balance, and saves everything between sessions. Use \
                  the interactive screen or the commands below."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    #[command(flatten)]
    Transaction(TransactionCommands),

    /// Write default settings and create the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = WalletPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let output = match cli.command {
        Some(Commands::Tui) => LogOutput::FileOnly,
        _ => LogOutput::FileAndStderr,
    };
    if let Err(e) = init_logging(&paths, &settings, output) {
        eprintln!("Warning: {}", e);
    }

    match cli.command {
        Some(Commands::Tui) => {
            wallet_watch::tui::run_tui(&paths, &settings)?;
        }
        Some(Commands::Transaction(cmd)) => {
            let repository = open_repository(&paths, &settings)?;
            let mut controller = Controller::open(repository, settings)?;
            handle_transaction_command(&mut controller, cmd)?;
        }
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!(
                    "Wallet Watch is already initialized at: {}",
                    paths.base_dir().display()
                );
                println!("Existing settings were left unchanged.");
                return Ok(());
            }
            println!("Initializing Wallet Watch at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'wallet-watch list' to see your transactions.");
        }
        Some(Commands::Config) => {
            println!("Wallet Watch Configuration");
            println!("==========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Log file:        {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Storage key:     {}", settings.storage_key);
            println!("  Edit mode:       {:?}", settings.edit_mode);
            println!("  Default filter:  {}", settings.default_filter);
            println!("  Log level:       {}", settings.log_level);
        }
        None => {
            println!("Wallet Watch - personal income and expense tracker");
            println!();
            println!("Run 'wallet-watch --help' for usage information.");
            println!("Run 'wallet-watch tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
