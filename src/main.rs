use anyhow::Result;
use clap::{Parser, Subcommand};

use findash::cli::{
    handle_add_command, handle_categories_command, handle_export_command, handle_list_command,
    handle_report_command, AddArgs, ExportArgs, ListArgs, ReportArgs,
};
use findash::config::{FinDashPaths, Settings, StoreBackend};
use findash::logging::init_tracing;
use findash::store::open_store;

#[derive(Parser)]
#[command(
    name = "findash",
    version,
    about = "Personal finance tracker with a terminal dashboard",
    long_about = "FinDash records income and expense transactions and summarizes \
                  them as totals, charts by category and over time, and monthly \
                  budget progress."
)]
struct Cli {
    /// Storage backend for this invocation (overrides the configured one)
    #[arg(long, global = true, value_enum)]
    backend: Option<StoreBackend>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory, settings file and transaction store
    Init,

    /// Record a transaction
    Add(AddArgs),

    /// List recorded transactions, newest first
    List(ListArgs),

    /// Print or export the dashboard
    Report(ReportArgs),

    /// Export all transactions as CSV
    ExportCsv(ExportArgs),

    /// Launch the interactive dashboard
    #[command(alias = "tui")]
    Dashboard,

    /// List the available categories
    Categories,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log output would corrupt the alternate screen
    if !matches!(cli.command, Some(Commands::Dashboard)) {
        init_tracing();
    }

    let paths = FinDashPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(backend) = cli.backend {
        settings.backend = backend;
    }

    let command = match cli.command {
        Some(command) => command,
        None => {
            println!("FinDash - Personal finance tracker");
            println!();
            println!("Run 'findash --help' for usage information.");
            println!("Run 'findash dashboard' to launch the interactive dashboard.");
            return Ok(());
        }
    };

    match command {
        Commands::Categories => {
            handle_categories_command();
            return Ok(());
        }
        Commands::Config => {
            print_config(&paths, &settings);
            return Ok(());
        }
        _ => {}
    }

    let store = open_store(settings.backend, &paths)?;
    store.init()?;

    match command {
        Commands::Init => {
            settings.save(&paths)?;
            println!("Initialized FinDash at: {}", paths.base_dir().display());
            println!("Storage backend: {}", settings.backend);
            println!();
            println!("Run 'findash add <amount> --category <name>' to record a transaction.");
        }
        Commands::Add(args) => handle_add_command(store.as_ref(), &settings, args)?,
        Commands::List(args) => handle_list_command(store.as_ref(), &settings, args)?,
        Commands::Report(args) => handle_report_command(store.as_ref(), &settings, args)?,
        Commands::ExportCsv(args) => handle_export_command(store.as_ref(), args)?,
        Commands::Dashboard => findash::tui::run_dashboard(store.as_ref(), &settings)?,
        Commands::Categories | Commands::Config => {}
    }

    Ok(())
}

fn print_config(paths: &FinDashPaths, settings: &Settings) {
    println!("FinDash Configuration");
    println!("=====================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Database file:    {}", paths.database_file().display());
    println!("Sheet file:       {}", paths.sheet_file().display());
    println!("Initialized:      {}", paths.is_initialized());
    println!();
    println!("Settings:");
    println!("  Backend:         {}", settings.backend);
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Date format:     {}", settings.date_format);
    println!("  Budget targets:");
    for target in &settings.budget_targets {
        println!("    {}", target);
    }
}
