use anyhow::Result;
use clap::{Parser, Subcommand};

use split_ledger::cli::{
    handle_balances_command, handle_expense_command, handle_group_command, handle_member_command,
    ExpenseCommands, GroupCommands, MemberCommands,
};
use split_ledger::config::{paths::SplitPaths, settings::Settings};
use split_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "split",
    version,
    about = "Track shared expenses and see who owes whom",
    long_about = "split records expenses paid by members of a group and nets \
                  them into a simple pairwise balance sheet, so everyone knows \
                  exactly how much to pay back and to whom."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Group management commands
    #[command(subcommand)]
    Group(GroupCommands),

    /// Member management commands
    #[command(subcommand)]
    Member(MemberCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Show who owes whom in a group
    Balances {
        /// Group name
        group: String,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SplitPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    split_ledger::logging::init(&settings.log_filter);

    // Initialize storage
    let storage = Storage::new(&paths)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Group(cmd)) => {
            handle_group_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Member(cmd)) => {
            handle_member_command(&storage, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Balances { group }) => {
            handle_balances_command(&storage, &settings, &group)?;
        }
        Some(Commands::Config) => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }

            println!("split-ledger Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Groups file:    {}", paths.groups_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Log filter:      {}", settings.log_filter);
        }
        None => {
            println!("split - shared expenses, settled simply");
            println!();
            println!("Run 'split --help' for usage information.");
            println!("Run 'split group create <NAME>' to get started.");
        }
    }

    Ok(())
}
