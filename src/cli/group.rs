//! Group and member CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_group_details, format_group_list, format_member_list};
use crate::error::SplitResult;
use crate::services::GroupService;
use crate::storage::Storage;

/// Group subcommands
#[derive(Subcommand)]
pub enum GroupCommands {
    /// Create a new group
    Create {
        /// Group name (must be unique)
        name: String,
    },

    /// List all groups
    List,

    /// Show group details and members
    Show {
        /// Group name
        group: String,
    },
}

/// Member subcommands
#[derive(Subcommand)]
pub enum MemberCommands {
    /// Add a member to a group
    Add {
        /// Group name
        group: String,
        /// Member name (must be unique within the group)
        name: String,
    },

    /// List the members of a group
    List {
        /// Group name
        group: String,
    },
}

/// Handle a group command
pub fn handle_group_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GroupCommands,
) -> SplitResult<()> {
    let service = GroupService::new(storage);

    match cmd {
        GroupCommands::Create { name } => {
            let group = service.create(&name)?;
            println!("Created group: {}", group.name);
            println!("Add people with 'split member add \"{}\" <NAME>'.", group.name);
        }

        GroupCommands::List => {
            let groups = service.list()?;
            print!("{}", format_group_list(&groups, &settings.currency_symbol));
        }

        GroupCommands::Show { group } => {
            let group = service.get(&group)?;
            print!("{}", format_group_details(&group, &settings.currency_symbol));
        }
    }

    Ok(())
}

/// Handle a member command
pub fn handle_member_command(storage: &Storage, cmd: MemberCommands) -> SplitResult<()> {
    let service = GroupService::new(storage);

    match cmd {
        MemberCommands::Add { group, name } => {
            let updated = service.add_member(&group, &name)?;
            println!("Added {} to {}", name.trim(), updated.name);
            println!("  Members: {}", updated.members.len());
        }

        MemberCommands::List { group } => {
            let members = service.members(&group)?;
            print!("{}", format_member_list(&members));
        }
    }

    Ok(())
}
