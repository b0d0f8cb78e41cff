//! Group display formatting

use crate::models::{format_decimal, Group, Member};

/// Format a simple list of groups
pub fn format_group_list(groups: &[Group], symbol: &str) -> String {
    if groups.is_empty() {
        return "No groups found.\n\nRun 'split group create <NAME>' to start one.\n".to_string();
    }

    let name_width = groups
        .iter()
        .map(|g| g.name.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>7}  {:>8}  {:>12}\n",
        "Group",
        "Members",
        "Expenses",
        "Total",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->7}  {:->8}  {:->12}\n",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for group in groups {
        output.push_str(&format!(
            "{:<width$}  {:>7}  {:>8}  {:>12}\n",
            group.name,
            group.members.len(),
            group.expenses.len(),
            format_decimal(group.total_spent(), symbol),
            width = name_width
        ));
    }

    output
}

/// Format a member list
pub fn format_member_list(members: &[Member]) -> String {
    if members.is_empty() {
        return "No members yet.\n".to_string();
    }

    members.iter().map(|m| format!("  - {}\n", m)).collect()
}

/// Format group details
pub fn format_group_details(group: &Group, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Group: {}\n", group.name));
    output.push_str(&format!("  Members:  {}\n", group.members.len()));
    output.push_str(&format!("  Expenses: {}\n", group.expenses.len()));
    output.push_str(&format!(
        "  Total:    {}\n",
        format_decimal(group.total_spent(), symbol)
    ));
    output.push_str(&format!(
        "  Created:  {}\n",
        group.created_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output.push_str("\nMembers:\n");
    output.push_str(&format_member_list(&group.members));

    output
}
