//! Command-line options and the headless `list` / `show` commands.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::api::{DEFAULT_API_URL, UserApi};
use crate::format::{format_date, record_fields, skills_label};
use crate::search::filter_users;

#[derive(Debug, Parser)]
#[command(name = "cw-careers", version, about = "CW Careers registration and directory")]
pub struct Cli {
    /// Base URL of the careers backend.
    #[arg(long, env = "CAREERS_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Where the TUI writes its log.
    #[arg(long, default_value = "cw-careers.log")]
    pub log_file: PathBuf,

    #[arg(long, default_value = "theme.conf")]
    pub theme: PathBuf,

    #[arg(long, default_value = "keybinds.conf")]
    pub keymap: PathBuf,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Print registered users, optionally filtered.
    List {
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Print one user's full record.
    Show { id: i64 },
}

pub fn run_list(api: &dyn UserApi, search: &str, out: &mut impl Write) -> Result<()> {
    let users = api.get_users().context("list users")?;
    let matches = filter_users(&users, search);
    info!(total = users.len(), shown = matches.len(), "listing users");

    if matches.is_empty() {
        writeln!(out, "No users found")?;
        return Ok(());
    }
    writeln!(
        out,
        "{:<6} {:<30} {:<14} {:<12} Programming Skills",
        "ID", "Full Name", "Date of Birth", "Location"
    )?;
    for u in matches {
        writeln!(
            out,
            "{:<6} {:<30} {:<14} {:<12} {}",
            u.id,
            u.full_name,
            format_date(&u.date_of_birth),
            u.preferred_location,
            skills_label(&u.programming_skills)
        )?;
    }
    Ok(())
}

pub fn run_show(api: &dyn UserApi, id: i64, out: &mut impl Write) -> Result<()> {
    let user = api.get_user_by_id(id).with_context(|| format!("show user {id}"))?;
    for (label, value) in record_fields(&user) {
        writeln!(out, "{label}: {value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subcommands_and_defaults() {
        let cli = Cli::parse_from(["cw-careers", "--api-url", "http://api.test", "show", "7"]);
        assert_eq!(cli.api_url, "http://api.test");
        assert_eq!(cli.timeout_secs, 30);
        assert_eq!(cli.command, Some(Command::Show { id: 7 }));

        let cli = Cli::parse_from(["cw-careers", "list", "--search", "react"]);
        assert_eq!(
            cli.command,
            Some(Command::List {
                search: "react".into()
            })
        );

        let cli = Cli::parse_from(["cw-careers", "--api-url", "http://x"]);
        assert_eq!(cli.command, None);
        assert_eq!(cli.keymap, PathBuf::from("keybinds.conf"));
    }
}
