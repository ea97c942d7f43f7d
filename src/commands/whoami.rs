use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::error::AdminResult;
use crate::logging::get_log_file_path;

pub async fn handle_whoami(_matches: &ArgMatches) -> AdminResult<()> {
    let context = CliContext::load();
    let roles = context.roles();

    println!("{}: {}", "API".bold(), context.api_url());
    println!(
        "{}: {}",
        "Token".bold(),
        if context.has_api_token() { "configured".green() } else { "missing".red() }
    );
    if roles.roles().is_empty() {
        println!("{}: {}", "Roles".bold(), "none".dimmed());
    } else {
        println!("{}: {}", "Roles".bold(), roles.roles().join(", "));
    }
    println!(
        "{}: {}",
        "Can edit".bold(),
        if roles.has_parametrizations_writer() { "yes".green() } else { "no (read-only)".yellow() }
    );

    if let Some(path) = get_log_file_path() {
        println!("{}: {}", "Log".bold(), path.display().to_string().dimmed());
    }

    Ok(())
}
