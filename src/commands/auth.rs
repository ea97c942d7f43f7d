use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::config::{load_config, parse_roles};
use crate::error::AdminResult;

pub async fn handle_auth(matches: &ArgMatches) -> AdminResult<()> {
    if let Some(token) = matches.get_one::<String>("token") {
        let url = matches.get_one::<String>("url").cloned();
        let roles = matches.get_one::<String>("roles").map(|r| parse_roles(r));

        let mut context = CliContext::new();
        context.save_credentials(token.clone(), url, roles)?;
        println!("{} {}", "✓".green().bold(), "API token saved successfully!".green());
        println!("{}: {}", "API".dimmed(), context.api_url());
    } else if matches.get_flag("show") {
        let config = load_config();
        match config.api_token {
            Some(token) if token.chars().count() > 8 => {
                let head: String = token.chars().take(4).collect();
                let tail: String = token.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
                println!("API Token: {}...{}", head, tail);
            }
            Some(_) => println!("API Token: ****"),
            None => println!("No API token configured"),
        }
        println!("API URL: {}", config.api_url);
    } else {
        println!("Usage: paradmin auth --token <TOKEN> [--url <URL>] [--roles <ROLES>] or paradmin auth --show");
    }
    Ok(())
}
