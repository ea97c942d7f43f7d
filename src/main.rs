use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};

use paradmin::cli_context::CliContext;
use paradmin::commands::{handle_auth, handle_edit, handle_list, handle_show, handle_status, handle_whoami};
use paradmin::entities::EntityKind;
use paradmin::error::{AdminError, AdminResult};
use paradmin::interactive::run_interactive_mode;
use paradmin::logging::{init_logging, log_error, log_panic_info};
use paradmin::models::Status;

fn uuid_arg() -> Arg {
    Arg::new("uuid")
        .value_name("UUID")
        .help("Record identifier")
        .required(true)
        .index(1)
}

fn entity_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .subcommand_required(true)
        .subcommand(Command::new("list").about("List records with their row actions"))
        .subcommand(
            Command::new("show")
                .about("Show one record as the read-only edit modal does")
                .arg(uuid_arg()),
        )
        .subcommand(
            Command::new("edit")
                .about("Unlock, change and save a record")
                .arg(uuid_arg())
                .arg(
                    Arg::new("set")
                        .long("set")
                        .short('s')
                        .value_name("FIELD=VALUE")
                        .help("Field to change (repeatable); masked fields accept either form")
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(Command::new("activate").about("Set status to active").arg(uuid_arg()))
        .subcommand(Command::new("inactivate").about("Set status to inactive").arg(uuid_arg()))
}

fn build_cli() -> Command {
    Command::new("paradmin")
        .about("Parametrizations back-office - manage companies, users and teams")
        .version("1.0.0")
        .subcommand(
            Command::new("auth")
                .about("Configure API access")
                .arg(
                    Arg::new("token")
                        .long("token")
                        .value_name("TOKEN")
                        .help("Bearer token for the parametrizations API"),
                )
                .arg(
                    Arg::new("url")
                        .long("url")
                        .value_name("URL")
                        .help("Base URL of the API"),
                )
                .arg(
                    Arg::new("roles")
                        .long("roles")
                        .value_name("ROLES")
                        .help("Comma separated roles, e.g. parametrizations_writer"),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the current configuration")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("whoami").about("Show API and role information"))
        .subcommand(entity_command("companies", "Manage companies"))
        .subcommand(entity_command("users", "Manage users"))
        .subcommand(entity_command("teams", "Manage teams"))
        .subcommand(Command::new("interactive").about("Open the interactive panel (default)"))
}

async fn handle_entity(kind: EntityKind, matches: &ArgMatches) -> AdminResult<()> {
    match matches.subcommand() {
        Some(("list", sub)) => handle_list(kind, sub).await,
        Some(("show", sub)) => handle_show(kind, sub).await,
        Some(("edit", sub)) => handle_edit(kind, sub).await,
        Some(("activate", sub)) => handle_status(kind, sub, Status::Active).await,
        Some(("inactivate", sub)) => handle_status(kind, sub, Status::Inactive).await,
        _ => Err(AdminError::InvalidInput(format!(
            "Unknown {} subcommand. Use 'paradmin {} --help' for available options.",
            kind, kind
        ))),
    }
}

async fn handle_interactive() -> AdminResult<()> {
    let mut context = CliContext::load();
    let client = context.verified_client()?;
    run_interactive_mode(client, context.roles()).await
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: could not initialize logging: {}", e);
    }
    std::panic::set_hook(Box::new(|info| log_panic_info(info)));

    let matches = build_cli().get_matches();

    let result = match matches.subcommand() {
        Some(("auth", sub_matches)) => handle_auth(sub_matches).await,
        Some(("whoami", sub_matches)) => handle_whoami(sub_matches).await,
        Some(("companies", sub_matches)) => handle_entity(EntityKind::Companies, sub_matches).await,
        Some(("users", sub_matches)) => handle_entity(EntityKind::Users, sub_matches).await,
        Some(("teams", sub_matches)) => handle_entity(EntityKind::Teams, sub_matches).await,
        Some(("interactive", _)) | None => handle_interactive().await,
        _ => Err(AdminError::InvalidInput(
            "Unknown command. Use 'paradmin --help' for available commands.".to_string(),
        )),
    };

    if let Err(e) = result {
        log_error(&e.to_string());
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
