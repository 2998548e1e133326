use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use commands::{CommandContext, CommandError};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let mut error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                if let CommandError::Parse(parse_error) = &e {
                    error_json["error"]["line"] = parse_error.line.into();
                    error_json["error"]["column"] = parse_error.column.into();
                }
                eprintln!("{}", serde_json::to_string_pretty(&error_json).unwrap());
            } else {
                match &e {
                    // parse errors point at the offending spot in the filter
                    CommandError::Parse(parse_error) => {
                        eprintln!("Error: {}", parse_error.annotate())
                    }
                    _ => eprintln!("Error: {e}"),
                }
            }
            error_exit_code(&e)
        }
    }
}

fn run(cli: &Cli) -> commands::Result<()> {
    let ctx = CommandContext::from_cli(cli);

    match &cli.command {
        Some(Commands::Translate {
            input,
            object_type,
            dereference,
            wrap,
        }) => {
            let opts = commands::translate::TranslateOptions {
                input: input.clone(),
                object_type: object_type.clone(),
                dereference: dereference.clone(),
                wrap: *wrap,
            };
            commands::translate::execute(&ctx, &opts)
        }
        Some(Commands::Check { input }) => commands::check::execute(&ctx, input),
        Some(Commands::Completions { shell }) => {
            commands::completions::execute(shell).map_err(CommandError::from)
        }
        None => {
            if !cli.quiet {
                println!("lxq - Translate LDAP filters into XPath resource queries");
                println!("Use --help for usage information");
            }
            Ok(())
        }
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Parse(_) => "PARSE_ERROR",
        CommandError::Name(_) => "NAME_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Parse(_) => ExitCode::from(1),
        CommandError::Name(_) => ExitCode::from(2),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Json(_) => ExitCode::from(1),
    }
}
