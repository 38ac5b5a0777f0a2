mod run;
pub use run::{Action, ActionError, apply, parse_actions};

use std::path::Path;
use std::time::Duration;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::model::AppConfig;
use crate::ops::registry::all_views;
use crate::ops::session::Session;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let command = match cli.command {
        Some(cmd) => cmd,
        None => return Err("no subcommand given (run `dk` without arguments for the TUI)".into()),
    };

    match command {
        Commands::Screens => cmd_screens(json),
        Commands::Trees => cmd_trees(&load_config_cwd(cli.config.as_deref())?, json),
        Commands::Run(args) => cmd_run(&args, &load_config_cwd(cli.config.as_deref())?, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_config_cwd(explicit: Option<&str>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    Ok(config_io::load_config(explicit.map(Path::new), &cwd)?)
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_screens(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let views = all_views();
    if json {
        println!("{}", serde_json::to_string_pretty(&views)?);
    } else {
        for line in format_views(&views) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_trees(config: &AppConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&config.trees)?);
        return Ok(());
    }
    for (i, (name, tree)) in config.trees.iter().enumerate() {
        if i > 0 {
            println!();
        }
        for line in format_tree(name, tree) {
            println!("{}", line);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Session replay
// ---------------------------------------------------------------------------

fn cmd_run(args: &RunArgs, config: &AppConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let actions = parse_actions(&args.actions)?;
    let scan_delay = Duration::from_millis(config.scan.delay_ms);
    let mut session = Session::with_log(config);

    for (raw, action) in args.actions.iter().zip(&actions) {
        log::debug!("run: applying {}", raw);
        apply(&mut session, action, scan_delay)
            .map_err(|e| format!("action {:?} failed: {}", raw, e))?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&state_to_json(&session))?);
    } else {
        for line in format_state(&session) {
            println!("{}", line);
        }
    }
    Ok(())
}
