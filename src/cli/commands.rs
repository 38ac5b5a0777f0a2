use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dk", about = concat!("docket v", env!("CARGO_PKG_VERSION"), " - document management in the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use this config file instead of discovering docket.toml
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every screen with its key and chrome
    Screens,
    /// Print the configured document trees
    Trees,
    /// Apply actions to a fresh session and print the resulting state
    Run(RunArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// Actions, applied in order: home, section:<key>, tree:<name>,
    /// expand:<dept>, dept:<dept>, sub:<sub>, upload:<name>=<bytes>, scan,
    /// field:<name>=<value>, tag+:<tag>, tag-:<tag>, next, back, save, new,
    /// cancel, fav:<id>
    #[arg(required = true, value_name = "ACTION")]
    pub actions: Vec<String>,
}
