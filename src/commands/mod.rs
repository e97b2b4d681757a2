pub mod init;
pub mod lookup;
pub mod months;
pub mod prefs;
pub mod translate;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Look up attendance for a month")]
    Lookup(lookup::LookupArgs),
    #[command(about = "Translate a piece of text", arg_required_else_help = true)]
    Translate(translate::TranslateArgs),
    #[command(about = "List the months available for lookup")]
    Months(months::MonthsArgs),
    #[command(about = "Show, set or clear saved preferences")]
    Prefs(prefs::PrefsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Lookup(args) => lookup::cmd(args).await,
            Commands::Translate(args) => translate::cmd(args).await,
            Commands::Months(args) => months::cmd(args),
            Commands::Prefs(args) => prefs::cmd(args),
        }
    }
}
