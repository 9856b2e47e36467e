pub mod calc;
pub mod form;
pub mod init;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Compute remaining time, overtime and the go-home time")]
    Calc(calc::CalcArgs),
    #[command(about = "Interactive calculator form")]
    Form,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Calc(args) => calc::cmd(args),
            Commands::Form => form::cmd(),
        }
    }
}
