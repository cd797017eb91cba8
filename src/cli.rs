use crate::report::{Options, OutputFormat};
use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::aot::{generate, Shell};
use std::io::IsTerminal;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (under Apache License version 2.0)"
);

#[derive(Parser)]
#[command(name = "contributor")]
#[command(about = "Output the ranking table of people who wrote a lot of code (git only)")]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    #[arg(short, long, help = "Change output format to markdown")]
    pub markdown: bool,

    #[arg(short, long, help = "Generate Contributors.md file", conflicts_with = "json")]
    pub file: bool,

    #[arg(long, help = "Output as JSON", conflicts_with = "markdown")]
    pub json: bool,

    #[arg(long, help = "Path inside the git repository (defaults to the current directory)")]
    pub repo: Option<PathBuf>,

    #[arg(long, help = "Branch to count instead of the origin's default branch")]
    pub branch: Option<String>,

    #[arg(short, long, help = "Log git invocations to stderr")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a shell completion script
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn options(&self) -> Options {
        let format = if self.json {
            OutputFormat::Json
        } else if self.markdown {
            OutputFormat::Markdown
        } else {
            OutputFormat::Plain
        };
        Options {
            format,
            write_to_file: self.file,
            repo: self.repo.clone(),
            branch: self.branch.clone(),
            show_progress: std::io::stderr().is_terminal(),
        }
    }

    pub fn execute(self) -> Result<()> {
        crate::logging::setup_logger(self.verbose);
        match self.command {
            Some(Commands::Completion { shell }) => {
                let mut cmd = Cli::command();
                let name = cmd.get_name().to_string();
                generate(shell, &mut cmd, name, &mut std::io::stdout());
                Ok(())
            }
            None => crate::report::exec(self.options()),
        }
    }
}
