use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use gitignore_resolver::{
    logging, Config, GitHubSource, OutputTarget, Result, TemplateResolver,
};

#[derive(Parser, Debug)]
#[command(
    name = "gitignore-resolver",
    version,
    about = "Downloads and merges gitignore templates",
    long_about = "Lists, searches and downloads gitignore templates from the \
    github/gitignore repository. Several templates can be merged into one file."
)]
struct Cli {
    #[arg(short = 'l', long, help = "Lists all available gitignore files")]
    list: bool,

    #[arg(
        short = 's',
        long,
        num_args = 1..,
        value_name = "TERM",
        help = "Search for a list of gitignore files in repo"
    )]
    search: Vec<String>,

    #[arg(
        short = 'c',
        long,
        num_args = 1..,
        value_name = "NAME",
        help = "Downloads and merge gitignore files in given list"
    )]
    create: Vec<String>,

    #[arg(short = 'S', long, help = "Saves results to .gitignore in current dir")]
    save: bool,

    #[arg(short = 'q', long, help = "Hide progress notices")]
    quiet: bool,
}

impl Cli {
    fn has_operation(&self) -> bool {
        self.list || !self.search.is_empty() || !self.create.is_empty()
    }
}

fn print_usage() {
    print!("{}", Cli::command().render_help());
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;
    let source = Arc::new(GitHubSource::new(&config.user_agent));
    let resolver = TemplateResolver::new(source, &config)?;

    if cli.list {
        return resolver.list(&mut io::stdout().lock()).await;
    }

    if !cli.search.is_empty() {
        resolver.search(&cli.search, &mut io::stdout().lock()).await?;
        return Ok(());
    }

    let target = OutputTarget::select(cli.save, &config.save_path);
    resolver
        .find_and_download_with(&cli.create, || target.open())
        .await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            print_usage();
            println!("{}", e);
            return ExitCode::SUCCESS;
        }
    };

    if !cli.has_operation() {
        print_usage();
        return ExitCode::SUCCESS;
    }

    if let Err(e) = logging::init_logging(cli.quiet) {
        println!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}
