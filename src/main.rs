use clap::Parser;
use miette::Result;
use sprites::cli::{Cli, Commands};
use sprites::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new(cli.quiet);

    match cli.command {
        Commands::Build(args) => sprites::cli::build::run(args, &printer)?,
        Commands::Validate(args) => sprites::cli::validate::run(args, &printer)?,
        Commands::List(args) => sprites::cli::list::run(args, &printer)?,
        Commands::Init(args) => sprites::cli::init::run(args, &printer)?,
        Commands::Completions(args) => sprites::cli::completions::run(args)?,
    }

    Ok(())
}
