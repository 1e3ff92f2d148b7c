use clap::Parser;
use miette::Result;
use segdisp::cli::{Cli, Commands};
use segdisp::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().with_verbose(cli.verbose);

    match cli.command {
        Commands::Generate(args) => {
            segdisp::cli::generate::run(args, &printer)?;
        }
        Commands::Inspect(args) => segdisp::cli::inspect::run(args, &printer)?,
        Commands::Init(args) => segdisp::cli::init::run(args, &printer)?,
        Commands::Completions(args) => segdisp::cli::completions::run(args)?,
    }

    Ok(())
}
