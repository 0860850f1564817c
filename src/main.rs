use clap::Parser;
use primer::cli::{self, snippets, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli::bootstrap();

    match cli.command {
        Command::Hello => snippets::run(|out| snippets::hello(out)),
        Command::Greet { name } => snippets::run(|out| snippets::greet(out, &name)),
        Command::Sums => snippets::run(|out| snippets::sums(out)),
        Command::Reverse { text } => snippets::run(|out| snippets::reverse(out, &text)),
        Command::Serve => cli::serve::run(config).await,
    }
}
