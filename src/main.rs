use clap::Parser;
use release_summary::{Result, cli, command};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("release_summary")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = cli::Args::parse();

    initialize_logger(cli_args.debug)?;

    let summary = match &cli_args.command {
        cli::Command::Release { tag } => {
            command::release::execute(&cli_args, tag).await?
        }
        cli::Command::PullRequest { number } => {
            command::pull_request::execute(&cli_args, *number).await?
        }
    };

    println!("{summary}");

    Ok(())
}
