use anyhow::Context;
use clap::Parser;
use mdnote::config::{Cli, Command, NoteCommand};
use mdnote::utils::logger;
use mdnote::{App, AppConfig, MdNoteError};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI arguments: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::debug!("Command failed: {:?}", e);
        eprintln!("❌ {:#}", e);

        let exit_code = e
            .downcast_ref::<MdNoteError>()
            .map(MdNoteError::exit_code)
            .unwrap_or(1);
        std::process::exit(exit_code);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match &cli.command {
        Command::Note {
            command: NoteCommand::Add(args),
        } => {
            let mut app = App::new(config, cli.absolute, std::io::stdout().lock());
            app.note_add(args, std::io::stdin().lock(), &chrono::Local::now())
                .context("Error writing note")?;
        }
        Command::Convert(args) => {
            let mut app = App::new(config, cli.absolute, std::io::stdout().lock());
            app.convert(args, std::io::stdin().lock())
                .context("Error converting Markdown")?;
        }
        Command::Serve(args) => {
            mdnote::app::commands::serve(&config, args)
                .await
                .context("HTTP server stopped")?;
        }
    }

    Ok(())
}
