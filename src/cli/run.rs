use crate::{
    actions::{ActionDispatcher, PlatformActions},
    config::Config,
    domain::ContactBook,
    errors::AppError,
    grid::{GridRenderer, Tap},
    logging::init_tracing,
    platform::{DesktopPlatform, EchoPlatform},
    prelude::command::{Cli, Commands},
    tui,
};
use clap::Parser;
use dotenv::dotenv;

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    let config = Config::resolve(
        cli.dry_run,
        cli.dialer.as_deref(),
        cli.notice_ms,
        cli.log_file,
    )?;
    let command = cli.command.unwrap_or(Commands::Ui);

    // Stderr would draw over the UI, so it stays quiet unless logging to a file.
    let default_filter = match (command, &config.log_file) {
        (_, Some(_)) => "info",
        (Commands::Ui, None) => "off",
        _ => "warn",
    };
    init_tracing(config.log_file.as_deref(), default_filter)?;

    let book = ContactBook::bundled()?;

    match command {
        Commands::Ui => tui::run(book, &config),
        Commands::List => {
            list_contacts(&book);
            Ok(())
        }
        Commands::Dial { index } => {
            let index = position(&book, index)?;
            tap(&book, &config, Tap::Card(index))
        }
        Commands::Copy { index } => {
            let index = position(&book, index)?;
            tap(&book, &config, Tap::PhoneNumber(index))
        }
        Commands::Home => tap(&book, &config, Tap::HeaderAction),
    }
}

/// Converts a 1-based position from the listing into a book index.
fn position(book: &ContactBook, index: usize) -> Result<usize, AppError> {
    if index == 0 || index > book.len() {
        return Err(AppError::NotFound(format!("Contact #{index}")));
    }
    Ok(index - 1)
}

fn list_contacts(book: &ContactBook) {
    if book.is_empty() {
        println!("No contacts");
        return;
    }

    let view = GridRenderer::new(book).render();
    for card in &view.cards {
        let i = card.index + 1;
        println!(
            "{i:>3}. r{} c{}  {:<20} {:<16} {}",
            card.row + 1,
            card.column + 1,
            card.name.text,
            card.phone.text,
            card.image
        );
    }
}

fn tap(book: &ContactBook, config: &Config, tap: Tap) -> Result<(), AppError> {
    let Some(request) = GridRenderer::new(book).on_tap(tap) else {
        return Err(AppError::NotFound("Contact".to_string()));
    };

    let platform: Box<dyn PlatformActions> = if config.dry_run {
        Box::new(EchoPlatform)
    } else {
        Box::new(DesktopPlatform::new(config.dialer.clone()))
    };

    ActionDispatcher::new(platform)
        .with_notice_duration(config.notice_duration)
        .dispatch(&request);
    Ok(())
}
