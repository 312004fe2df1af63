//! recipe-a11y - accessibility patterns demo
//!
//! Main entry point: a line-driven console standing in for the UI toolkit.

use std::io::{self, BufRead, Write};

use recipe_a11y::i18n::TranslationService;
use recipe_a11y::storage::config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

use app::{Command, ConsoleApp};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting recipe-a11y v{}", env!("CARGO_PKG_VERSION"));

    let config = config::load_config()?;
    let language = config.resolve_language();
    tracing::info!("Language: {}", language);

    let mut translations = TranslationService::for_language(language);
    if let Some(dir) = &config.translations_dir {
        if let Err(e) = translations.load_overrides(language, dir) {
            tracing::warn!("Ignoring translation overrides: {}", e);
        }
    }

    let mut app = ConsoleApp::new(&config, translations);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", app::HELP)?;
    loop {
        write!(stdout, "{}> ", app.current_screen().name())?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(app::CommandError::Empty) => continue,
            Err(e) => {
                writeln!(stdout, "{}", e)?;
                continue;
            }
        };
        let quit = command == Command::Quit;

        for output in app.handle(command) {
            writeln!(stdout, "{}", output)?;
        }
        if quit {
            break;
        }
    }

    tracing::info!("Bye");
    Ok(())
}
