//! Shelfmark CLI binary.
//!
//! - Preview a book's table of contents from its ISBN
//! - Show the catalog metadata hint for an ISBN
//! - Normalize or extract outlines from local files

use clap::Parser;
use shelfmark::{ShelfmarkConfig, init_tracing};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, extract_file, normalize_file};

    // GEMINI_API_KEY may live in a .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose).map_err(|e| e as Box<dyn std::error::Error>)?;

    let config = match &cli.config {
        Some(path) => ShelfmarkConfig::from_file(path)?,
        None => ShelfmarkConfig::load()?,
    };
    config.validate()?;

    match cli.command {
        #[cfg(feature = "gemini")]
        Commands::Preview {
            isbn,
            title,
            format,
        } => {
            cli::preview(&config, &isbn, title.as_deref(), format).await?;
        }

        #[cfg(not(feature = "gemini"))]
        Commands::Preview { .. } => {
            return Err("this build has no generation backend; enable the `gemini` feature".into());
        }

        Commands::Hint { isbn } => {
            cli::hint(&config, &isbn).await?;
        }

        Commands::Normalize { file, format } => {
            normalize_file(&file, format)?;
        }

        Commands::Extract { file, format } => {
            extract_file(&file, format)?;
        }
    }

    Ok(())
}
