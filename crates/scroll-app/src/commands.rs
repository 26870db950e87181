use std::io::Write;

use clap::Subcommand;
use scroll_core::Language;
use scroll_types::Testament;

use crate::state::AppState;

pub mod books;
pub mod browse;
pub mod lookup;
pub mod read;

use books::handle_books;
use browse::handle_browse;
use lookup::handle_lookup;
use read::handle_read;

fn parse_testament(s: &str) -> Result<Testament, String> {
    Testament::parse(s).ok_or_else(|| format!("expected `old` or `new`, got {s:?}"))
}

fn parse_language(s: &str) -> Result<Language, String> {
    Language::parse(s).ok_or_else(|| format!("expected `hebrew` or `greek`, got {s:?}"))
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the books of the Bible
    Books {
        #[arg(long, value_parser = parse_testament)]
        testament: Option<Testament>,
    },
    /// Print one chapter
    Read {
        /// Book id or name, e.g. `Genesis` or `1 Samuel`
        book: String,
        chapter: u32,
        /// Show the Strong's definition behind every annotated word
        #[arg(long)]
        resolve: bool,
    },
    /// Look up Strong's reference codes, e.g. `H430 G2316`
    Lookup {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// List a whole dictionary in sections of one hundred
    Browse {
        #[arg(value_parser = parse_language)]
        language: Language,
        /// Only entries whose code, lemma, transliteration or definitions contain this text
        #[arg(long)]
        query: Option<String>,
        #[arg(long, default_value_t = 100)]
        limit: usize,
    },
}

/// Dispatch one command, writing its report to `out`
pub async fn run(state: &AppState, command: Command, out: &mut dyn Write) -> anyhow::Result<()> {
    tracing::debug!("Running {:?}", command);

    match command {
        Command::Books { testament } => handle_books(testament, out)?,
        Command::Read {
            book,
            chapter,
            resolve,
        } => handle_read(state, &book, chapter, resolve, out).await?,
        Command::Lookup { codes } => handle_lookup(state, &codes, out).await?,
        Command::Browse {
            language,
            query,
            limit,
        } => handle_browse(state, language, query.as_deref().unwrap_or(""), limit, out).await?,
    }

    Ok(())
}
