use std::io::Write;
use std::path::Path;

use anyhow::Context;
use scroll_core::catalog::display_name;
use scroll_core::{VerseSegment, tokenize};

use crate::library::load_book;
use crate::state::AppState;

pub async fn handle_read(
    state: &AppState,
    book: &str,
    chapter: u32,
    resolve: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let book = load_book(Path::new(&state.config.library.data_dir), book).await?;
    let title = display_name(&book.book);
    let chapter_data = book
        .chapter(chapter)
        .with_context(|| format!("{title} has no chapter {chapter}"))?;

    writeln!(out, "{title} {chapter}")?;

    for verse in &chapter_data.verses {
        let segments = tokenize(&verse.text);
        let text: String = segments.iter().map(VerseSegment::text).collect();
        writeln!(out, "{:>3} {}", verse.verse, text)?;

        if !resolve {
            continue;
        }

        for segment in segments.iter().filter(|s| s.is_annotated()) {
            let Some(code) = segment.primary_code() else {
                continue;
            };
            let result = state.store.resolve(code).await;
            writeln!(out, "      {} [{}] {}", segment.text(), code, result.summary())?;
        }
    }

    Ok(())
}
