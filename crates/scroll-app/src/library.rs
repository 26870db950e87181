use std::path::Path;

use anyhow::Context;
use scroll_core::catalog::find_book;
use scroll_types::Book;

/// Load `<data_dir>/<id>.json` for a book given by id or display name
pub async fn load_book(data_dir: &Path, name: &str) -> anyhow::Result<Book> {
    let info = find_book(name).with_context(|| format!("unknown book {name:?}"))?;
    let path = data_dir.join(format!("{}.json", info.id));

    let json = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let book: Book = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    tracing::debug!("Loaded {} with {} chapters", info.display_name, book.chapter_count());
    Ok(book)
}
