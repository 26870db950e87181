use std::io::Write;

use scroll_core::catalog::{book_list, books_in};
use scroll_types::Testament;

pub fn handle_books(testament: Option<Testament>, out: &mut dyn Write) -> anyhow::Result<()> {
    let books = match testament {
        Some(testament) => books_in(testament),
        None => book_list(),
    };

    for book in &books {
        writeln!(out, "{:<16} {:<18} {}", book.id, book.display_name, book.testament)?;
    }

    Ok(())
}
