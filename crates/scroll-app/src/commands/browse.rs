use std::io::Write;

use anyhow::Context;
use scroll_core::Language;
use scroll_strongs::browse;

use crate::state::AppState;

pub async fn handle_browse(
    state: &AppState,
    language: Language,
    query: &str,
    limit: usize,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let dictionary = state
        .store
        .load(language)
        .await
        .with_context(|| format!("failed to load the {language} dictionary"))?;

    let groups = browse(&dictionary, query);
    if groups.is_empty() {
        writeln!(out, "No entries found matching {query:?}")?;
        return Ok(());
    }

    let total: usize = groups.iter().map(|(_, entries)| entries.len()).sum();
    let mut remaining = limit;

    for (group, entries) in &groups {
        if remaining == 0 {
            break;
        }
        writeln!(out, "{}", group.label())?;

        for (code, entry) in entries.iter().take(remaining) {
            remaining -= 1;

            let lemma = entry.lemma.as_deref().unwrap_or("");
            writeln!(out, "  {:<7} {:<12} {}", code.as_str(), lemma, entry.strongs_definition)?;
        }
    }

    if total > limit {
        writeln!(out, "... {} more, raise --limit to see them", total - limit)?;
    }

    Ok(())
}
