use std::io::Write;

use scroll_core::lookup::NO_REFERENCE;
use scroll_core::{LookupResult, StrongsEntry};

use crate::state::AppState;

fn write_entry(out: &mut dyn Write, entry: &StrongsEntry) -> std::io::Result<()> {
    let optional = [
        ("Lemma", &entry.lemma),
        ("Transliteration", &entry.transliteration),
        ("Pronunciation", &entry.pronunciation),
        ("Derivation", &entry.derivation),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            writeln!(out, "  {label}: {value}")?;
        }
    }

    writeln!(out, "  Definition: {}", entry.strongs_definition)?;
    writeln!(out, "  KJV: {}", entry.kjv_translation_note)
}

pub async fn handle_lookup(
    state: &AppState,
    codes: &[String],
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    for code in codes {
        match state.store.resolve(code).await {
            LookupResult::Found { entry, language } => {
                writeln!(out, "{code} ({language})")?;
                write_entry(out, &entry)?;
            }
            LookupResult::NotFound(reason) => {
                if reason.is_retryable() {
                    tracing::warn!("Lookup of {} failed: {}", code, reason);
                }
                writeln!(out, "{code}: {NO_REFERENCE} ({reason})")?;
            }
        }
    }

    Ok(())
}
