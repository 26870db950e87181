//! Listing helpers for reading a whole dictionary: numeric order, text filter, and
//! sections of one hundred codes (`H1-H100`, `H101-H200`, ...).

use std::collections::BTreeMap;

use scroll_core::preprocess::{Preprocessor, QueryPreprocessor};
use scroll_core::{Language, StrongsCode, StrongsDictionary, StrongsEntry};

pub type EntryRef<'a> = (&'a StrongsCode, &'a StrongsEntry);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryGroup {
    pub language: Language,
    pub start: u64,
    pub end: u64,
}

impl EntryGroup {
    pub fn for_code(code: &StrongsCode) -> Self {
        let start = (code.number().saturating_sub(1) / 100) * 100 + 1;
        Self {
            language: code.language(),
            start,
            end: start.saturating_add(99),
        }
    }

    pub fn label(&self) -> String {
        let prefix = self.language.prefix();
        format!("{prefix}{}-{prefix}{}", self.start, self.end)
    }
}

fn field_matches(field: Option<&str>, query: &str) -> bool {
    field.is_some_and(|f| QueryPreprocessor.process(f).contains(query))
}

/// Keep entries whose code, lemma, transliteration, gloss or KJV note contains `query`
pub fn filter_entries<'a>(entries: Vec<EntryRef<'a>>, query: &str) -> Vec<EntryRef<'a>> {
    let query = QueryPreprocessor.process(query);
    if query.is_empty() {
        return entries;
    }

    entries
        .into_iter()
        .filter(|(code, entry)| {
            code.as_str().to_lowercase().contains(&query)
                || field_matches(entry.lemma.as_deref(), &query)
                || field_matches(entry.transliteration.as_deref(), &query)
                || field_matches(Some(entry.strongs_definition.as_str()), &query)
                || field_matches(Some(entry.kjv_translation_note.as_str()), &query)
        })
        .collect()
}

/// Bucket entries by hundreds, groups in ascending order, entry order kept within a group
pub fn group_by_hundreds<'a>(entries: Vec<EntryRef<'a>>) -> Vec<(EntryGroup, Vec<EntryRef<'a>>)> {
    let mut groups: BTreeMap<EntryGroup, Vec<EntryRef<'a>>> = BTreeMap::new();
    for entry in entries {
        groups.entry(EntryGroup::for_code(entry.0)).or_default().push(entry);
    }
    groups.into_iter().collect()
}

/// Sorted, filtered and grouped view of a dictionary
pub fn browse<'a>(
    dictionary: &'a StrongsDictionary,
    query: &str,
) -> Vec<(EntryGroup, Vec<EntryRef<'a>>)> {
    group_by_hundreds(filter_entries(dictionary.sorted_entries(), query))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hebrew() -> StrongsDictionary {
        let json = r#"{
            "H1": { "lemma": "אָב", "xlit": "ʼâb", "strongs_def": "father", "kjv_def": "chief, (fore-)father" },
            "H100": { "strongs_def": "nut-tree", "kjv_def": "nuts" },
            "H101": { "strongs_def": "a girdle", "kjv_def": "girdle" },
            "H430": { "lemma": "אֱלֹהִים", "xlit": "ʼĕlôhîym", "strongs_def": "God, god-like one", "kjv_def": "God" },
            "H7225": { "strongs_def": "the first, in place, time, order or rank", "kjv_def": "beginning" }
        }"#;
        StrongsDictionary::from_json(Language::Hebrew, json).unwrap()
    }

    fn codes<'a>(entries: &[EntryRef<'a>]) -> Vec<&'a str> {
        entries.iter().map(|(code, _)| code.as_str()).collect()
    }

    #[test]
    fn group_boundaries() {
        let group = |s: &str| EntryGroup::for_code(&StrongsCode::parse(s).unwrap());
        assert_eq!(group("H1").label(), "H1-H100");
        assert_eq!(group("H100").label(), "H1-H100");
        assert_eq!(group("H101").label(), "H101-H200");
        assert_eq!(group("G5624").label(), "G5601-G5700");
    }

    #[test]
    fn oversized_codes_get_the_last_group() {
        let json = r#"{
            "H18446744073709551610": { "strongs_def": "x", "kjv_def": "x" },
            "H999999999999999999999999": { "strongs_def": "y", "kjv_def": "y" }
        }"#;
        let dict = StrongsDictionary::from_json(Language::Hebrew, json).unwrap();

        let groups = browse(&dict, "");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0.start, 18446744073709551601);
        assert_eq!(groups[0].0.end, u64::MAX);
        assert_eq!(
            codes(&groups[0].1),
            ["H18446744073709551610", "H999999999999999999999999"]
        );
    }

    #[test]
    fn browse_groups_in_order() {
        let dict = hebrew();
        let groups = browse(&dict, "");

        let labels: Vec<String> = groups.iter().map(|(g, _)| g.label()).collect();
        assert_eq!(labels, ["H1-H100", "H101-H200", "H401-H500", "H7201-H7300"]);
        assert_eq!(codes(&groups[0].1), ["H1", "H100"]);
    }

    #[test]
    fn filter_matches_fields_case_insensitively() {
        let dict = hebrew();

        let hits = filter_entries(dict.sorted_entries(), "GOD");
        assert_eq!(codes(&hits), ["H430"]);

        let hits = filter_entries(dict.sorted_entries(), "beginning");
        assert_eq!(codes(&hits), ["H7225"]);

        let hits = filter_entries(dict.sorted_entries(), "h10");
        assert_eq!(codes(&hits), ["H100", "H101"]);

        let hits = filter_entries(dict.sorted_entries(), "  ʼâb ");
        assert_eq!(codes(&hits), ["H1"]);
    }

    #[test]
    fn empty_query_keeps_everything() {
        let dict = hebrew();
        assert_eq!(filter_entries(dict.sorted_entries(), "   ").len(), 5);
    }

    #[test]
    fn no_match_yields_no_groups() {
        let dict = hebrew();
        assert!(browse(&dict, "zebra").is_empty());
    }
}
