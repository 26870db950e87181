pub mod browse;
pub mod loader;
pub mod store;

pub use browse::{EntryGroup, EntryRef, browse, filter_entries, group_by_hundreds};
pub use loader::{FileSource, HttpSource, source_from_config};
pub use store::DictionaryStore;
