pub mod catalog;
pub mod dictionary;
pub mod language;
pub mod lookup;
pub mod preprocess;
pub mod tokenizer;

pub use dictionary::{DictionarySource, LoadError, StrongsDictionary, StrongsEntry};
pub use language::{CodeError, Language, StrongsCode};
pub use lookup::{LookupResult, NotFoundReason};
pub use tokenizer::{VerseSegment, strip_annotations, tokenize};
