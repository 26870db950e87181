use scroll_types::{BookInfo, Testament};

/// Number of Old Testament books at the start of [`BOOKS`]
pub const OLD_TESTAMENT_LEN: usize = 39;

/// Canon order: (file id, display name)
pub const BOOKS: [(&str, &str); 66] = [
    ("Genesis", "Genesis"),
    ("Exodus", "Exodus"),
    ("Leviticus", "Leviticus"),
    ("Numbers", "Numbers"),
    ("Deuteronomy", "Deuteronomy"),
    ("Joshua", "Joshua"),
    ("Judges", "Judges"),
    ("Ruth", "Ruth"),
    ("1Samuel", "1 Samuel"),
    ("2Samuel", "2 Samuel"),
    ("1Kings", "1 Kings"),
    ("2Kings", "2 Kings"),
    ("1Chronicles", "1 Chronicles"),
    ("2Chronicles", "2 Chronicles"),
    ("Ezra", "Ezra"),
    ("Nehemiah", "Nehemiah"),
    ("Esther", "Esther"),
    ("Job", "Job"),
    ("Psalms", "Psalms"),
    ("Proverbs", "Proverbs"),
    ("Ecclesiastes", "Ecclesiastes"),
    ("SongofSolomon", "Song of Solomon"),
    ("Isaiah", "Isaiah"),
    ("Jeremiah", "Jeremiah"),
    ("Lamentations", "Lamentations"),
    ("Ezekiel", "Ezekiel"),
    ("Daniel", "Daniel"),
    ("Hosea", "Hosea"),
    ("Joel", "Joel"),
    ("Amos", "Amos"),
    ("Obadiah", "Obadiah"),
    ("Jonah", "Jonah"),
    ("Micah", "Micah"),
    ("Nahum", "Nahum"),
    ("Habakkuk", "Habakkuk"),
    ("Zephaniah", "Zephaniah"),
    ("Haggai", "Haggai"),
    ("Zechariah", "Zechariah"),
    ("Malachi", "Malachi"),
    ("Matthew", "Matthew"),
    ("Mark", "Mark"),
    ("Luke", "Luke"),
    ("John", "John"),
    ("Acts", "Acts"),
    ("Romans", "Romans"),
    ("1Corinthians", "1 Corinthians"),
    ("2Corinthians", "2 Corinthians"),
    ("Galatians", "Galatians"),
    ("Ephesians", "Ephesians"),
    ("Philippians", "Philippians"),
    ("Colossians", "Colossians"),
    ("1Thessalonians", "1 Thessalonians"),
    ("2Thessalonians", "2 Thessalonians"),
    ("1Timothy", "1 Timothy"),
    ("2Timothy", "2 Timothy"),
    ("Titus", "Titus"),
    ("Philemon", "Philemon"),
    ("Hebrews", "Hebrews"),
    ("James", "James"),
    ("1Peter", "1 Peter"),
    ("2Peter", "2 Peter"),
    ("1John", "1 John"),
    ("2John", "2 John"),
    ("3John", "3 John"),
    ("Jude", "Jude"),
    ("Revelation", "Revelation"),
];

fn testament_at(index: usize) -> Testament {
    if index < OLD_TESTAMENT_LEN {
        Testament::Old
    } else {
        Testament::New
    }
}

fn info_at(index: usize) -> BookInfo {
    let (id, name) = BOOKS[index];
    BookInfo {
        id: id.to_string(),
        display_name: name.to_string(),
        testament: testament_at(index),
    }
}

/// Every book in canon order
pub fn book_list() -> Vec<BookInfo> {
    (0..BOOKS.len()).map(info_at).collect()
}

pub fn books_in(testament: Testament) -> Vec<BookInfo> {
    book_list()
        .into_iter()
        .filter(|b| b.testament == testament)
        .collect()
}

/// Look up a book by id or display name
pub fn find_book(name: &str) -> Option<BookInfo> {
    BOOKS
        .iter()
        .position(|(id, display)| *id == name || *display == name)
        .map(info_at)
}

/// `1Samuel` → `1 Samuel`; unknown ids are returned unchanged
pub fn display_name(id: &str) -> String {
    BOOKS
        .iter()
        .find(|(book_id, _)| *book_id == id)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| id.to_string())
}

/// `Song of Solomon` → `SongofSolomon`; unknown names are returned unchanged
pub fn book_id(display: &str) -> String {
    BOOKS
        .iter()
        .find(|(_, name)| *name == display)
        .map(|(id, _)| id.to_string())
        .unwrap_or_else(|| display.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_shape() {
        let books = book_list();
        assert_eq!(books.len(), 66);
        assert_eq!(books[0].id, "Genesis");
        assert_eq!(books[38].id, "Malachi");
        assert_eq!(books[38].testament, Testament::Old);
        assert_eq!(books[39].id, "Matthew");
        assert_eq!(books[39].testament, Testament::New);
        assert_eq!(books_in(Testament::Old).len(), 39);
        assert_eq!(books_in(Testament::New).len(), 27);
    }

    #[test]
    fn name_mapping() {
        assert_eq!(display_name("SongofSolomon"), "Song of Solomon");
        assert_eq!(display_name("Apocrypha"), "Apocrypha");
        assert_eq!(book_id("1 Thessalonians"), "1Thessalonians");
        assert_eq!(book_id("Unknown"), "Unknown");
    }

    #[test]
    fn find_by_either_name() {
        assert_eq!(find_book("2Kings").unwrap().display_name, "2 Kings");
        assert_eq!(find_book("2 Kings").unwrap().id, "2Kings");
        assert!(find_book("Enoch").is_none());
    }
}
