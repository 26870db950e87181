use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Concordance language, selected by the reference code prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    /// `H` codes, Old Testament
    Hebrew,
    /// `G` codes, New Testament
    Greek,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Hebrew, Language::Greek];

    pub fn prefix(&self) -> char {
        match self {
            Language::Hebrew => 'H',
            Language::Greek => 'G',
        }
    }

    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix {
            'H' => Some(Language::Hebrew),
            'G' => Some(Language::Greek),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Hebrew => "hebrew",
            Language::Greek => "greek",
        }
    }

    /// Accepts `hebrew`/`greek` or the bare prefix letter, case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hebrew" | "h" => Some(Language::Hebrew),
            "greek" | "g" => Some(Language::Greek),
            _ => None,
        }
    }

    /// Conventional file name of this language's dictionary
    pub fn file_name(&self) -> &'static str {
        match self {
            Language::Hebrew => "strongs-hebrew-dictionary.json",
            Language::Greek => "strongs-greek-dictionary.json",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Hebrew => f.write_str("Hebrew"),
            Language::Greek => f.write_str("Greek"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    #[error("empty reference code")]
    Empty,

    #[error("reference code {0:?} must start with H or G")]
    Prefix(String),

    #[error("reference code {0:?} must be a prefix followed by digits")]
    Digits(String),

    #[error("reference code {code:?} does not belong to the {expected} dictionary")]
    WrongDictionaryForPrefix { code: String, expected: Language },
}

/// A syntactically valid Strong's reference: `H` or `G` followed by one or more ASCII digits.
///
/// The text is kept verbatim, so `H0430` and `H430` are different codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StrongsCode {
    raw: String,
    language: Language,
}

impl StrongsCode {
    pub fn parse(s: &str) -> Result<Self, CodeError> {
        let mut chars = s.chars();
        let prefix = chars.next().ok_or(CodeError::Empty)?;
        let language =
            Language::from_prefix(prefix).ok_or_else(|| CodeError::Prefix(s.to_string()))?;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodeError::Digits(s.to_string()));
        }

        Ok(Self {
            raw: s.to_string(),
            language,
        })
    }

    /// Parse a code that must belong to `language`'s dictionary
    pub fn parse_in(s: &str, language: Language) -> Result<Self, CodeError> {
        let code = Self::parse(s)?;
        if code.language != language {
            return Err(CodeError::WrongDictionaryForPrefix {
                code: code.raw,
                expected: language,
            });
        }
        Ok(code)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Numeric part, saturating for absurdly long digit runs
    pub fn number(&self) -> u64 {
        self.raw[1..].parse().unwrap_or(u64::MAX)
    }
}

impl FromStr for StrongsCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for StrongsCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Ord for StrongsCode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.language
            .cmp(&other.language)
            .then_with(|| self.number().cmp(&other.number()))
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for StrongsCode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_codes() {
        let code = StrongsCode::parse("H430").unwrap();
        assert_eq!(code.language(), Language::Hebrew);
        assert_eq!(code.number(), 430);
        assert_eq!(code.to_string(), "H430");

        let code: StrongsCode = "G2316".parse().unwrap();
        assert_eq!(code.language(), Language::Greek);
    }

    #[test]
    fn rejects_malformed_codes() {
        assert_eq!(StrongsCode::parse(""), Err(CodeError::Empty));
        assert!(matches!(StrongsCode::parse("X12"), Err(CodeError::Prefix(_))));
        assert!(matches!(StrongsCode::parse("h430"), Err(CodeError::Prefix(_))));
        assert!(matches!(StrongsCode::parse("H"), Err(CodeError::Digits(_))));
        assert!(matches!(StrongsCode::parse("HX"), Err(CodeError::Digits(_))));
        assert!(matches!(StrongsCode::parse("H43a"), Err(CodeError::Digits(_))));
        assert!(matches!(StrongsCode::parse("H 430"), Err(CodeError::Digits(_))));
        // Non-ASCII digits are not reference numbers
        assert!(matches!(StrongsCode::parse("H٤٣٠"), Err(CodeError::Digits(_))));
    }

    #[test]
    fn parse_in_rejects_the_other_language() {
        let code = StrongsCode::parse_in("H430", Language::Hebrew).unwrap();
        assert_eq!(code.language(), Language::Hebrew);

        assert_eq!(
            StrongsCode::parse_in("H430", Language::Greek),
            Err(CodeError::WrongDictionaryForPrefix {
                code: "H430".into(),
                expected: Language::Greek,
            })
        );
        assert!(matches!(
            StrongsCode::parse_in("430", Language::Hebrew),
            Err(CodeError::Prefix(_))
        ));
    }

    #[test]
    fn huge_numbers_saturate() {
        let code = StrongsCode::parse("H18446744073709551610").unwrap();
        assert_eq!(code.number(), 18446744073709551610);
        assert_eq!(StrongsCode::parse("G99999999999999999999999").unwrap().number(), u64::MAX);
    }

    #[test]
    fn orders_numerically_within_language() {
        let mut codes: Vec<StrongsCode> = ["H100", "G5", "H20", "H3"]
            .iter()
            .map(|c| c.parse().unwrap())
            .collect();
        codes.sort();

        let sorted: Vec<&str> = codes.iter().map(StrongsCode::as_str).collect();
        assert_eq!(sorted, ["H3", "H20", "H100", "G5"]);
    }

    #[test]
    fn language_parse() {
        assert_eq!(Language::parse("Greek"), Some(Language::Greek));
        assert_eq!(Language::parse("h"), Some(Language::Hebrew));
        assert_eq!(Language::parse("latin"), None);
    }
}
