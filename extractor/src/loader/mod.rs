//! Input loading for the localization table and the exercise export.
//!
//! The localization file is a JavaScript assignment wrapping a JSON object:
//!
//! ```text
//! window.en_US={"sid_strength_push_up":"Push Up", ...};
//! ```
//!
//! The assignment prefix and trailing semicolons are stripped before the
//! remainder is parsed as plain JSON. The exercise export is a JSON object
//! whose `data` key holds the list of exercise records.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{LoadError, LoadResult, ParseError, ParseResult};
use crate::models::Localization;

/// Key holding the exercise list in the export
pub const DATA_KEY: &str = "data";

/// `window.en_US=` or `en_US =` at the start of the file
static ASSIGNMENT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:window\.)?\w+\s*=").expect("assignment prefix pattern is valid")
});

/// Read a UTF-8 text file, dropping a leading byte order mark.
pub fn read_text(path: &Path) -> LoadResult<String> {
    let bytes = std::fs::read(path).map_err(|e| LoadError::from_io(path, e))?;
    decode_utf8(&bytes).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode UTF-8 bytes, dropping a leading byte order mark.
///
/// Malformed sequences are rejected, never replaced.
pub fn decode_utf8(bytes: &[u8]) -> ParseResult<String> {
    let body = match encoding_rs::Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) if encoding == encoding_rs::UTF_8 => &bytes[bom_len..],
        _ => bytes,
    };
    Ok(std::str::from_utf8(body)?.to_owned())
}

/// Remove the JavaScript assignment around the JSON payload.
pub fn strip_assignment(text: &str) -> &str {
    let text = text.trim();
    let text = match ASSIGNMENT_PREFIX.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    };
    text.trim_end_matches(|c: char| c == ';' || c.is_whitespace())
}

/// Parse the content of a localization file.
///
/// # Example
/// ```
/// use coros_exercises::loader::parse_localization;
///
/// let i18n = parse_localization(r#"window.en_US={"a":"Squat"};"#).unwrap();
/// assert_eq!(i18n.get("a"), Some("Squat"));
/// ```
pub fn parse_localization(text: &str) -> ParseResult<Localization> {
    let entries: HashMap<String, String> = serde_json::from_str(strip_assignment(text))?;
    Ok(Localization::new(entries))
}

/// Load a localization file from disk.
pub fn load_localization(path: impl AsRef<Path>) -> LoadResult<Localization> {
    let path = path.as_ref();
    let text = read_text(path)?;
    parse_localization(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse the exercise export and return the raw records under `data`.
pub fn parse_exercises(text: &str) -> ParseResult<Vec<Value>> {
    let mut root: Value = serde_json::from_str(text)?;

    match root.get_mut(DATA_KEY).map(Value::take) {
        Some(Value::Array(records)) => Ok(records),
        Some(_) => Err(ParseError::NotAnArray(DATA_KEY)),
        None => Err(ParseError::MissingKey(DATA_KEY)),
    }
}

/// Load the exercise export from disk.
pub fn load_exercises(path: impl AsRef<Path>) -> LoadResult<Vec<Value>> {
    let path = path.as_ref();
    let text = read_text(path)?;
    parse_exercises(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_window_assignment() {
        let i18n = parse_localization(r#"window.en_US={"a":"Squat"};"#).unwrap();
        assert_eq!(i18n.len(), 1);
        assert_eq!(i18n.get("a"), Some("Squat"));
    }

    #[test]
    fn test_parse_with_whitespace_and_semicolons() {
        let text = "\n  window.en_US = {\"a\": \"Squat\", \"b\": \"Écarté\"} ;;\n";
        let i18n = parse_localization(text).unwrap();
        assert_eq!(i18n.get("b"), Some("Écarté"));
    }

    #[test]
    fn test_parse_bare_identifier_and_no_semicolon() {
        let i18n = parse_localization(r#"en_US={"a":"Squat"}"#).unwrap();
        assert_eq!(i18n.get("a"), Some("Squat"));
    }

    #[test]
    fn test_parse_plain_json() {
        let i18n = parse_localization(r#"{"a":"Squat"}"#).unwrap();
        assert_eq!(i18n.get("a"), Some("Squat"));
    }

    #[test]
    fn test_parse_invalid_localization() {
        let err = parse_localization("window.en_US={\"a\":};").unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn test_strip_assignment() {
        assert_eq!(strip_assignment("window.x={};"), "{}");
        assert_eq!(strip_assignment("  {}  "), "{}");
    }

    #[test]
    fn test_parse_exercises() {
        let records = parse_exercises(r#"{"result":"0000","data":[{"name":"a"},{"name":"b"}]}"#)
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["name"], "b");
    }

    #[test]
    fn test_parse_exercises_missing_data() {
        let err = parse_exercises(r#"{"result":"0000"}"#).unwrap_err();
        assert!(matches!(err, ParseError::MissingKey("data")));
    }

    #[test]
    fn test_parse_exercises_data_not_array() {
        let err = parse_exercises(r#"{"data":{"name":"a"}}"#).unwrap_err();
        assert!(matches!(err, ParseError::NotAnArray("data")));
    }

    #[test]
    fn test_parse_exercises_malformed() {
        let err = parse_exercises(r#"{"data":["#).unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_localization(dir.path().join("en-US.prod.js")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));

        let err = load_exercises(dir.path().join("strength-exercises.json")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn test_load_strips_bom() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("en-US.prod.js");
        fs::write(&path, "\u{feff}window.en_US={\"a\":\"Squat\"};").unwrap();

        let i18n = load_localization(&path).unwrap();
        assert_eq!(i18n.get("a"), Some("Squat"));
    }

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_utf8(b"\xEF\xBB\xBF{}").unwrap(), "{}");
        assert_eq!(decode_utf8("Écarté".as_bytes()).unwrap(), "Écarté");
        assert!(matches!(decode_utf8(b"Squ\xFFat"), Err(ParseError::Utf8(_))));
    }

    #[test]
    fn test_load_rejects_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("en-US.prod.js");
        fs::write(&path, b"window.en_US={\"a\":\"Squ\xFFat\"};").unwrap();

        let err = load_localization(&path).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Parse { source: ParseError::Utf8(_), .. }
        ));
        assert!(err.to_string().contains("en-US.prod.js"));
    }

    #[test]
    fn test_load_parse_error_names_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("strength-exercises.json");
        fs::write(&path, "not json").unwrap();

        let err = load_exercises(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().contains("strength-exercises.json"));
    }
}
