use super::QuoteStore;
use crate::error::{QuotezError, Result};
use crate::model::Quote;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Quote store backed by a single JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent(&self) -> Result<()> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
                fs::create_dir_all(dir).map_err(|source| QuotezError::Write {
                    path: self.path.clone(),
                    source,
                })
            }
            _ => Ok(()),
        }
    }
}

/// Decodes a JSON array of quotes. `path` is only used for error context.
pub fn decode_quotes(content: &str, path: &Path) -> Result<Vec<Quote>> {
    let quotes: Vec<Quote> =
        serde_json::from_str(content).map_err(|source| QuotezError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
    if quotes.is_empty() {
        return Err(QuotezError::EmptyStore {
            path: path.to_path_buf(),
        });
    }
    Ok(quotes)
}

/// Pretty-prints quotes the way they are written to disk.
pub fn encode_quotes(quotes: &[Quote]) -> io::Result<String> {
    let mut content = serde_json::to_string_pretty(quotes)?;
    content.push('\n');
    Ok(content)
}

impl QuoteStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Quote>> {
        let content = fs::read_to_string(&self.path).map_err(|source| QuotezError::Read {
            path: self.path.clone(),
            source,
        })?;
        let quotes = decode_quotes(&content, &self.path)?;
        log::debug!("loaded {} quotes from {}", quotes.len(), self.path.display());
        Ok(quotes)
    }

    fn save(&mut self, quotes: &[Quote]) -> Result<()> {
        self.ensure_parent()?;
        let write_err = |source| QuotezError::Write {
            path: self.path.clone(),
            source,
        };
        let content = encode_quotes(quotes).map_err(write_err)?;
        fs::write(&self.path, content).map_err(write_err)?;
        log::info!("saved {} quotes to {}", quotes.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<Quote> {
        vec![
            Quote::new("A great day.", "Ann", vec!["joy".into()]),
            Quote::new("Work hard.", "Bo", vec!["work".into(), "joy".into()]),
        ]
    }

    #[test]
    fn missing_file_is_a_read_failure() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nope.json"));
        let err = store.load().unwrap_err();
        assert!(matches!(err, QuotezError::Read { .. }));
        assert!(err.is_missing_file());
    }

    #[test]
    fn malformed_json_is_a_decode_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quotes.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            JsonFileStore::new(&path).load(),
            Err(QuotezError::Decode { .. })
        ));
    }

    #[test]
    fn wrong_shape_is_a_decode_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quotes.json");
        fs::write(&path, r#"{"text": "not in an array"}"#).unwrap();
        assert!(matches!(
            JsonFileStore::new(&path).load(),
            Err(QuotezError::Decode { .. })
        ));
    }

    #[test]
    fn empty_array_is_an_empty_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quotes.json");
        fs::write(&path, "[]").unwrap();
        match JsonFileStore::new(&path).load() {
            Err(QuotezError::EmptyStore { path: p }) => assert_eq!(p, path),
            other => panic!("expected EmptyStore, got {:?}", other),
        }
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested").join("quotes.json"));
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), sample());
    }

    #[test]
    fn save_is_pretty_printed_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quotes.json");
        fs::write(&path, "garbage that must disappear").unwrap();

        let mut store = JsonFileStore::new(&path);
        store.save(&sample()[..1]).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.contains("garbage"));
        assert!(written.starts_with("[\n  {\n    \"text\": \"A great day.\""));
        assert!(written.ends_with("]\n"));
    }

    #[test]
    fn concurrent_appends_last_writer_wins() {
        // Known limitation: saves are whole-file rewrites with no locking.
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quotes.json");
        JsonFileStore::new(&path).save(&sample()).unwrap();

        let mut first = JsonFileStore::new(&path);
        let mut second = JsonFileStore::new(&path);
        let mut a = first.load().unwrap();
        let mut b = second.load().unwrap();
        a.push(Quote::new("From A", "", vec![]));
        b.push(Quote::new("From B", "", vec![]));
        first.save(&a).unwrap();
        second.save(&b).unwrap();

        let texts: Vec<String> = first.load().unwrap().into_iter().map(|q| q.text).collect();
        assert!(texts.contains(&"From B".to_string()));
        assert!(!texts.contains(&"From A".to_string()));
    }
}
