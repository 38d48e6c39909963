use serde::{Deserialize, Deserializer, Serialize};

/// Shown in place of an empty author.
pub const UNKNOWN_AUTHOR: &str = "?";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            tags,
        }
    }

    /// The author as it should be displayed.
    pub fn display_author(&self) -> &str {
        let author = self.author.trim();
        if author.is_empty() {
            UNKNOWN_AUTHOR
        } else {
            author
        }
    }
}

// Older quote files were written with `null` for missing authors and tag lists.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty() {
        let quote: Quote = serde_json::from_str(r#"{"text": "Hi."}"#).unwrap();
        assert_eq!(quote.text, "Hi.");
        assert_eq!(quote.author, "");
        assert!(quote.tags.is_empty());
    }

    #[test]
    fn null_fields_default_to_empty() {
        let quote: Quote =
            serde_json::from_str(r#"{"text": "Hi.", "author": null, "tags": null}"#).unwrap();
        assert_eq!(quote.author, "");
        assert!(quote.tags.is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let quote: Quote =
            serde_json::from_str(r#"{"text": "Hi.", "author": "Ann", "source": "web"}"#).unwrap();
        assert_eq!(quote, Quote::new("Hi.", "Ann", vec![]));
    }

    #[test]
    fn empty_author_displays_placeholder() {
        assert_eq!(Quote::new("x", "", vec![]).display_author(), UNKNOWN_AUTHOR);
        assert_eq!(Quote::new("x", "   ", vec![]).display_author(), UNKNOWN_AUTHOR);
        assert_eq!(Quote::new("x", "Ann", vec![]).display_author(), "Ann");
    }
}
