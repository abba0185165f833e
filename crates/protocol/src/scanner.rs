//! Scanner for `<tag>...</tag>` pairs in backend free text.

use std::collections::BTreeMap;

/// Extracts tagged sections from arbitrary text, given a fixed vocabulary.
///
/// For each recognized tag name the scanner takes the first occurrence of
/// the opening tag and the first subsequent matching closing tag, spanning
/// newlines, and trims the enclosed text. A tag with no well-formed pair is
/// simply absent from the result; tags outside the vocabulary are ignored.
/// Only the first match per tag name is used even if the backend repeats a
/// tag, which keeps parsing deterministic under malformed output.
#[derive(Debug, Clone)]
pub struct TagScanner {
    vocabulary: Vec<String>,
}

impl TagScanner {
    pub fn new<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            vocabulary: vocabulary.into_iter().map(Into::into).collect(),
        }
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Scan `text` and return a map from tag name to trimmed content for
    /// every tag in the vocabulary that has a well-formed pair.
    pub fn scan(&self, text: &str) -> BTreeMap<String, String> {
        let mut fields = BTreeMap::new();
        for name in &self.vocabulary {
            if let Some(content) = extract_first(text, name) {
                fields.insert(name.clone(), content.trim().to_string());
            }
        }
        fields
    }

    /// Extract a single tag's trimmed content, if present.
    pub fn extract(&self, text: &str, name: &str) -> Option<String> {
        if !self.vocabulary.iter().any(|v| v == name) {
            return None;
        }
        extract_first(text, name).map(|c| c.trim().to_string())
    }
}

/// Content between the first `<name>` and the first `</name>` after it.
fn extract_first<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    let open = format!("<{name}>");
    let close = format!("</{name}>");

    let start = text.find(&open)? + open.len();
    let end = text[start..].find(&close)? + start;
    Some(&text[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner() -> TagScanner {
        TagScanner::new(["thinking", "reasoning", "edge1", "edge2"])
    }

    #[test]
    fn extracts_exactly_the_present_subset() {
        let text = "<thinking>plan</thinking>\n<edge2>second command</edge2>";
        let fields = scanner().scan(text);

        assert_eq!(fields.len(), 2);
        assert_eq!(fields["thinking"], "plan");
        assert_eq!(fields["edge2"], "second command");
        assert!(!fields.contains_key("reasoning"));
        assert!(!fields.contains_key("edge1"));
    }

    #[test]
    fn content_is_trimmed() {
        let text = "<edge1>\n   write a haiku   \n</edge1>";
        let fields = scanner().scan(text);
        assert_eq!(fields["edge1"], "write a haiku");
    }

    #[test]
    fn content_spans_newlines() {
        let text = "<thinking>line one\nline two\nline three</thinking>";
        let fields = scanner().scan(text);
        assert_eq!(fields["thinking"], "line one\nline two\nline three");
    }

    #[test]
    fn first_match_wins_on_duplicate_tags() {
        let text = "<edge1>first</edge1> noise <edge1>second</edge1>";
        let fields = scanner().scan(text);
        assert_eq!(fields["edge1"], "first");
    }

    #[test]
    fn unknown_tags_are_ignored() {
        let text = "<edge3>not in pool</edge3><edge1>ok</edge1>";
        let fields = scanner().scan(text);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["edge1"], "ok");
    }

    #[test]
    fn unclosed_tag_is_omitted() {
        let text = "<thinking>never closed <edge1>fine</edge1>";
        let fields = scanner().scan(text);
        // The first </thinking> never appears, so thinking is absent.
        assert!(!fields.contains_key("thinking"));
        assert_eq!(fields["edge1"], "fine");
    }

    #[test]
    fn empty_content_is_still_present() {
        let text = "<reasoning>   </reasoning>";
        let fields = scanner().scan(text);
        assert_eq!(fields["reasoning"], "");
    }

    #[test]
    fn no_tags_yields_empty_map() {
        assert!(scanner().scan("plain prose with no tags").is_empty());
    }

    #[test]
    fn extract_single_tag() {
        let s = scanner();
        assert_eq!(s.extract("<edge2>cmd</edge2>", "edge2").as_deref(), Some("cmd"));
        assert_eq!(s.extract("<edge2>cmd</edge2>", "edge1"), None);
        // Outside the vocabulary, even if present in the text.
        assert_eq!(s.extract("<edge9>cmd</edge9>", "edge9"), None);
    }
}
