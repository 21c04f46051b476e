/// Normalized view of the raw search box text
///
/// `trimmed` is what gets sent to the suggestion service. The compact
/// length (trimmed text with every whitespace character removed) is only
/// used to decide whether the query is long enough to search for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchText {
    pub trimmed: String,
    pub compact_len: usize,
}

impl SearchText {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim().to_string();
        let compact_len = trimmed.chars().filter(|c| !c.is_whitespace()).count();
        Self {
            trimmed,
            compact_len,
        }
    }

    pub fn is_searchable(&self, min_chars: usize) -> bool {
        self.compact_len >= min_chars
    }
}
