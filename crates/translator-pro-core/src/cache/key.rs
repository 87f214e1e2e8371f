use crate::config::Lang;

/// Cache key for a translated text.
///
/// Keys are opaque MD5 hashes of all relevant inputs, ensuring:
/// - Same text + target + backend = same key
/// - Any change to inputs produces a different key
/// - Keys are fixed-length (32 hex chars) for consistent storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    hash: String,
}

impl CacheKey {
    pub fn new(text: &str, target_lang: &Lang, translator: &str) -> Self {
        // Null byte separators keep ("a", "bc") and ("ab", "c") apart.
        let combined = format!(
            "{}\0{}\0{}",
            text,
            target_lang.as_str(),
            translator.to_lowercase(),
        );

        Self {
            hash: format!("{:x}", md5::compute(combined.as_bytes())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hash)
    }
}
