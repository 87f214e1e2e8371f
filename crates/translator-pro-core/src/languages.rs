//! Language directory: display names shown in the UI and the API codes
//! the translation backends expect.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Code used whenever a display name is not in the directory.
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

/// Display name preselected in language pickers when available.
pub const DEFAULT_DISPLAY_NAME: &str = "English";

/// A selectable language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Human-readable label (e.g., "French")
    pub display_name: &'static str,
    /// API language code (e.g., "fr", "zh-cn")
    pub code: &'static str,
}

impl LanguageEntry {
    pub const fn new(display_name: &'static str, code: &'static str) -> Self {
        Self { display_name, code }
    }
}

/// Languages supported by the Google Translate web endpoint, sorted by
/// display name.
pub static LANGUAGES: &[LanguageEntry] = &[
    LanguageEntry::new("Afrikaans", "af"),
    LanguageEntry::new("Albanian", "sq"),
    LanguageEntry::new("Amharic", "am"),
    LanguageEntry::new("Arabic", "ar"),
    LanguageEntry::new("Armenian", "hy"),
    LanguageEntry::new("Azerbaijani", "az"),
    LanguageEntry::new("Basque", "eu"),
    LanguageEntry::new("Belarusian", "be"),
    LanguageEntry::new("Bengali", "bn"),
    LanguageEntry::new("Bosnian", "bs"),
    LanguageEntry::new("Bulgarian", "bg"),
    LanguageEntry::new("Catalan", "ca"),
    LanguageEntry::new("Cebuano", "ceb"),
    LanguageEntry::new("Chichewa", "ny"),
    LanguageEntry::new("Chinese (Simplified)", "zh-cn"),
    LanguageEntry::new("Chinese (Traditional)", "zh-tw"),
    LanguageEntry::new("Corsican", "co"),
    LanguageEntry::new("Croatian", "hr"),
    LanguageEntry::new("Czech", "cs"),
    LanguageEntry::new("Danish", "da"),
    LanguageEntry::new("Dutch", "nl"),
    LanguageEntry::new("English", "en"),
    LanguageEntry::new("Esperanto", "eo"),
    LanguageEntry::new("Estonian", "et"),
    LanguageEntry::new("Filipino", "tl"),
    LanguageEntry::new("Finnish", "fi"),
    LanguageEntry::new("French", "fr"),
    LanguageEntry::new("Frisian", "fy"),
    LanguageEntry::new("Galician", "gl"),
    LanguageEntry::new("Georgian", "ka"),
    LanguageEntry::new("German", "de"),
    LanguageEntry::new("Greek", "el"),
    LanguageEntry::new("Gujarati", "gu"),
    LanguageEntry::new("Haitian Creole", "ht"),
    LanguageEntry::new("Hausa", "ha"),
    LanguageEntry::new("Hawaiian", "haw"),
    LanguageEntry::new("Hebrew", "iw"),
    LanguageEntry::new("Hindi", "hi"),
    LanguageEntry::new("Hmong", "hmn"),
    LanguageEntry::new("Hungarian", "hu"),
    LanguageEntry::new("Icelandic", "is"),
    LanguageEntry::new("Igbo", "ig"),
    LanguageEntry::new("Indonesian", "id"),
    LanguageEntry::new("Irish", "ga"),
    LanguageEntry::new("Italian", "it"),
    LanguageEntry::new("Japanese", "ja"),
    LanguageEntry::new("Javanese", "jw"),
    LanguageEntry::new("Kannada", "kn"),
    LanguageEntry::new("Kazakh", "kk"),
    LanguageEntry::new("Khmer", "km"),
    LanguageEntry::new("Korean", "ko"),
    LanguageEntry::new("Kurdish (Kurmanji)", "ku"),
    LanguageEntry::new("Kyrgyz", "ky"),
    LanguageEntry::new("Lao", "lo"),
    LanguageEntry::new("Latin", "la"),
    LanguageEntry::new("Latvian", "lv"),
    LanguageEntry::new("Lithuanian", "lt"),
    LanguageEntry::new("Luxembourgish", "lb"),
    LanguageEntry::new("Macedonian", "mk"),
    LanguageEntry::new("Malagasy", "mg"),
    LanguageEntry::new("Malay", "ms"),
    LanguageEntry::new("Malayalam", "ml"),
    LanguageEntry::new("Maltese", "mt"),
    LanguageEntry::new("Maori", "mi"),
    LanguageEntry::new("Marathi", "mr"),
    LanguageEntry::new("Mongolian", "mn"),
    LanguageEntry::new("Myanmar (Burmese)", "my"),
    LanguageEntry::new("Nepali", "ne"),
    LanguageEntry::new("Norwegian", "no"),
    LanguageEntry::new("Odia", "or"),
    LanguageEntry::new("Pashto", "ps"),
    LanguageEntry::new("Persian", "fa"),
    LanguageEntry::new("Polish", "pl"),
    LanguageEntry::new("Portuguese", "pt"),
    LanguageEntry::new("Punjabi", "pa"),
    LanguageEntry::new("Romanian", "ro"),
    LanguageEntry::new("Russian", "ru"),
    LanguageEntry::new("Samoan", "sm"),
    LanguageEntry::new("Scots Gaelic", "gd"),
    LanguageEntry::new("Serbian", "sr"),
    LanguageEntry::new("Sesotho", "st"),
    LanguageEntry::new("Shona", "sn"),
    LanguageEntry::new("Sindhi", "sd"),
    LanguageEntry::new("Sinhala", "si"),
    LanguageEntry::new("Slovak", "sk"),
    LanguageEntry::new("Slovenian", "sl"),
    LanguageEntry::new("Somali", "so"),
    LanguageEntry::new("Spanish", "es"),
    LanguageEntry::new("Sundanese", "su"),
    LanguageEntry::new("Swahili", "sw"),
    LanguageEntry::new("Swedish", "sv"),
    LanguageEntry::new("Tajik", "tg"),
    LanguageEntry::new("Tamil", "ta"),
    LanguageEntry::new("Telugu", "te"),
    LanguageEntry::new("Thai", "th"),
    LanguageEntry::new("Turkish", "tr"),
    LanguageEntry::new("Ukrainian", "uk"),
    LanguageEntry::new("Urdu", "ur"),
    LanguageEntry::new("Uyghur", "ug"),
    LanguageEntry::new("Uzbek", "uz"),
    LanguageEntry::new("Vietnamese", "vi"),
    LanguageEntry::new("Welsh", "cy"),
    LanguageEntry::new("Xhosa", "xh"),
    LanguageEntry::new("Yiddish", "yi"),
    LanguageEntry::new("Yoruba", "yo"),
    LanguageEntry::new("Zulu", "zu"),
];

static GLOBAL: LazyLock<LanguageDirectory> = LazyLock::new(|| LanguageDirectory::new(LANGUAGES));

/// Read-only lookup table from display name to API code.
///
/// Lookups never fail: unknown names resolve to [`DEFAULT_LANGUAGE_CODE`].
#[derive(Debug)]
pub struct LanguageDirectory {
    entries: &'static [LanguageEntry],
    by_name: HashMap<&'static str, &'static str>,
}

impl LanguageDirectory {
    /// Build a directory over a static table. Order of `entries` is the
    /// order names are listed in.
    pub fn new(entries: &'static [LanguageEntry]) -> Self {
        let by_name = entries.iter().map(|e| (e.display_name, e.code)).collect();
        Self { entries, by_name }
    }

    /// The process-wide directory built from [`LANGUAGES`].
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    pub const fn entries(&self) -> &'static [LanguageEntry] {
        self.entries
    }

    /// Display names in listing order.
    pub fn list_display_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.display_name)
    }

    pub fn contains(&self, display_name: &str) -> bool {
        self.by_name.contains_key(display_name)
    }

    /// API code for `display_name`, or `"en"` when the name is unknown.
    pub fn resolve_code(&self, display_name: &str) -> &'static str {
        self.by_name
            .get(display_name)
            .copied()
            .unwrap_or(DEFAULT_LANGUAGE_CODE)
    }

    /// "English" if listed, otherwise the first entry.
    pub fn default_display_name(&self) -> &'static str {
        if self.contains(DEFAULT_DISPLAY_NAME) {
            DEFAULT_DISPLAY_NAME
        } else {
            self.entries
                .first()
                .map_or(DEFAULT_DISPLAY_NAME, |e| e.display_name)
        }
    }

    /// Reverse lookup, case-insensitive on the code ("zh-CN" finds
    /// "Chinese (Simplified)").
    pub fn display_name_for_code(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|e| e.code.eq_ignore_ascii_case(code))
            .map(|e| e.display_name)
    }
}
