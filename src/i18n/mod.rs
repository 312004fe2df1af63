//! Internationalization module for multi-language support.
//!
//! Provides translation services using a simple key-value approach. Catalogues
//! for every supported language are compiled in; a directory of `.ftl` files
//! can override entries of one language at start-up.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    French,
}

impl Language {
    /// Get the language identifier string.
    pub fn id(&self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::French => "fr",
        }
    }

    /// Get the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "Français",
        }
    }

    /// Parse from a language identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.to_lowercase();
        if id.starts_with("en") {
            Some(Language::English)
        } else if id.starts_with("fr") {
            Some(Language::French)
        } else {
            None
        }
    }

    /// Get all supported languages.
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::French]
    }

    fn catalogue(&self) -> &'static str {
        match self {
            Language::English => include_str!("locales/en-US/main.ftl"),
            Language::French => include_str!("locales/fr/main.ftl"),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Parse `key = value` lines, skipping blanks and `#` comments.
pub(crate) fn parse_ftl(content: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        // Skip comments and empty lines
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Parse key = value
        if let Some((key, value)) = line.split_once('=') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    map
}

/// Language matching the system locale, English when unsupported or unknown.
pub fn detect_system_locale() -> Language {
    let locale = sys_locale::get_locale();
    tracing::debug!("System locale: {:?}", locale);
    locale
        .as_deref()
        .and_then(Language::from_id)
        .unwrap_or_default()
}

/// Errors raised while reading catalogue overrides.
#[derive(Debug, thiserror::Error)]
pub enum TranslationLoadError {
    #[error("Translation directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Cannot read {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },
}

/// Translation service owned by each screen controller.
#[derive(Debug, Clone)]
pub struct TranslationService {
    /// Current language
    current_language: Language,
    /// Translations per language
    translations: HashMap<Language, HashMap<String, String>>,
}

impl Default for TranslationService {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationService {
    /// Create a new translation service in English.
    pub fn new() -> Self {
        let translations = Language::all()
            .iter()
            .map(|lang| (*lang, parse_ftl(lang.catalogue())))
            .collect();

        Self {
            current_language: Language::English,
            translations,
        }
    }

    /// Create a translation service for a language.
    pub fn for_language(lang: Language) -> Self {
        let mut service = Self::new();
        service.set_language(lang);
        service
    }

    /// Get the current language.
    pub fn language(&self) -> Language {
        self.current_language
    }

    /// Set the current language.
    pub fn set_language(&mut self, lang: Language) {
        self.current_language = lang;
    }

    /// Override entries of a language with the `.ftl` files found in `dir`.
    ///
    /// Files are applied in name order, so a later file wins on a shared key.
    /// Other files are ignored. Returns the number of entries applied.
    pub fn load_overrides(&mut self, lang: Language, dir: &Path) -> Result<usize, TranslationLoadError> {
        if !dir.is_dir() {
            return Err(TranslationLoadError::DirectoryNotFound(dir.to_path_buf()));
        }

        let io_error = |path: &Path, e: std::io::Error| TranslationLoadError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(|e| io_error(dir, e))? {
            let path = entry.map_err(|e| io_error(dir, e))?.path();
            if path.extension().is_some_and(|ext| ext == "ftl") {
                files.push(path);
            }
        }
        files.sort();

        let mut applied = 0;
        for path in files {
            let content = std::fs::read_to_string(&path).map_err(|e| io_error(path.as_path(), e))?;
            let overrides = parse_ftl(&content);
            applied += overrides.len();
            self.apply(lang, overrides);
        }

        tracing::debug!("Applied {} translation overrides for {}", applied, lang.id());
        Ok(applied)
    }

    fn apply(&mut self, lang: Language, overrides: HashMap<String, String>) {
        self.translations.entry(lang).or_default().extend(overrides);
    }

    /// Translate a message by key.
    ///
    /// Falls back to English, then to the key itself.
    pub fn translate(&self, key: &str) -> String {
        // Try current language
        if let Some(value) = self
            .translations
            .get(&self.current_language)
            .and_then(|translations| translations.get(key))
        {
            return value.clone();
        }

        // Fall back to English
        if self.current_language != Language::English {
            if let Some(value) = self
                .translations
                .get(&Language::English)
                .and_then(|translations| translations.get(key))
            {
                return value.clone();
            }
        }

        tracing::warn!("Missing translation for key {}", key);
        key.to_string()
    }

    /// Translate a message with arguments substituted for `{ $name }` patterns.
    pub fn translate_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut result = self.translate(key);
        for (arg_key, arg_value) in args {
            let pattern = format!("{{ ${} }}", arg_key);
            result = result.replace(&pattern, arg_value);
            // Also try without spaces
            let pattern_no_space = format!("{{${}}}", arg_key);
            result = result.replace(&pattern_no_space, arg_value);
        }
        result
    }
}
