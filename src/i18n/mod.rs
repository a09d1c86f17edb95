//! Language codes and translation tables.
//!
//! Translation tables are process-wide, built lazily once per language and
//! immutable afterwards. Lookups fall back to the key itself when a string
//! is missing, so an untranslated key is visible instead of fatal.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

mod de;
mod en;

/// Supported interface languages. `De` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Lang {
    #[default]
    De,
    En,
}

impl Lang {
    /// All supported languages, in default-first order
    pub const ALL: &'static [Lang] = &[Lang::De, Lang::En];

    /// Parse an allow-listed language code; anything else is rejected.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "de" => Some(Lang::De),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    /// The wire/session code for this language
    pub fn code(self) -> &'static str {
        match self {
            Lang::De => "de",
            Lang::En => "en",
        }
    }
}

static DE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(de::table);
static EN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(en::table);

/// Translate `key` into `lang`, falling back to the key itself.
pub fn translate(lang: Lang, key: &'static str) -> &'static str {
    let table = match lang {
        Lang::De => &DE,
        Lang::En => &EN,
    };
    table.get(key).copied().unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language_is_first_member() {
        assert_eq!(Lang::default(), Lang::De);
        assert_eq!(Lang::ALL[0], Lang::De);
    }

    #[test]
    fn test_from_code_allow_list() {
        assert_eq!(Lang::from_code("de"), Some(Lang::De));
        assert_eq!(Lang::from_code("en"), Some(Lang::En));
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::from_code(""), None);
        assert_eq!(Lang::from_code("EN"), None);
    }

    #[test]
    fn test_translate_known_key() {
        assert_eq!(translate(Lang::En, "nav_login"), "Login");
        assert_eq!(translate(Lang::De, "nav_login"), "Einloggen");
    }

    #[test]
    fn test_translate_missing_key_falls_back_to_key() {
        assert_eq!(translate(Lang::En, "no_such_key"), "no_such_key");
    }

    #[test]
    fn test_both_tables_cover_error_keys() {
        for key in [
            "err_img_too_big",
            "err_img_save",
            "err_img_type",
            "err_server_limit",
            "err_fill_fields",
            "err_db",
            "err_login_failed",
            "err_user_taken",
            "err_username_chars",
            "err_username_length",
            "err_pw_too_short",
            "err_pw_mismatch",
        ] {
            for lang in Lang::ALL {
                assert_ne!(translate(*lang, key), key, "missing {key} for {lang:?}");
            }
        }
    }
}
