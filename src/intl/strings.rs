use rustc_hash::FxHashMap;

use super::locale::Locale;

type Table = FxHashMap<&'static str, &'static str>;

/// Bundled per-locale strings with `language-REGION` → `language` → `en`
/// fallback.
#[derive(Debug, Default)]
pub struct LocalizedStrings {
    tables: FxHashMap<&'static str, Table>,
}

impl LocalizedStrings {
    pub fn new(data: &[(&'static str, &[(&'static str, &'static str)])]) -> Self {
        let tables = data
            .iter()
            .map(|(tag, entries)| (*tag, entries.iter().copied().collect::<Table>()))
            .collect();
        LocalizedStrings { tables }
    }

    pub fn get(&self, key: &str, locale: &Locale) -> Option<&'static str> {
        locale
            .fallback_chain()
            .iter()
            .map(String::as_str)
            .chain(std::iter::once("en"))
            .find_map(|tag| self.tables.get(tag).and_then(|t| t.get(key)).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_through_language_to_english() {
        let strings = LocalizedStrings::new(&[
            ("en", &[("color", "color"), ("day", "day")]),
            ("en-GB", &[("color", "colour")]),
            ("fr", &[("day", "jour")]),
        ]);
        let gb = Locale::parse("en-GB").unwrap();
        let us = Locale::parse("en-US").unwrap();
        let fr_ca = Locale::parse("fr-CA").unwrap();
        assert_eq!(strings.get("color", &gb), Some("colour"));
        assert_eq!(strings.get("day", &gb), Some("day"));
        assert_eq!(strings.get("color", &us), Some("color"));
        assert_eq!(strings.get("day", &fr_ca), Some("jour"));
        assert_eq!(strings.get("color", &fr_ca), Some("color"));
        assert_eq!(strings.get("missing", &fr_ca), None);
    }
}
