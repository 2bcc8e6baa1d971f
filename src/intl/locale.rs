use std::fmt;
use std::str::FromStr;

use icu::locale::Locale as IcuLocale;
use icu::locale::extensions::unicode::Key;
use icu::locale::{LocaleCanonicalizer, LocaleDirectionality, LocaleExpander};

use crate::error::{Error, Result};

/// A canonicalized BCP-47 locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locale {
    inner: IcuLocale,
    likely_region: Option<String>,
}

impl Locale {
    pub fn parse(tag: &str) -> Result<Self> {
        let mut inner: IcuLocale = tag.parse().map_err(|_| Error::InvalidLocale(tag.to_string()))?;
        let canonicalizer = LocaleCanonicalizer::new_extended();
        canonicalizer.canonicalize(&mut inner);

        let mut maximized = inner.id.clone();
        let expander = LocaleExpander::new_extended();
        expander.maximize(&mut maximized);
        let likely_region = maximized.region.map(|r| r.as_str().to_string());

        Ok(Locale {
            inner,
            likely_region,
        })
    }

    pub fn language(&self) -> &str {
        self.inner.id.language.as_str()
    }

    /// The explicit region subtag, or the likely one for the language.
    pub fn region(&self) -> Option<&str> {
        self.inner
            .id
            .region
            .as_ref()
            .map(|r| r.as_str())
            .or(self.likely_region.as_deref())
    }

    /// Reads a `-u-` extension keyword such as `hc` or `nu`.
    pub fn keyword(&self, key_str: &str) -> Option<String> {
        let key: Key = key_str.parse().ok()?;
        self.inner
            .extensions
            .unicode
            .keywords
            .get(&key)
            .map(|v| v.to_string())
    }

    pub fn is_rtl(&self) -> bool {
        let ld = LocaleDirectionality::new_extended();
        ld.is_right_to_left(&self.inner.id)
    }

    /// Lookup keys for bundled tables, most specific first:
    /// `language-REGION` then `language`.
    pub fn fallback_chain(&self) -> Vec<String> {
        let language = self.language().to_string();
        let mut chain = Vec::with_capacity(2);
        if let Some(region) = self.region() {
            chain.push(format!("{language}-{region}"));
        }
        chain.push(language);
        chain
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale {
            inner: icu::locale::locale!("en-US"),
            likely_region: Some("US".to_string()),
        }
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Locale::parse(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}
