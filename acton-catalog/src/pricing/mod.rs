//! Locale-fixed currency formatting
//!
//! Prices arrive as integer minor units (cents). The formatter divides by 100
//! and renders two fraction digits using the configured locale's separators
//! and symbol placement. Locale and currency come from configuration, never
//! from the article being rendered.
//!
//! ```rust
//! use acton_catalog::pricing::PriceFormatter;
//!
//! let formatter = PriceFormatter::new("de-DE", "EUR").unwrap();
//! assert_eq!(formatter.format_minor(12345), "123,45\u{a0}€");
//! ```

use crate::config::PricingSettings;
use crate::error::{CatalogError, CatalogResult};

const NBSP: char = '\u{a0}';
const NARROW_NBSP: char = '\u{202f}';

/// Number formatting conventions of a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NumberLocale {
    tag: &'static str,
    decimal: char,
    group: char,
    symbol_after: bool,
}

const LOCALES: &[NumberLocale] = &[
    NumberLocale {
        tag: "de-DE",
        decimal: ',',
        group: '.',
        symbol_after: true,
    },
    NumberLocale {
        tag: "en-US",
        decimal: '.',
        group: ',',
        symbol_after: false,
    },
    NumberLocale {
        tag: "en-GB",
        decimal: '.',
        group: ',',
        symbol_after: false,
    },
    NumberLocale {
        tag: "fr-FR",
        decimal: ',',
        group: NARROW_NBSP,
        symbol_after: true,
    },
];

/// Currencies with two minor-unit digits and their display symbols
const CURRENCIES: &[(&str, &str)] = &[("EUR", "€"), ("USD", "$"), ("GBP", "£"), ("CHF", "CHF")];

/// Formats minor-unit amounts as currency strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormatter {
    locale: NumberLocale,
    currency: &'static str,
    symbol: &'static str,
}

impl PriceFormatter {
    /// Build a formatter for a locale tag and ISO currency code
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] if the locale or currency is not supported.
    pub fn new(locale: &str, currency: &str) -> CatalogResult<Self> {
        let number_locale = LOCALES
            .iter()
            .find(|candidate| candidate.tag.eq_ignore_ascii_case(locale))
            .copied()
            .ok_or_else(|| CatalogError::Config(format!("unsupported pricing locale '{locale}'")))?;

        let (code, symbol) = CURRENCIES
            .iter()
            .find(|(code, _)| code.eq_ignore_ascii_case(currency))
            .copied()
            .ok_or_else(|| {
                CatalogError::Config(format!("unsupported pricing currency '{currency}'"))
            })?;

        Ok(Self {
            locale: number_locale,
            currency: code,
            symbol,
        })
    }

    /// Build a formatter from the `[pricing]` configuration section
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] if the locale or currency is not supported.
    pub fn from_settings(settings: &PricingSettings) -> CatalogResult<Self> {
        Self::new(&settings.locale, &settings.currency)
    }

    /// Locale tag in use
    #[must_use]
    pub const fn locale(&self) -> &'static str {
        self.locale.tag
    }

    /// Currency code in use
    #[must_use]
    pub const fn currency(&self) -> &'static str {
        self.currency
    }

    /// Format an amount given in minor units (`value / 100`)
    #[must_use]
    pub fn format_minor(&self, value: i64) -> String {
        let magnitude = value.unsigned_abs();
        let units = group_digits(magnitude / 100, self.locale.group);
        let number = format!("{units}{}{:02}", self.locale.decimal, magnitude % 100);
        let sign = if value < 0 { "-" } else { "" };

        if self.locale.symbol_after {
            format!("{sign}{number}{NBSP}{}", self.symbol)
        } else if self.symbol.chars().all(char::is_alphabetic) {
            format!("{sign}{}{NBSP}{number}", self.symbol)
        } else {
            format!("{sign}{}{number}", self.symbol)
        }
    }
}

impl Default for PriceFormatter {
    fn default() -> Self {
        Self {
            locale: LOCALES[0],
            currency: "EUR",
            symbol: "€",
        }
    }
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}
