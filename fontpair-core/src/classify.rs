//! Keyword classifier for curated font names (made by FontLab https://www.fontlab.com/)

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse visual category derived from a font's name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontCategory {
    Serif,
    SansSerif,
    Monospace,
}

impl FontCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            FontCategory::Serif => "serif",
            FontCategory::SansSerif => "sans-serif",
            FontCategory::Monospace => "monospace",
        }
    }
}

impl fmt::Display for FontCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classifier rule: any keyword found in the lowercased name yields `category`.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<'a> {
    pub keywords: &'a [&'a str],
    pub category: FontCategory,
}

impl KeywordRule<'_> {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }
}

pub const MONOSPACE_KEYWORDS: &[&str] = &["mono", "code", "courier"];

pub const SERIF_KEYWORDS: &[&str] = &[
    "garamond",
    "baskerville",
    "serif",
    "crimson",
    "merriweather",
    "lora",
    "playfair",
    "spectral",
    "gelasio",
    "cinzel",
    "cardo",
    "literata",
    "unna",
    "vollkorn",
];

/// Rules in evaluation order. Monospace must stay ahead of serif: a name
/// carrying both kinds of keyword is monospace.
pub const DEFAULT_RULES: &[KeywordRule<'static>] = &[
    KeywordRule {
        keywords: MONOSPACE_KEYWORDS,
        category: FontCategory::Monospace,
    },
    KeywordRule {
        keywords: SERIF_KEYWORDS,
        category: FontCategory::Serif,
    },
];

/// Category returned when no rule matches.
pub const FALLBACK_CATEGORY: FontCategory = FontCategory::SansSerif;

/// Classify a font name with the built-in rules.
///
/// Slab families such as "Roboto Slab" carry no serif keyword and land in
/// `sans-serif`.
pub fn classify(name: &str) -> FontCategory {
    classify_with(DEFAULT_RULES, FALLBACK_CATEGORY, name)
}

/// Evaluate `rules` in order against the lowercased name; first match wins.
pub fn classify_with(rules: &[KeywordRule<'_>], fallback: FontCategory, name: &str) -> FontCategory {
    let lowered = name.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.category)
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_from_curated_table() {
        assert_eq!(classify("JetBrains Mono"), FontCategory::Monospace);
        assert_eq!(classify("Crimson Text"), FontCategory::Serif);
        assert_eq!(classify("Inter"), FontCategory::SansSerif);
        assert_eq!(classify("Roboto Slab"), FontCategory::SansSerif);
    }

    #[test]
    fn monospace_wins_over_serif_keywords() {
        assert_eq!(classify("Source Code Pro"), FontCategory::Monospace);
        assert_eq!(classify("Garamond Mono"), FontCategory::Monospace);
        assert_eq!(classify("Courier Serif"), FontCategory::Monospace);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(classify("LIBRE BASKERVILLE"), FontCategory::Serif);
        assert_eq!(classify("fira CODE"), FontCategory::Monospace);
    }

    #[test]
    fn unmatched_names_fall_back() {
        assert_eq!(classify("Inconsolata"), FontCategory::SansSerif);
        assert_eq!(classify("Anonymous Pro"), FontCategory::SansSerif);
        assert_eq!(classify("Zilla Slab"), FontCategory::SansSerif);
    }

    #[test]
    fn custom_rules_respect_order() {
        let rules = [
            KeywordRule {
                keywords: &["slab"],
                category: FontCategory::Serif,
            },
            KeywordRule {
                keywords: &["roboto"],
                category: FontCategory::Monospace,
            },
        ];
        assert_eq!(
            classify_with(&rules, FontCategory::SansSerif, "Roboto Slab"),
            FontCategory::Serif
        );
        assert_eq!(
            classify_with(&[], FontCategory::Monospace, "Anything"),
            FontCategory::Monospace
        );
    }

    #[test]
    fn categories_serialize_as_css_generic_names() {
        let json = serde_json::to_string(&FontCategory::SansSerif).unwrap();
        assert_eq!(json, "\"sans-serif\"");
        assert_eq!(FontCategory::Monospace.to_string(), "monospace");
    }
}
