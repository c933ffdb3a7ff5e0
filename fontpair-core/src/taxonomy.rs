//! Curated font taxonomy and genre pairing tables (made by FontLab https://www.fontlab.com/)

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Typographic role a curated font is recommended for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CuratedCategory {
    SerifBody,
    SansBody,
    SerifHeading,
    SansHeading,
    Monospace,
}

impl CuratedCategory {
    pub const ALL: [CuratedCategory; 5] = [
        CuratedCategory::SerifBody,
        CuratedCategory::SansBody,
        CuratedCategory::SerifHeading,
        CuratedCategory::SansHeading,
        CuratedCategory::Monospace,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CuratedCategory::SerifBody => "serif_body",
            CuratedCategory::SansBody => "sans_body",
            CuratedCategory::SerifHeading => "serif_heading",
            CuratedCategory::SansHeading => "sans_heading",
            CuratedCategory::Monospace => "monospace",
        }
    }
}

impl fmt::Display for CuratedCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CuratedCategory {
    type Err = TaxonomyError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        CuratedCategory::ALL
            .into_iter()
            .find(|cat| cat.as_str() == raw)
            .ok_or_else(|| TaxonomyError::UnknownCategory(raw.to_string()))
    }
}

/// Ways the compiled-in (or substituted) tables can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    #[error("{0} table is empty")]
    EmptyTable(&'static str),
    #[error("unknown font category: {0}")]
    UnknownCategory(String),
    #[error("category {0} is listed more than once")]
    DuplicateCategory(CuratedCategory),
    #[error("category {0} has no fonts")]
    EmptyCategory(CuratedCategory),
    #[error("category {category} contains a blank font name at rank {rank}")]
    BlankFontName { category: CuratedCategory, rank: usize },
    #[error("category {category} lists {font:?} more than once")]
    DuplicateFont {
        category: CuratedCategory,
        font: String,
    },
    #[error("genre table contains a blank genre tag")]
    BlankGenre,
    #[error("genre {0:?} is listed more than once")]
    DuplicateGenre(String),
    #[error("genre {0:?} has no pairings")]
    EmptyGenre(String),
    #[error("pairing {rank} of genre {genre:?} has a blank {field}")]
    BlankPairingField {
        genre: String,
        rank: usize,
        field: &'static str,
    },
}

/// One recommended combination as it appears in the compiled-in table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairingSpec<'a> {
    pub body: &'a str,
    pub heading: &'a str,
    pub mono: Option<&'a str>,
    pub mood: &'a str,
    pub rationale: &'a str,
}

impl<'a> PairingSpec<'a> {
    pub const fn new(body: &'a str, heading: &'a str, mood: &'a str, rationale: &'a str) -> Self {
        Self {
            body,
            heading,
            mono: None,
            mood,
            rationale,
        }
    }

    pub const fn with_mono(self, mono: &'a str) -> Self {
        Self {
            mono: Some(mono),
            ..self
        }
    }
}

/// Borrowed view of a category table and a genre table.
#[derive(Debug, Clone, Copy)]
pub struct Taxonomy<'a> {
    pub curated: &'a [(CuratedCategory, &'a [&'a str])],
    pub genres: &'a [(&'a str, &'a [PairingSpec<'a>])],
}

impl Taxonomy<'static> {
    /// The tables shipped with the crate.
    pub const fn builtin() -> Self {
        Self {
            curated: CURATED_FONTS,
            genres: GENRE_PAIRINGS,
        }
    }
}

impl<'a> Taxonomy<'a> {
    pub const fn new(
        curated: &'a [(CuratedCategory, &'a [&'a str])],
        genres: &'a [(&'a str, &'a [PairingSpec<'a>])],
    ) -> Self {
        Self { curated, genres }
    }

    /// Union of every curated name; duplicates across categories collapse.
    pub fn distinct_fonts(&self) -> BTreeSet<&'a str> {
        self.curated
            .iter()
            .flat_map(|(_, fonts)| fonts.iter().copied())
            .collect()
    }

    pub fn pairing_count(&self) -> usize {
        self.genres.iter().map(|(_, pairs)| pairs.len()).sum()
    }

    /// Reject tables that would produce an incomplete database.
    pub fn validate(&self) -> Result<(), TaxonomyError> {
        if self.curated.is_empty() {
            return Err(TaxonomyError::EmptyTable("curated font"));
        }
        let mut seen_categories = HashSet::new();
        for (category, fonts) in self.curated {
            if !seen_categories.insert(*category) {
                return Err(TaxonomyError::DuplicateCategory(*category));
            }
            if fonts.is_empty() {
                return Err(TaxonomyError::EmptyCategory(*category));
            }
            let mut seen_fonts = HashSet::new();
            for (rank, font) in fonts.iter().enumerate() {
                if font.trim().is_empty() {
                    return Err(TaxonomyError::BlankFontName {
                        category: *category,
                        rank,
                    });
                }
                if !seen_fonts.insert(*font) {
                    return Err(TaxonomyError::DuplicateFont {
                        category: *category,
                        font: font.to_string(),
                    });
                }
            }
        }

        if self.genres.is_empty() {
            return Err(TaxonomyError::EmptyTable("genre pairing"));
        }
        let mut seen_genres = HashSet::new();
        for (genre, pairings) in self.genres {
            if genre.trim().is_empty() {
                return Err(TaxonomyError::BlankGenre);
            }
            if !seen_genres.insert(*genre) {
                return Err(TaxonomyError::DuplicateGenre(genre.to_string()));
            }
            if pairings.is_empty() {
                return Err(TaxonomyError::EmptyGenre(genre.to_string()));
            }
            for (rank, pairing) in pairings.iter().enumerate() {
                let blank = blank_field(pairing);
                if let Some(field) = blank {
                    return Err(TaxonomyError::BlankPairingField {
                        genre: genre.to_string(),
                        rank,
                        field,
                    });
                }
            }
        }

        Ok(())
    }
}

fn blank_field(pairing: &PairingSpec<'_>) -> Option<&'static str> {
    if pairing.body.trim().is_empty() {
        Some("body")
    } else if pairing.heading.trim().is_empty() {
        Some("heading")
    } else if pairing.mono.is_some_and(|m| m.trim().is_empty()) {
        Some("mono")
    } else if pairing.mood.trim().is_empty() {
        Some("mood")
    } else {
        None
    }
}

/// Number of fonts in every built-in category.
pub const CURATED_LENGTH: usize = 10;

pub const CURATED_FONTS: &[(CuratedCategory, &[&str])] = &[
    (
        CuratedCategory::SerifBody,
        &[
            "Crimson Text",
            "Merriweather",
            "Lora",
            "Libre Baskerville",
            "Source Serif Pro",
            "Playfair Display",
            "EB Garamond",
            "Cormorant Garamond",
            "Spectral",
            "Gelasio",
        ],
    ),
    (
        CuratedCategory::SansBody,
        &[
            "Source Sans Pro",
            "Open Sans",
            "Roboto",
            "Lato",
            "Montserrat",
            "Raleway",
            "PT Sans",
            "Work Sans",
            "Nunito",
            "Inter",
        ],
    ),
    (
        CuratedCategory::SerifHeading,
        &[
            "Playfair Display",
            "Merriweather",
            "Crimson Text",
            "Libre Baskerville",
            "Cormorant Garamond",
            "Cinzel",
            "Cardo",
            "Literata",
            "Unna",
            "Vollkorn",
        ],
    ),
    (
        CuratedCategory::SansHeading,
        &[
            "Montserrat",
            "Oswald",
            "Raleway",
            "Roboto Condensed",
            "Archivo Black",
            "Anton",
            "Bebas Neue",
            "Barlow Condensed",
            "Saira Condensed",
            "Fjalla One",
        ],
    ),
    (
        CuratedCategory::Monospace,
        &[
            "Fira Code",
            "Source Code Pro",
            "Roboto Mono",
            "JetBrains Mono",
            "IBM Plex Mono",
            "Inconsolata",
            "Courier Prime",
            "Space Mono",
            "Anonymous Pro",
            "Ubuntu Mono",
        ],
    ),
];

pub const GENRE_PAIRINGS: &[(&str, &[PairingSpec<'static>])] = &[
    (
        "fiction",
        &[
            PairingSpec::new(
                "Crimson Text",
                "Playfair Display",
                "classic",
                "Elegant serif pair for literary fiction",
            ),
            PairingSpec::new(
                "Merriweather",
                "Montserrat",
                "modern",
                "Contemporary serif/sans mix",
            ),
            PairingSpec::new("Lora", "Raleway", "clean", "Readable and approachable"),
        ],
    ),
    (
        "mystery",
        &[
            PairingSpec::new(
                "Crimson Text",
                "Playfair Display",
                "dark",
                "Classic noir aesthetic",
            ),
            PairingSpec::new(
                "Libre Baskerville",
                "Oswald",
                "tense",
                "Sharp contrasts for suspense",
            ),
            PairingSpec::new(
                "EB Garamond",
                "Cinzel",
                "sophisticated",
                "Refined detective style",
            ),
        ],
    ),
    (
        "romance",
        &[
            PairingSpec::new("Lora", "Playfair Display", "romantic", "Soft and elegant"),
            PairingSpec::new(
                "Crimson Text",
                "Cormorant Garamond",
                "delicate",
                "Flowing and graceful",
            ),
            PairingSpec::new("Spectral", "Montserrat", "contemporary", "Modern romance"),
        ],
    ),
    (
        "scifi",
        &[
            PairingSpec::new(
                "Source Sans Pro",
                "Roboto Condensed",
                "futuristic",
                "Clean tech aesthetic",
            ),
            PairingSpec::new("Inter", "Oswald", "modern", "Sharp and forward-looking"),
            PairingSpec::new(
                "Work Sans",
                "Barlow Condensed",
                "minimalist",
                "Streamlined future",
            ),
        ],
    ),
    (
        "fantasy",
        &[
            PairingSpec::new("Merriweather", "Cinzel", "epic", "Grand and mythical"),
            PairingSpec::new(
                "Crimson Text",
                "Playfair Display",
                "classic",
                "Timeless storytelling",
            ),
            PairingSpec::new(
                "Libre Baskerville",
                "Unna",
                "mystical",
                "Enchanted aesthetic",
            ),
        ],
    ),
    (
        "technical",
        &[
            PairingSpec::new(
                "Source Sans Pro",
                "Roboto",
                "professional",
                "Clear technical documentation",
            )
            .with_mono("Fira Code"),
            PairingSpec::new(
                "Inter",
                "Montserrat",
                "modern",
                "Contemporary tech writing",
            )
            .with_mono("Source Code Pro"),
            PairingSpec::new(
                "Open Sans",
                "Raleway",
                "accessible",
                "User-friendly technical content",
            )
            .with_mono("JetBrains Mono"),
        ],
    ),
    (
        "academic",
        &[
            PairingSpec::new(
                "Source Serif Pro",
                "Roboto Slab",
                "scholarly",
                "Academic professionalism",
            )
            .with_mono("Inconsolata"),
            PairingSpec::new(
                "Crimson Text",
                "Libre Baskerville",
                "traditional",
                "Classical academic style",
            ),
            PairingSpec::new(
                "EB Garamond",
                "Montserrat",
                "refined",
                "Sophisticated research",
            ),
        ],
    ),
    (
        "business",
        &[
            PairingSpec::new(
                "Lato",
                "Montserrat",
                "corporate",
                "Professional business style",
            ),
            PairingSpec::new(
                "Source Sans Pro",
                "Oswald",
                "confident",
                "Strong business voice",
            ),
            PairingSpec::new("Roboto", "Raleway", "modern", "Contemporary business"),
        ],
    ),
];
