//! Font pairing database assembly and lookups (made by FontLab https://www.fontlab.com/)

use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::{classify, FontCategory};
use crate::taxonomy::{CuratedCategory, PairingSpec, Taxonomy, TaxonomyError};

pub const DATABASE_VERSION: &str = "1.0";
pub const LAST_UPDATED: &str = "2024-10-31";

/// Genre used when a lookup names a genre the database does not know.
pub const FALLBACK_GENRE: &str = "fiction";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenrePairing {
    pub body: String,
    pub heading: String,
    #[serde(default, alias = "monospace", skip_serializing_if = "Option::is_none")]
    pub mono: Option<String>,
    pub mood: String,
    pub rationale: String,
}

impl From<&PairingSpec<'_>> for GenrePairing {
    fn from(spec: &PairingSpec<'_>) -> Self {
        Self {
            body: spec.body.to_string(),
            heading: spec.heading.to_string(),
            mono: spec.mono.map(str::to_string),
            mood: spec.mood.to_string(),
            rationale: spec.rationale.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontMetadata {
    pub name: String,
    pub category: FontCategory,
    pub supports_latin: bool,
    pub variable: bool,
    /// Every curated font comes from the Google Fonts catalog.
    #[serde(rename = "google_fonts")]
    pub source: bool,
}

impl FontMetadata {
    /// Metadata for a curated name: category from the classifier, flags fixed.
    pub fn for_font(name: &str) -> Self {
        Self {
            name: name.to_string(),
            category: classify(name),
            supports_latin: true,
            variable: false,
            source: true,
        }
    }
}

/// The versioned document handed to the downstream book-design tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontDatabase {
    pub version: String,
    pub last_updated: String,
    #[serde(with = "ordered_map")]
    pub curated_fonts: Vec<(CuratedCategory, Vec<String>)>,
    #[serde(with = "ordered_map")]
    pub genre_pairings: Vec<(String, Vec<GenrePairing>)>,
    pub font_metadata: BTreeMap<String, FontMetadata>,
}

/// Validate `taxonomy` and assemble a database from it.
pub fn build_database(taxonomy: &Taxonomy<'_>) -> Result<FontDatabase, TaxonomyError> {
    taxonomy.validate()?;

    let curated_fonts: Vec<(CuratedCategory, Vec<String>)> = taxonomy
        .curated
        .iter()
        .map(|(category, fonts)| (*category, fonts.iter().map(|f| f.to_string()).collect()))
        .collect();

    let genre_pairings: Vec<(String, Vec<GenrePairing>)> = taxonomy
        .genres
        .iter()
        .map(|(genre, pairs)| (genre.to_string(), pairs.iter().map(GenrePairing::from).collect()))
        .collect();

    let font_metadata: BTreeMap<String, FontMetadata> = taxonomy
        .distinct_fonts()
        .into_iter()
        .map(|name| {
            let meta = FontMetadata::for_font(name);
            debug!(font = name, category = %meta.category, "classified");
            (name.to_string(), meta)
        })
        .collect();

    debug!(
        categories = taxonomy.curated.len(),
        fonts = font_metadata.len(),
        genres = taxonomy.genres.len(),
        "assembled font database"
    );

    Ok(FontDatabase {
        version: DATABASE_VERSION.to_string(),
        last_updated: LAST_UPDATED.to_string(),
        curated_fonts,
        genre_pairings,
        font_metadata,
    })
}

impl FontDatabase {
    /// Build from the tables compiled into the crate.
    pub fn builtin() -> Result<Self, TaxonomyError> {
        build_database(&Taxonomy::builtin())
    }

    /// Parse a database previously written with [`crate::output::write_database`].
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        serde_json::from_reader(reader).context("failed to parse font database")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open font database {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("while reading {}", path.display()))
    }

    /// Pairings for `genre`, falling back to the fiction pairings.
    pub fn pairings_for(&self, genre: &str) -> &[GenrePairing] {
        self.genre(genre)
            .or_else(|| self.genre(FALLBACK_GENRE))
            .unwrap_or(&[])
    }

    fn genre(&self, genre: &str) -> Option<&[GenrePairing]> {
        self.genre_pairings
            .iter()
            .find(|(tag, _)| tag == genre)
            .map(|(_, pairs)| pairs.as_slice())
    }

    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.genre_pairings.iter().map(|(tag, _)| tag.as_str())
    }

    pub fn metadata(&self, name: &str) -> Option<&FontMetadata> {
        self.font_metadata.get(name)
    }

    pub fn fonts_in(&self, category: CuratedCategory) -> &[String] {
        self.curated_fonts
            .iter()
            .find(|(cat, _)| *cat == category)
            .map(|(_, fonts)| fonts.as_slice())
            .unwrap_or(&[])
    }

    pub fn summary(&self) -> DatabaseSummary {
        DatabaseSummary {
            categories: self.curated_fonts.len(),
            fonts: self.font_metadata.len(),
            genres: self.genre_pairings.len(),
            pairings: self.genre_pairings.iter().map(|(_, p)| p.len()).sum(),
        }
    }
}

/// Counts reported after a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseSummary {
    pub categories: usize,
    pub fonts: usize,
    pub genres: usize,
    pub pairings: usize,
}

impl fmt::Display for DatabaseSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   - {} font categories", self.categories)?;
        writeln!(f, "   - {} curated fonts", self.fonts)?;
        writeln!(f, "   - {} genre pairings", self.genres)?;
        write!(f, "   - Total pairings: {}", self.pairings)
    }
}

/// Serialize `Vec<(K, V)>` as a JSON object, keeping entry order both ways.
mod ordered_map {
    use std::fmt;
    use std::marker::PhantomData;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[allow(clippy::ptr_arg)]
    pub fn serialize<S, K, V>(entries: &Vec<(K, V)>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        K: Serialize,
        V: Serialize,
    {
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D, K, V>(deserializer: D) -> Result<Vec<(K, V)>, D::Error>
    where
        D: Deserializer<'de>,
        K: Deserialize<'de>,
        V: Deserialize<'de>,
    {
        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }

    struct EntriesVisitor<K, V>(PhantomData<(K, V)>);

    impl<'de, K, V> Visitor<'de> for EntriesVisitor<K, V>
    where
        K: Deserialize<'de>,
        V: Deserialize<'de>,
    {
        type Value = Vec<(K, V)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a JSON object")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some(entry) = access.next_entry()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }
}
