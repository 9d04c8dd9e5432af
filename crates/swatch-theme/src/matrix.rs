//! The theme matrix: every variant, guarded, keyed by name.
//!
//! Built once at startup and immutable afterwards. Construction is
//! all-or-nothing: seeds are parsed for every variant before anything is
//! derived, and each derived set must pass the contrast guard before it is
//! admitted. The first failure aborts the build and nothing is returned.
//!
//! Legacy names from older releases are kept as aliases. An alias holds a
//! clone of the canonical [`Arc`], so it is the same token set rather than
//! a copy that could drift.

use std::collections::BTreeMap;
use std::ops::Index;
use std::sync::{Arc, OnceLock};

use tracing::{debug, info};

use crate::contrast::{PairMeasurement, guard, measure_guarded};
use crate::error::{Result, ThemeError};
use crate::palette::{Aesthetic, Mode, Palette, SeedTable, ThemeVariantKey};
use crate::recolor::recolor;
use crate::token::SemanticTokenSet;

/// Legacy name → canonical variant.
pub const ALIASES: &[(&str, &str)] = &[
    ("light", "alloy_modern_light"),
    ("dark", "alloy_modern_dark"),
    ("alloy_light", "alloy_modern_light"),
    ("alloy_dark", "alloy_modern_dark"),
    ("signal_light", "signal_modern_light"),
    ("signal_dark", "signal_modern_dark"),
    ("ember_light", "ember_modern_light"),
    ("ember_dark", "ember_modern_dark"),
    ("glass_light", "alloy_glass_light"),
    ("glass_dark", "alloy_glass_dark"),
];

/// Every generated token set plus its aliases.
#[derive(Debug, Clone)]
pub struct ThemeMatrix {
    entries: BTreeMap<String, Arc<SemanticTokenSet>>,
    canonical: Vec<String>,
    aliases: Vec<(&'static str, &'static str)>,
}

impl ThemeMatrix {
    /// Build from the shipped seed table.
    ///
    /// # Errors
    ///
    /// See [`ThemeMatrix::build_with`].
    pub fn build() -> Result<Self> {
        Self::build_with(&SeedTable::builtin())
    }

    /// Build every variant from `seeds`.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::InvalidColorFormat`] if any seed color is malformed.
    ///   Reported before any token set is derived.
    /// - [`ThemeError::ContrastViolation`] if a derived set fails a guarded
    ///   pair.
    pub fn build_with(seeds: &SeedTable) -> Result<Self> {
        let parsed = ThemeVariantKey::all()
            .map(|key| seeds.get(key.palette, key.mode).parse(key).map(|s| (key, s)))
            .collect::<Result<Vec<_>>>()?;

        let mut entries = BTreeMap::new();
        let mut canonical = Vec::with_capacity(parsed.len());
        for (key, seed) in parsed {
            let set = recolor(key, &seed);
            guard(&set)?;
            debug!(variant = %key, tokens = set.iter().count(), "built theme variant");
            let name = key.to_string();
            canonical.push(name.clone());
            entries.insert(name, Arc::new(set));
        }

        let mut aliases = Vec::with_capacity(ALIASES.len());
        for &(alias, target) in ALIASES {
            let set = entries
                .get(target)
                .cloned()
                .ok_or_else(|| ThemeError::UnknownVariant {
                    key: target.to_string(),
                })?;
            entries.insert(alias.to_string(), set);
            aliases.push((alias, target));
        }

        info!(
            variants = canonical.len(),
            aliases = aliases.len(),
            "theme matrix built"
        );
        Ok(Self {
            entries,
            canonical,
            aliases,
        })
    }

    /// Look up a variant or alias by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<SemanticTokenSet>> {
        self.entries.get(name)
    }

    /// The token set for `key`.
    #[must_use]
    pub fn variant(&self, key: ThemeVariantKey) -> Option<&Arc<SemanticTokenSet>> {
        self.get(&key.to_string())
    }

    #[must_use]
    pub fn resolve(
        &self,
        palette: Palette,
        aesthetic: Aesthetic,
        mode: Mode,
    ) -> Option<&Arc<SemanticTokenSet>> {
        self.variant(ThemeVariantKey::new(palette, aesthetic, mode))
    }

    /// Canonical variant names in build order (palette-major).
    pub fn canonical_keys(&self) -> impl Iterator<Item = &str> {
        self.canonical.iter().map(String::as_str)
    }

    /// `(alias, target)` pairs installed in this matrix.
    pub fn aliases(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        self.aliases.iter().copied()
    }

    /// The canonical name an alias points at, or `None` for a canonical or
    /// unknown name.
    #[must_use]
    pub fn alias_target(&self, name: &str) -> Option<&'static str> {
        self.aliases
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|&(_, target)| target)
    }

    /// Number of names, canonical and alias.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every guarded pair of every canonical variant, measured.
    #[must_use]
    pub fn contrast_report(&self) -> Vec<(&str, [PairMeasurement; 6])> {
        self.canonical
            .iter()
            .filter_map(|name| {
                self.entries
                    .get(name)
                    .map(|set| (name.as_str(), measure_guarded(set)))
            })
            .collect()
    }
}

impl Index<&str> for ThemeMatrix {
    type Output = SemanticTokenSet;

    /// # Panics
    ///
    /// Panics if `name` is neither a variant nor an alias. Theme names come
    /// from code, so a miss is a bug at the call site.
    fn index(&self, name: &str) -> &SemanticTokenSet {
        match self.entries.get(name) {
            Some(set) => set,
            None => panic!("unknown theme key {name:?}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Process-wide matrix
// ---------------------------------------------------------------------------

static MATRIX: OnceLock<ThemeMatrix> = OnceLock::new();

/// Build the process-wide matrix, or return it if already built.
///
/// # Errors
///
/// Returns the build error; nothing is installed in that case and a later
/// call builds again.
pub fn init() -> Result<&'static ThemeMatrix> {
    if let Some(matrix) = MATRIX.get() {
        return Ok(matrix);
    }
    let built = ThemeMatrix::build()?;
    Ok(MATRIX.get_or_init(|| built))
}

/// The process-wide matrix, if [`init`] has succeeded.
#[must_use]
pub fn installed() -> Option<&'static ThemeMatrix> {
    MATRIX.get()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
