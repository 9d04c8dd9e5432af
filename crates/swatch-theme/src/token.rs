//! Semantic token names and the resolved token set for one variant.
//!
//! UI code never sees mixing ratios or seeds. It looks tokens up by name
//! (`textPrimary`, `buttonPrimaryBg`, …) and gets back a color string.

use std::fmt;
use std::ops::Index;

use swatch_color::ColorValue;

use crate::palette::ThemeVariantKey;

macro_rules! tokens {
    ($( $(#[$doc:meta])* $variant:ident => $name:literal, )+) => {
        /// A semantic color role consumed by the UI.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Token {
            $( $(#[$doc])* $variant, )+
        }

        impl Token {
            /// Every token, in declaration order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            pub const COUNT: usize = Self::ALL.len();

            /// The camelCase key UI code looks the token up by.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $name, )+
                }
            }
        }
    };
}

tokens! {
    // ── Surfaces ──────────────────────────────────────────────
    /// Screen background.
    SurfacePage => "surfacePage",
    /// Grouped-list and section background.
    SurfaceSecondary => "surfaceSecondary",
    SurfaceCard => "surfaceCard",
    SurfaceCardRaised => "surfaceCardRaised",
    /// Sheets and side panels.
    SurfacePanel => "surfacePanel",
    /// Text input fill.
    SurfaceField => "surfaceField",
    SurfaceChip => "surfaceChip",
    SurfaceChipActive => "surfaceChipActive",
    /// Bottom tab bar fill.
    SurfaceTabGlass => "surfaceTabGlass",
    /// Modal scrim.
    SurfaceOverlay => "surfaceOverlay",

    // ── Backdrop gradient ─────────────────────────────────────
    BackdropStart => "backdropStart",
    BackdropEnd => "backdropEnd",
    BackdropAccent => "backdropAccent",

    // ── Text ──────────────────────────────────────────────────
    TextPrimary => "textPrimary",
    TextSecondary => "textSecondary",
    /// Placeholders, timestamps, captions.
    TextMuted => "textMuted",
    /// Text on foreground-colored fills.
    TextInverse => "textInverse",
    /// Links and accent-colored labels.
    TextAccent => "textAccent",
    TextOnChipActive => "textOnChipActive",

    // ── Borders ───────────────────────────────────────────────
    BorderSubtle => "borderSubtle",
    BorderDefault => "borderDefault",
    BorderStrong => "borderStrong",
    BorderFocus => "borderFocus",
    Divider => "divider",

    // ── Shadows ───────────────────────────────────────────────
    ShadowSoft => "shadowSoft",
    ShadowStrong => "shadowStrong",

    // ── Accent ────────────────────────────────────────────────
    Accent => "accent",
    AccentSoft => "accentSoft",
    /// Pressed state of the primary button.
    AccentPress => "accentPress",
    AccentGlow => "accentGlow",

    // ── Buttons ───────────────────────────────────────────────
    ButtonPrimaryBg => "buttonPrimaryBg",
    ButtonPrimaryFg => "buttonPrimaryFg",
    ButtonSecondaryBg => "buttonSecondaryBg",
    ButtonSecondaryFg => "buttonSecondaryFg",
    ButtonSecondaryBorder => "buttonSecondaryBorder",

    // ── Tab bar ───────────────────────────────────────────────
    TabActive => "tabActive",
    TabInactive => "tabInactive",

    // ── Status ────────────────────────────────────────────────
    StatusSuccess => "statusSuccess",
    StatusWarning => "statusWarning",
    StatusDanger => "statusDanger",
}

impl Token {
    /// Look a token up by its camelCase key.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// SemanticTokenSet
// ---------------------------------------------------------------------------

/// Every token resolved for one variant. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticTokenSet {
    key: ThemeVariantKey,
    values: [ColorValue; Token::COUNT],
}

impl SemanticTokenSet {
    /// Build a set by resolving every token through `resolve`.
    ///
    /// Passing a `match` over [`Token`] makes completeness a compile-time
    /// property: a token without an arm does not build.
    pub fn from_fn(key: ThemeVariantKey, mut resolve: impl FnMut(Token) -> ColorValue) -> Self {
        Self {
            key,
            values: std::array::from_fn(|i| resolve(Token::ALL[i])),
        }
    }

    /// The variant this set was generated for.
    #[must_use]
    pub const fn key(&self) -> ThemeVariantKey {
        self.key
    }

    #[must_use]
    pub const fn get(&self, token: Token) -> ColorValue {
        self.values[token.index()]
    }

    /// Look a value up by camelCase token name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<ColorValue> {
        Token::from_name(name).map(|token| self.get(token))
    }

    /// The value rendered as the string UI code consumes.
    #[must_use]
    pub fn css(&self, token: Token) -> String {
        self.get(token).to_string()
    }

    /// `(token, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Token, ColorValue)> + '_ {
        Token::ALL.iter().map(|&token| (token, self.get(token)))
    }
}

impl Index<Token> for SemanticTokenSet {
    type Output = ColorValue;

    fn index(&self, token: Token) -> &ColorValue {
        &self.values[token.index()]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
