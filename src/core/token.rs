//! Token identity and marker interning.
//!
//! Board cells carry either a `Token` or nothing (empty). Hosts usually
//! describe their tokens with string markers; the `TokenRegistry` interns
//! those markers into compact `Token` ids and keeps track of which marker
//! is the distinguished block token.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Compact identifier for one token kind.
///
/// Tokens are opaque to the engine: it only compares them for equality
/// and checks whether one is the configured block token. Hosts assign
/// meaning, typically through a `TokenRegistry`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token(pub u16);

impl Token {
    /// Create a token id from a raw value.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({})", self.0)
    }
}

/// Interns string markers into `Token` ids.
///
/// Marker domains are small (two players plus a block marker is typical),
/// so ids are allocated sequentially from zero.
///
/// ## Example
///
/// ```
/// use drop_four::core::TokenRegistry;
///
/// let mut registry = TokenRegistry::new();
///
/// let red = registry.intern("red");
/// let block = registry.intern_block("wall");
///
/// assert_eq!(registry.intern("red"), red);
/// assert!(registry.is_block(block));
/// assert!(!registry.is_block(red));
/// assert_eq!(registry.marker(red), Some("red"));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TokenRegistry {
    by_marker: FxHashMap<String, Token>,
    markers: Vec<String>,
    block: Option<Token>,
}

impl TokenRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a marker, returning its token id.
    ///
    /// Interning the same marker twice yields the same id.
    pub fn intern(&mut self, marker: impl Into<String>) -> Token {
        let marker = marker.into();
        if let Some(&token) = self.by_marker.get(&marker) {
            return token;
        }
        let token = Token::new(self.markers.len() as u16);
        self.by_marker.insert(marker.clone(), token);
        self.markers.push(marker);
        token
    }

    /// Intern a marker and designate it as the block token.
    ///
    /// Panics if a different marker was already designated.
    pub fn intern_block(&mut self, marker: impl Into<String>) -> Token {
        let token = self.intern(marker);
        match self.block {
            Some(existing) if existing != token => {
                panic!("Block token already designated as {existing}");
            }
            _ => self.block = Some(token),
        }
        token
    }

    /// Look up a marker without interning it.
    #[must_use]
    pub fn get(&self, marker: &str) -> Option<Token> {
        self.by_marker.get(marker).copied()
    }

    /// Get the marker a token was interned from.
    #[must_use]
    pub fn marker(&self, token: Token) -> Option<&str> {
        self.markers.get(token.0 as usize).map(String::as_str)
    }

    /// Get the designated block token, if any.
    #[must_use]
    pub fn block(&self) -> Option<Token> {
        self.block
    }

    /// Check whether a token is the designated block token.
    #[must_use]
    pub fn is_block(&self, token: Token) -> bool {
        self.block == Some(token)
    }

    /// Get the number of interned markers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
