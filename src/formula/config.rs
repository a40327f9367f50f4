//! Lookup tables driving the OMML to LaTeX translation.
//!
//! The defaults come from the static tables in `formula::latex::symbols`.
//! Every table can be replaced or extended in code, or loaded from YAML so
//! that deployments can tune the output without recompiling.

use super::latex::symbols;
use super::latex::utils::RESERVED_CHARS;
use super::latex::{escape_latex_with, render_template, render_text};
use crate::common::error::{Error, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Shared default tables, built once.
pub(crate) static DEFAULT_TABLES: Lazy<LatexTables> = Lazy::new(LatexTables::default);

/// Character substitution table applied to text runs.
///
/// Keys are single characters stored as strings; characters without an
/// entry pass through unchanged. Deserializing a key of any other length
/// fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymbolTable(BTreeMap<String, String>);

impl SymbolTable {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replacement for `c`, if any.
    #[inline]
    pub fn get(&self, c: char) -> Option<&str> {
        let mut buf = [0u8; 4];
        self.0.get(&*c.encode_utf8(&mut buf)).map(String::as_str)
    }

    pub fn insert(&mut self, c: char, latex: impl Into<String>) -> Option<String> {
        self.0.insert(c.to_string(), latex.into())
    }

    pub fn with(mut self, c: char, latex: impl Into<String>) -> Self {
        self.insert(c, latex);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Map every character of `text` through the table.
    pub fn substitute(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match self.get(c) {
                Some(latex) => out.push_str(latex),
                None => out.push(c),
            }
        }
        out
    }
}

impl<'de> Deserialize<'de> for SymbolTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let map = BTreeMap::<String, String>::deserialize(deserializer)?;
        if let Some(key) = map.keys().find(|key| key.chars().count() != 1) {
            return Err(serde::de::Error::custom(format!(
                "symbol key {:?} must be exactly one character",
                key
            )));
        }
        Ok(Self(map))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

fn from_phf(map: &phf::Map<&'static str, &'static str>) -> BTreeMap<String, String> {
    map.entries()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Configuration for the translator's lookup tables.
///
/// # Examples
///
/// ```rust
/// use omml_latex::{LatexTables, SymbolTable};
///
/// // Defaults
/// let tables = LatexTables::default();
/// assert!(tables.function("sin").is_some());
///
/// // Customized
/// let tables = LatexTables::new()
///     .with_function("sgn", "\\operatorname{{sgn}}({text})")
///     .with_script_symbols(SymbolTable::new().with('*', "\\ast "));
/// assert!(tables.function("sgn").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatexTables {
    /// Characters escaped in delimiter values
    pub escape_chars: String,
    /// Accent and grouping characters to templates (`{text}`)
    pub accents: BTreeMap<String, String>,
    /// Accent template when no character is given
    pub accent_default: String,
    /// Bar positions to templates (`{text}`)
    pub positions: BTreeMap<String, String>,
    /// Bar template when no position is given
    pub position_default: String,
    /// Fraction types to templates (`{num}`, `{den}`)
    pub fractions: BTreeMap<String, String>,
    /// Fraction template when no type is given
    pub fraction_default: String,
    /// Function names to templates (`{text}`)
    pub functions: BTreeMap<String, String>,
    /// Substitutions for text runs
    pub symbols: SymbolTable,
    /// Substitutions for text runs inside `sub`/`sup`, replacing `symbols`
    pub script_symbols: Option<SymbolTable>,
    /// Subscript wrapper (`{text}`)
    pub sub: String,
    /// Superscript wrapper (`{text}`)
    pub sup: String,
    /// Delimiter template (`{left}`, `{text}`, `{right}`)
    pub delimiter: String,
    pub delimiter_open: String,
    pub delimiter_close: String,
    /// Separator between the arguments of a delimiter
    pub delimiter_separator: String,
    /// Marker for an explicitly empty delimiter
    pub delimiter_null: String,
}

impl Default for LatexTables {
    fn default() -> Self {
        Self {
            escape_chars: RESERVED_CHARS.to_string(),
            accents: from_phf(&symbols::ACCENTS),
            accent_default: symbols::ACCENT_DEFAULT.to_string(),
            positions: from_phf(&symbols::POSITIONS),
            position_default: symbols::POSITION_DEFAULT.to_string(),
            fractions: from_phf(&symbols::FRACTIONS),
            fraction_default: symbols::FRACTION_DEFAULT.to_string(),
            functions: from_phf(&symbols::FUNCTIONS),
            symbols: SymbolTable(from_phf(&symbols::SYMBOLS)),
            script_symbols: None,
            sub: symbols::SUBSCRIPT.to_string(),
            sup: symbols::SUPERSCRIPT.to_string(),
            delimiter: symbols::DELIMITER.to_string(),
            delimiter_open: symbols::DELIMITER_OPEN.to_string(),
            delimiter_close: symbols::DELIMITER_CLOSE.to_string(),
            delimiter_separator: symbols::DELIMITER_SEPARATOR.to_string(),
            delimiter_null: symbols::DELIMITER_NULL.to_string(),
        }
    }
}

impl LatexTables {
    /// Create tables with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load tables from YAML. Missing keys keep their default values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use omml_latex::LatexTables;
    ///
    /// let tables = LatexTables::from_yaml("delimiter_null: \"\\\\relax\"\n").unwrap();
    /// assert_eq!(tables.delimiter_null, "\\relax");
    /// assert!(tables.function("cos").is_some());
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml)
            .map_err(|e| Error::Config(format!("Failed to parse lookup tables from YAML: {}", e)))
    }

    /// Serialize the tables to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self)
            .map_err(|e| Error::Config(format!("Failed to serialize lookup tables to YAML: {}", e)))
    }

    /// Add or replace an accent or grouping character template.
    pub fn with_accent(mut self, chr: impl Into<String>, template: impl Into<String>) -> Self {
        self.accents.insert(chr.into(), template.into());
        self
    }

    /// Add or replace a function template.
    pub fn with_function(mut self, name: impl Into<String>, template: impl Into<String>) -> Self {
        self.functions.insert(name.into(), template.into());
        self
    }

    /// Add or replace a text run substitution.
    pub fn with_symbol(mut self, c: char, latex: impl Into<String>) -> Self {
        self.symbols.insert(c, latex);
        self
    }

    /// Use a separate substitution table inside subscripts and superscripts.
    pub fn with_script_symbols(mut self, table: SymbolTable) -> Self {
        self.script_symbols = Some(table);
        self
    }

    #[inline]
    pub fn accent(&self, chr: &str) -> Option<&str> {
        self.accents.get(chr).map(String::as_str)
    }

    #[inline]
    pub fn position(&self, pos: &str) -> Option<&str> {
        self.positions.get(pos).map(String::as_str)
    }

    #[inline]
    pub fn fraction(&self, kind: &str) -> Option<&str> {
        self.fractions.get(kind).map(String::as_str)
    }

    #[inline]
    pub fn function(&self, name: &str) -> Option<&str> {
        self.functions.get(name).map(String::as_str)
    }

    /// Escape `text` against the configured reserved set.
    pub fn escape(&self, text: &str) -> String {
        escape_latex_with(text, |c| self.escape_chars.contains(c))
    }

    pub(crate) fn render_sub(&self, text: &str) -> String {
        render_text(&self.sub, text)
    }

    pub(crate) fn render_sup(&self, text: &str) -> String {
        render_text(&self.sup, text)
    }

    pub(crate) fn render_delimiter(&self, left: &str, text: &str, right: &str) -> String {
        render_template(&self.delimiter, &[("left", left), ("text", text), ("right", right)])
    }
}
