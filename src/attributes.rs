//! Ordered, multi-valued HTML attributes
//!
//! An [`AttributeSet`] maps a name to a list of values and renders as
//! `name="v1 v2"` pairs. Writes merge: adding `class="a"` and then
//! `class="b"` renders `class="a b"`.

pub mod input;
pub mod parser;

use std::fmt;

use indexmap::IndexMap;

pub use input::{AttrValue, AttributeInput, NameList};
pub use parser::parse_attribute_string;

use crate::error::Result;

/// Ordered mapping from attribute name to its values
///
/// A name that is present always has at least one value. Equality is
/// order-sensitive, like the rendered output.
#[derive(Clone, Debug, Default)]
pub struct AttributeSet {
    entries: IndexMap<String, Vec<String>>,
}

impl AttributeSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set from an attribute string or mapping
    ///
    /// Fails only when a formatted string does not parse.
    pub fn parse(initial: impl Into<AttributeInput>) -> Result<Self> {
        let mut set = Self::new();
        set.add(initial)?;
        Ok(set)
    }

    /// Append values, creating names that are not yet present
    ///
    /// The whole input is parsed before anything is merged, so a failed
    /// parse leaves the set untouched. Names whose value holds no tokens
    /// are skipped.
    pub fn add(&mut self, input: impl Into<AttributeInput>) -> Result<&mut Self> {
        let input: AttributeInput = input.into();
        if input.is_empty() {
            return Ok(self);
        }
        let normalized = normalize(input)?;
        self.merge(normalized);
        Ok(self)
    }

    /// Remove one name or a list of names; absent names are ignored
    pub fn delete(&mut self, names: impl Into<NameList>) -> &mut Self {
        let names: NameList = names.into();
        for name in names.iter() {
            self.entries.shift_remove(name);
        }
        self
    }

    /// Replace the values of every name mentioned by `input`, leaving the
    /// other names alone
    ///
    /// A name replaced with an empty value is removed.
    pub fn replace(&mut self, input: impl Into<AttributeInput>) -> Result<&mut Self> {
        let input: AttributeInput = input.into();
        if input.is_empty() {
            return Ok(self);
        }
        let normalized = normalize(input)?;
        for name in normalized.keys() {
            self.entries.shift_remove(name);
        }
        self.merge(normalized);
        Ok(self)
    }

    /// Replace a single name with `value`; an empty value removes the name
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> &mut Self {
        let name = name.into();
        let value: AttrValue = value.into();
        let tokens = value.into_tokens();
        self.entries.shift_remove(&name);
        if !tokens.is_empty() {
            self.entries.insert(name, tokens);
        }
        self
    }

    /// Remove every entry
    pub fn clear(&mut self) -> &mut Self {
        self.entries.clear();
        self
    }

    /// Values recorded for `name`
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// Values for `name`, space-joined as they render
    pub fn value(&self, name: &str) -> Option<String> {
        self.entries.get(name).map(|values| values.join(" "))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Render as `name="v1 v2" other="v3"`; empty sets render as ""
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn merge(&mut self, normalized: IndexMap<String, Vec<String>>) {
        for (name, values) in normalized {
            if values.is_empty() {
                continue;
            }
            self.entries.entry(name).or_default().extend(values);
        }
    }
}

impl PartialEq for AttributeSet {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for AttributeSet {}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, values)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}=\"{}\"", name, values.join(" "))?;
        }
        Ok(())
    }
}

/// Turn either input shape into name -> tokens, merging repeated names
///
/// Names with no tokens are kept with an empty list so `replace` can clear
/// them; `merge` never stores such a list.
fn normalize(input: AttributeInput) -> Result<IndexMap<String, Vec<String>>> {
    let pairs: Vec<(String, AttrValue)> = match input {
        AttributeInput::Formatted(text) => parse_attribute_string(&text)?
            .into_iter()
            .map(|(name, value)| (name, AttrValue::Text(value)))
            .collect(),
        AttributeInput::Map(entries) => entries,
    };

    let mut normalized: IndexMap<String, Vec<String>> = IndexMap::with_capacity(pairs.len());
    for (name, value) in pairs {
        normalized
            .entry(name)
            .or_default()
            .extend(value.into_tokens());
    }
    Ok(normalized)
}
