//! Accepted input shapes for attribute writes

use indexmap::IndexMap;

/// Value half of a mapping entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrValue {
    /// Split on whitespace into separate values.
    Text(String),
    /// Taken verbatim, never re-split.
    List(Vec<String>),
}

impl AttrValue {
    /// Normalized value tokens
    pub(crate) fn into_tokens(self) -> Vec<String> {
        match self {
            Self::Text(text) => text.split_whitespace().map(str::to_string).collect(),
            Self::List(list) => list,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for AttrValue {
    fn from(value: [&str; N]) -> Self {
        Self::List(value.into_iter().map(str::to_string).collect())
    }
}

/// Input accepted by attribute construction, add and replace
///
/// Either a pre-formatted attribute string such as `class="a b" id="c"`, or
/// an ordered mapping from name to [`AttrValue`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributeInput {
    Formatted(String),
    Map(Vec<(String, AttrValue)>),
}

impl AttributeInput {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Formatted(text) => text.trim().is_empty(),
            Self::Map(entries) => entries.is_empty(),
        }
    }
}

impl Default for AttributeInput {
    fn default() -> Self {
        Self::Map(Vec::new())
    }
}

impl From<&str> for AttributeInput {
    fn from(value: &str) -> Self {
        Self::Formatted(value.to_string())
    }
}

impl From<String> for AttributeInput {
    fn from(value: String) -> Self {
        Self::Formatted(value)
    }
}

impl<K, V> From<Vec<(K, V)>> for AttributeInput
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from(entries: Vec<(K, V)>) -> Self {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for AttributeInput
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from(entries: [(K, V); N]) -> Self {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K, V> From<IndexMap<K, V>> for AttributeInput
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from(entries: IndexMap<K, V>) -> Self {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<T: Into<Self>> From<Option<T>> for AttributeInput {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// One attribute name or several, as accepted by delete
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameList(pub(crate) Vec<String>);

impl NameList {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<&str> for NameList {
    fn from(name: &str) -> Self {
        Self(vec![name.to_string()])
    }
}

impl From<String> for NameList {
    fn from(name: String) -> Self {
        Self(vec![name])
    }
}

impl<S: Into<String>> From<Vec<S>> for NameList {
    fn from(names: Vec<S>) -> Self {
        Self(names.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for NameList {
    fn from(names: [S; N]) -> Self {
        Self(names.into_iter().map(Into::into).collect())
    }
}

impl From<&[&str]> for NameList {
    fn from(names: &[&str]) -> Self {
        Self(names.iter().map(|n| (*n).to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_value_splits_on_whitespace() {
        let value = AttrValue::from("new  hotness\tnow");
        assert_eq!(value.into_tokens(), vec!["new", "hotness", "now"]);
    }

    #[test]
    fn test_list_value_is_verbatim() {
        let value = AttrValue::from(vec!["two words", "x"]);
        assert_eq!(value.into_tokens(), vec!["two words", "x"]);
    }

    #[test]
    fn test_absent_input_is_empty() {
        let input = AttributeInput::from(None::<&str>);
        assert!(input.is_empty());
        assert!(AttributeInput::from("  ").is_empty());
    }

    #[test]
    fn test_map_input_keeps_order() {
        let input = AttributeInput::from([("src", "a.jpg"), ("class", "b")]);
        match input {
            AttributeInput::Map(entries) => {
                let names: Vec<_> = entries.iter().map(|(k, _)| k.as_str()).collect();
                assert_eq!(names, vec!["src", "class"]);
            }
            AttributeInput::Formatted(_) => panic!("expected map input"),
        }
    }

    #[test]
    fn test_name_list_shapes() {
        assert_eq!(NameList::from("class").0, vec!["class"]);
        assert_eq!(NameList::from(["class", "src"]).0, vec!["class", "src"]);
        assert_eq!(
            NameList::from(vec!["a".to_string()]).iter().collect::<Vec<_>>(),
            vec!["a"]
        );
    }
}
