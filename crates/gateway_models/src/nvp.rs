use indexmap::IndexMap;
use serde::Serialize;

///
/// Ordered mapping decoded from a name-value-pair response.
///
/// Keys are the gateway's dot-delimited paths (`order.amount`) and values are kept as the
/// decoded strings. Building the mapping from pairs keeps the first position of a key and the
/// value of its last occurrence.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NameValuePairs(IndexMap<String, String>);

impl NameValuePairs {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for NameValuePairs {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
