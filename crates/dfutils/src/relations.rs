//! Ordered alias → relation mapping for [`crate::UnionRelations`].

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An ordered list of `(alias, relation)` pairs.
///
/// Iteration follows insertion order, and so does the branch order of the
/// generated `UNION ALL`. Re-inserting an alias replaces its relation but
/// keeps its original position.
///
/// # Example
/// ```ignore
/// use dfutils::Relations;
///
/// let rels = Relations::new()
///     .with("shop_eu", "raw.orders_eu")
///     .with("shop_us", "raw.orders_us");
/// assert_eq!(rels.aliases().collect::<Vec<_>>(), ["shop_eu", "shop_us"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Relations {
    entries: Vec<(String, String)>,
}

impl Relations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace `alias`. Returns the relation it replaced, if any.
    pub fn insert(&mut self, alias: impl Into<String>, relation: impl Into<String>) -> Option<String> {
        let alias = alias.into();
        let relation = relation.into();
        match self.entries.iter_mut().find(|(a, _)| *a == alias) {
            Some((_, existing)) => Some(std::mem::replace(existing, relation)),
            None => {
                self.entries.push((alias, relation));
                None
            }
        }
    }

    /// Consuming form of [`Relations::insert`], for chaining.
    pub fn with(mut self, alias: impl Into<String>, relation: impl Into<String>) -> Self {
        self.insert(alias, relation);
        self
    }

    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(a, _)| a == alias)
            .map(|(_, r)| r.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(alias, relation)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(a, r)| (a.as_str(), r.as_str()))
    }

    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(a, _)| a.as_str())
    }
}

impl<A, R> FromIterator<(A, R)> for Relations
where
    A: Into<String>,
    R: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (A, R)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (alias, relation) in iter {
            out.insert(alias, relation);
        }
        out
    }
}

impl<A, R, const N: usize> From<[(A, R); N]> for Relations
where
    A: Into<String>,
    R: Into<String>,
{
    fn from(pairs: [(A, R); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<A, R> From<Vec<(A, R)>> for Relations
where
    A: Into<String>,
    R: Into<String>,
{
    fn from(pairs: Vec<(A, R)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Relations {
    type Item = (&'a str, &'a str);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, String)>,
        fn(&'a (String, String)) -> (&'a str, &'a str),
    >;

    fn into_iter(self) -> Self::IntoIter {
        fn pair(e: &(String, String)) -> (&str, &str) {
            (e.0.as_str(), e.1.as_str())
        }
        self.entries.iter().map(pair as fn(&'a (String, String)) -> (&'a str, &'a str))
    }
}

impl Serialize for Relations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (alias, relation) in &self.entries {
            map.serialize_entry(alias, relation)?;
        }
        map.end()
    }
}

/// Accepts either a table (`{ alias = "relation" }`) or a list of
/// `[alias, relation]` pairs. Both keep the order they are written in; for
/// TOML this relies on the `preserve_order` feature of `toml`.
impl<'de> Deserialize<'de> for Relations {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RelationsVisitor;

        impl<'de> Visitor<'de> for RelationsVisitor {
            type Value = Relations;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of alias to relation or a list of [alias, relation] pairs")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Relations, M::Error> {
                let mut out = Relations::new();
                while let Some((alias, relation)) = access.next_entry::<String, String>()? {
                    out.insert(alias, relation);
                }
                Ok(out)
            }

            fn visit_seq<S: SeqAccess<'de>>(self, mut access: S) -> Result<Relations, S::Error> {
                let mut out = Relations::new();
                while let Some((alias, relation)) = access.next_element::<(String, String)>()? {
                    out.insert(alias, relation);
                }
                Ok(out)
            }
        }

        deserializer.deserialize_any(RelationsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let rels = Relations::new().with("z", "t_z").with("a", "t_a").with("m", "t_m");
        assert_eq!(rels.aliases().collect::<Vec<_>>(), ["z", "a", "m"]);
    }

    #[test]
    fn reinsert_replaces_in_place() {
        let mut rels = Relations::from([("r1", "tableA"), ("r2", "tableB")]);
        assert_eq!(rels.insert("r1", "tableC"), Some("tableA".to_string()));
        assert_eq!(
            rels.iter().collect::<Vec<_>>(),
            [("r1", "tableC"), ("r2", "tableB")]
        );
        assert_eq!(rels.len(), 2);
    }

    #[test]
    fn lookup() {
        let rels = Relations::from(vec![("r1".to_string(), "tableA".to_string())]);
        assert_eq!(rels.get("r1"), Some("tableA"));
        assert_eq!(rels.get("r2"), None);
        assert!(!rels.is_empty());
        assert!(Relations::new().is_empty());
    }

    #[test]
    fn borrowed_into_iter() {
        let rels = Relations::from([("a", "x")]);
        let mut seen = Vec::new();
        for (alias, relation) in &rels {
            seen.push(format!("{alias}={relation}"));
        }
        assert_eq!(seen, ["a=x"]);
    }

    #[derive(Deserialize)]
    struct Doc {
        relations: Relations,
    }

    #[test]
    fn deserialize_pairs_keep_order() {
        let doc: Doc =
            toml::from_str(r#"relations = [["zeta", "t.z"], ["alpha", "t.a"]]"#).unwrap();
        assert_eq!(
            doc.relations.iter().collect::<Vec<_>>(),
            [("zeta", "t.z"), ("alpha", "t.a")]
        );
    }

    #[test]
    fn deserialize_table() {
        let doc: Doc = toml::from_str("[relations]\nr1 = \"tableA\"\nr2 = \"tableB\"\n").unwrap();
        assert_eq!(doc.relations.get("r1"), Some("tableA"));
        assert_eq!(doc.relations.get("r2"), Some("tableB"));
    }

    #[test]
    fn deserialize_table_keeps_written_order() {
        let doc: Doc =
            toml::from_str("[relations]\nzeta = \"t.z\"\nalpha = \"t.a\"\nmid = \"t.m\"\n")
                .unwrap();
        assert_eq!(
            doc.relations.aliases().collect::<Vec<_>>(),
            ["zeta", "alpha", "mid"]
        );
    }

    #[test]
    fn serialize_as_table() {
        let rels = Relations::from([("r1", "tableA")]);
        let mut doc = toml::Table::new();
        doc.insert(
            "relations".to_string(),
            toml::Value::try_from(&rels).unwrap(),
        );
        let out = toml::to_string(&doc).unwrap();
        assert!(out.contains("r1 = \"tableA\""));
    }
}
