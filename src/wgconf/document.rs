//! Parsed WireGuard config model

pub const INTERFACE: &str = "Interface";
pub const PEER: &str = "Peer";

/// Ordered `key -> value` pairs of one section.
///
/// Inserting an existing key replaces its value but keeps the key where it
/// was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entries {
    pairs: Vec<(String, String)>,
}

impl Entries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Entries {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut entries = Entries::new();
        for (k, v) in iter {
            entries.insert(k, v);
        }
        entries
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub entries: Entries,
}

/// Sections of one config file, in file order.
///
/// Section names are unique: a name that appears twice in the source keeps
/// the position of its first occurrence and the entries of its last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    sections: Vec<Section>,
}

impl ConfigDocument {
    pub(crate) fn set_section(&mut self, name: String, entries: Entries) {
        match self.sections.iter_mut().find(|s| s.name == name) {
            Some(existing) => existing.entries = entries,
            None => self.sections.push(Section { name, entries }),
        }
    }

    pub fn section(&self, name: &str) -> Option<&Entries> {
        self.sections.iter().find(|s| s.name == name).map(|s| &s.entries)
    }

    pub fn interface(&self) -> Option<&Entries> {
        self.section(INTERFACE)
    }

    pub fn peer(&self) -> Option<&Entries> {
        self.section(PEER)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_overwrite_keeps_first_position() {
        let mut entries = Entries::new();
        entries.insert("PublicKey", "a");
        entries.insert("Endpoint", "1.2.3.4:51820");
        entries.insert("PublicKey", "b");

        let pairs: Vec<_> = entries.iter().collect();
        assert_eq!(pairs, vec![("PublicKey", "b"), ("Endpoint", "1.2.3.4:51820")]);
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let entries: Entries = [("PublicKey", "a"), ("publickey", "b")].into_iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.get("PublicKey"), Some("a"));
        assert_eq!(entries.get("publickey"), Some("b"));
    }

    #[test]
    fn test_repeated_section_replaces_in_place() {
        let mut doc = ConfigDocument::default();
        doc.set_section(PEER.into(), [("PublicKey", "first")].into_iter().collect());
        doc.set_section(INTERFACE.into(), [("Address", "10.0.0.2/32")].into_iter().collect());
        doc.set_section(PEER.into(), [("PublicKey", "second")].into_iter().collect());

        let names: Vec<_> = doc.sections().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec![PEER, INTERFACE]);
        assert_eq!(doc.peer().and_then(|p| p.get("PublicKey")), Some("second"));
    }
}
