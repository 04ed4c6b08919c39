use std::collections::BTreeMap;

/// Named notes kept for the session. Never consulted during dispatch.
#[derive(Debug, Default, Clone)]
pub struct AliasStore {
    aliases: BTreeMap<Box<str>, Box<str>>,
}

impl AliasStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an owned copy of the pair, replacing any earlier value.
    pub fn put(&mut self, name: &str, value: &str) {
        self.aliases.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(|s| &**s)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (&**k, &**v))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
