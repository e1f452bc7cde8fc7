use std::borrow::Cow;
use std::collections::BTreeMap;

/// Alias definitions for the session. Expansion is a single pass over the
/// first word only; the replacement text is re-tokenized by the caller.
#[derive(Clone, Debug, Default)]
pub struct AliasStore {
    aliases: BTreeMap<String, String>,
}

impl AliasStore {
    pub fn new() -> Self {
        Self {
            aliases: BTreeMap::new(),
        }
    }

    pub fn define(&mut self, name: &str, expansion: &str) {
        self.aliases
            .insert(name.to_string(), expansion.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.aliases.keys().map(String::as_str)
    }

    pub fn expand_first_word<'a>(&'a self, command: &'a str) -> Cow<'a, str> {
        let mut parts: Vec<&str> = command.split_whitespace().collect();
        if let Some(first_word) = parts.first() {
            if let Some(expansion) = self.get(first_word) {
                parts[0] = expansion;
                return Cow::Owned(parts.join(" "));
            }
        }
        Cow::Borrowed(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_get() {
        let mut store = AliasStore::new();
        store.define("ll", "ls -la");
        assert_eq!(store.get("ll"), Some("ls -la"));
    }

    #[test]
    fn test_expand_first_word() {
        let mut store = AliasStore::new();
        store.define("ll", "ls -la");
        assert_eq!(store.expand_first_word("ll /home"), "ls -la /home");
    }

    #[test]
    fn test_only_first_word_expands() {
        let mut store = AliasStore::new();
        store.define("ll", "ls -la");
        assert_eq!(store.expand_first_word("echo ll"), "echo ll");
    }

    #[test]
    fn test_no_expansion_borrows() {
        let store = AliasStore::new();
        let command = "ls -l";
        let expanded = store.expand_first_word(command);
        assert!(matches!(expanded, Cow::Borrowed(_)));
        assert_eq!(expanded, command);
    }

    #[test]
    fn test_redefinition_wins() {
        let mut store = AliasStore::new();
        store.define("g", "git");
        store.define("g", "grep");
        assert_eq!(store.get("g"), Some("grep"));
    }
}
