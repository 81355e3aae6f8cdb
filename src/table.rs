use indexmap::IndexMap;
use once_cell::sync::Lazy;

// Symbols carrying U+FE0F are spelled out so the selector is visible.
const SOURCE_ENTRIES: &[(&str, &str)] = &[
    ("✅", "[OK]"),
    ("❌", "[FAIL]"),
    ("✓", "[OK]"),
    ("✗", "[FAIL]"),
    ("⚡", "[READY]"),
    ("🚀", "[START]"),
    ("🔍", "[SEARCH]"),
    ("\u{27A1}\u{FE0F}", "->"),
    ("\u{2B05}\u{FE0F}", "<-"),
    ("🎯", "[TARGET]"),
    ("📍", "[LOC]"),
    ("🔧", "[TOOL]"),
    ("📊", "[STATS]"),
    ("📋", "[LIST]"),
    ("\u{25B6}\u{FE0F}", "[PLAY]"),
    ("📖", "[DOC]"),
    ("👋", "[HELLO]"),
    ("📡", "[NET]"),
    ("✨", "*"),
    ("🔥", "[CRITICAL]"),
    ("💡", "[INFO]"),
    ("🚧", "[WORK-IN-PROGRESS]"),
    ("🧪", "[TEST]"),
    ("🔒", "[SECURE]"),
    ("🔓", "[UNSECURE]"),
    ("🔗", "[LINK]"),
    ("\u{1F6E0}\u{FE0F}", "[FIX]"),
    ("📦", "[PKG]"),
    ("🚀", "[DEPLOY]"),
    ("🚨", "[ALERT]"),
    ("🧹", "[CLEANUP]"),
    ("📝", "[LOG]"),
    ("\u{1F6E1}\u{FE0F}", "[GUARD]"),
    ("🤖", "[BOT]"),
    ("🐛", "[BUG]"),
    ("\u{1F3F7}\u{FE0F}", "[TAG]"),
    ("🎨", "[UI]"),
    ("🏁", "[DONE]"),
    ("🏥", "[HEALTH]"),
    ("🏠", "[HOME]"),
    ("\u{1F3D7}\u{FE0F}", "[BUILD]"),
    ("🚢", "[SHIP]"),
    ("🧬", "[GEN]"),
    ("🧪", "[TEST]"),
    ("\u{1F321}\u{FE0F}", "[METRIC]"),
];

static BUILTIN: Lazy<ReplacementTable> =
    Lazy::new(|| ReplacementTable::from_entries(SOURCE_ENTRIES.iter().copied()));

/// Ordered symbol -> ASCII substitute mapping.
///
/// Built incrementally: a repeated symbol keeps the slot of its first
/// definition and takes the value of its last one.
#[derive(Debug, Clone, Default)]
pub struct ReplacementTable {
    entries: IndexMap<&'static str, &'static str>,
}

/// Result of running the table over one piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub content: String,
    /// Symbols present in the input, in table order.
    pub matched: Vec<&'static str>,
}

impl Replacement {
    pub fn is_changed(&self) -> bool {
        !self.matched.is_empty()
    }
}

impl ReplacementTable {
    pub fn builtin() -> &'static ReplacementTable {
        &BUILTIN
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        let mut map = IndexMap::new();
        for (symbol, replacement) in entries {
            map.insert(symbol, replacement);
        }
        Self { entries: map }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    fn get(&self, symbol: &str) -> Option<&'static str> {
        self.entries.get(symbol).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }

    /// Replace every occurrence of every symbol, one literal pass per entry.
    pub fn apply(&self, text: &str) -> Replacement {
        let mut content = text.to_owned();
        let mut matched = Vec::new();

        for (symbol, replacement) in self.iter() {
            if text.contains(symbol) {
                matched.push(symbol);
                content = content.replace(symbol, replacement);
            }
        }

        Replacement { content, matched }
    }
}
