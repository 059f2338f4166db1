// Bindkit Kitten Aliases
// Short names for kitten invocations, expanded once per action

use indexmap::IndexMap;

use crate::action::Action;
use crate::util::split_max;

/// Alias name -> expansion words (kitten name first, then default arguments)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KittenAliases {
    aliases: IndexMap<String, Vec<String>>,
}

impl KittenAliases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define or redefine an alias; the latest definition wins
    pub fn insert(&mut self, name: impl Into<String>, expansion: Vec<String>) {
        self.aliases.insert(name.into(), expansion);
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.aliases.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Parse the value of a `kitten_alias` directive: `name kitten [args...]`
pub fn parse_kitten_alias(val: &str) -> Option<(String, Vec<String>)> {
    let mut parts = split_max(val, 2).into_iter().map(str::to_string);
    let name = parts.next()?;
    let expansion: Vec<String> = parts.collect();
    if expansion.is_empty() {
        return None;
    }
    Some((name, expansion))
}

/// Expand a kitten alias named by the action's first argument.
///
/// The first argument is the kitten name and the second (if any) its
/// argument string. A matching alias replaces the name and prepends its
/// default arguments. Returns `None` when nothing changes; the substituted
/// name is not expanded again.
pub fn expand_kitten_alias(action: &Action, aliases: &KittenAliases) -> Option<Action> {
    let kitten = action.args().first()?;
    let expansion = aliases.get(kitten)?;
    let (name, defaults) = expansion.split_first()?;

    let rest = action.args().get(1).map(String::as_str).unwrap_or("");
    let mut words: Vec<&str> = defaults.iter().map(String::as_str).collect();
    words.push(rest);
    let rest = words.join(" ").trim().to_string();

    Some(action.with_args(vec![name.clone(), rest]))
}
