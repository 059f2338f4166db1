// Bindkit Binding Tables
// Final trigger -> action lookup tables with last-definition-wins semantics

use indexmap::IndexMap;

use crate::action::Action;
use crate::definition::{BindingDefinition, KeyDefinition};
use crate::kitten::KittenAliases;
use crate::modifier::ModMask;
use crate::mouse::{MouseEvent, MouseMapping};
use crate::sequence::SequenceTail;
use crate::trigger::Trigger;

/// Errors raised when committing a binding to a table
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    #[error("Binding {0} still uses the primary modifier placeholder")]
    Unresolved(String),

    #[error("Binding {0} has no key code")]
    InvalidKey(String),
}

/// Resolved key and mouse bindings, in definition order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BindingTable {
    keys: IndexMap<Trigger, Action>,
    sequences: IndexMap<Trigger, IndexMap<SequenceTail, Action>>,
    mouse: IndexMap<MouseEvent, Action>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve and insert definitions in order; later definitions win
    pub fn build<K, M>(
        definitions: K,
        mouse_mappings: M,
        primary: ModMask,
        aliases: &KittenAliases,
    ) -> Self
    where
        K: IntoIterator<Item = KeyDefinition>,
        M: IntoIterator<Item = MouseMapping>,
    {
        let mut table = Self::new();
        for mut definition in definitions {
            definition.resolve_kitten_aliases(aliases);
            definition.resolve(primary);
            if let Err(err) = table.insert_key(definition) {
                log::warn!("{}", err);
            }
        }
        for mut mapping in mouse_mappings {
            mapping.resolve_kitten_aliases(aliases);
            mapping.resolve(primary);
            if let Err(err) = table.insert_mouse(mapping) {
                log::warn!("{}", err);
            }
        }
        log::debug!(
            "Built binding table: {} keys, {} sequences, {} mouse actions",
            table.key_count(),
            table.sequence_count(),
            table.mouse_count()
        );
        table
    }

    /// Commit a resolved key definition.
    ///
    /// A single-key binding replaces any sequence rooted at its trigger and a
    /// sequence replaces any single-key binding on its first trigger. A
    /// `no_op` action removes the binding instead.
    pub fn insert_key(&mut self, definition: KeyDefinition) -> Result<(), BindingError> {
        if !definition.is_resolved() {
            return Err(BindingError::Unresolved(definition.shortcut()));
        }
        if !definition.has_valid_keys() {
            return Err(BindingError::InvalidKey(definition.shortcut()));
        }

        let head = *definition.trigger();
        let action = definition.action().clone();

        if !definition.is_sequence() {
            self.sequences.shift_remove(&head);
            if action.is_no_op() {
                self.keys.shift_remove(&head);
            } else {
                self.keys.insert(head, action);
            }
            return Ok(());
        }

        let tail: SequenceTail = definition.rest().iter().copied().collect();
        self.keys.shift_remove(&head);
        if action.is_no_op() {
            if let Some(tails) = self.sequences.get_mut(&head) {
                tails.shift_remove(&tail);
                if tails.is_empty() {
                    self.sequences.shift_remove(&head);
                }
            }
        } else {
            self.sequences.entry(head).or_default().insert(tail, action);
        }
        Ok(())
    }

    /// Commit a resolved mouse mapping; `no_op` removes the binding
    pub fn insert_mouse(&mut self, mapping: MouseMapping) -> Result<(), BindingError> {
        let event = mapping.trigger();
        if !mapping.is_resolved() {
            return Err(BindingError::Unresolved(event.to_string()));
        }
        if mapping.action.is_no_op() {
            self.mouse.shift_remove(&event);
        } else {
            self.mouse.insert(event, mapping.action);
        }
        Ok(())
    }

    pub fn key_action(&self, trigger: &Trigger) -> Option<&Action> {
        self.keys.get(trigger)
    }

    /// True when `trigger` starts at least one sequence
    pub fn starts_sequence(&self, trigger: &Trigger) -> bool {
        self.sequences.contains_key(trigger)
    }

    pub fn sequence_action(&self, head: &Trigger, tail: &[Trigger]) -> Option<&Action> {
        self.sequences.get(head)?.get(tail)
    }

    pub fn mouse_action(&self, event: &MouseEvent) -> Option<&Action> {
        self.mouse.get(event)
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Number of distinct sequences across all heads
    pub fn sequence_count(&self) -> usize {
        self.sequences.values().map(IndexMap::len).sum()
    }

    pub fn mouse_count(&self) -> usize {
        self.mouse.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.sequences.is_empty() && self.mouse.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = (&Trigger, &Action)> {
        self.keys.iter()
    }

    /// Every sequence as (head, tail, action)
    pub fn sequences(&self) -> impl Iterator<Item = (&Trigger, &[Trigger], &Action)> {
        self.sequences.iter().flat_map(|(head, tails)| {
            tails
                .iter()
                .map(move |(tail, action)| (head, tail.as_slice(), action))
        })
    }

    pub fn mouse(&self) -> impl Iterator<Item = (&MouseEvent, &Action)> {
        self.mouse.iter()
    }
}
