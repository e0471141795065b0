//! Spellbooks and spellsets
//!
//! A spellset is the ordered collection of "books" shown when examining
//! one subject: a single blank-labelled book for a physical item, or one
//! labelled book per ability grouping for a monster.

use serde::{Deserialize, Serialize};

use crate::monster::MonsterView;
use crate::spell::SpellId;

/// A named, ordered group of spells: a physical book's contents or one
/// ability-type grouping of a monster's spells. Order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Header text shown above the spell lines. Empty for item books.
    pub label: String,
    pub spells: Vec<SpellId>,
}

/// The full ordered collection of books shown for one subject.
pub type Spellset = Vec<Book>;

/// A physical spellbook item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookItem {
    pub name: String,
    pub spells: Vec<SpellId>,
}

impl BookItem {
    pub fn new(name: impl Into<String>, spells: Vec<SpellId>) -> Self {
        Self {
            name: name.into(),
            spells,
        }
    }

    pub fn has_spells(&self) -> bool {
        !self.spells.is_empty()
    }
}

/// Spellset for a physical book: a single blank-labelled book holding
/// its spells, or empty if the item holds none.
pub fn item_spellset(item: &BookItem) -> Spellset {
    if !item.has_spells() {
        return Vec::new();
    }
    vec![Book {
        label: String::new(),
        spells: item.spells.clone(),
    }]
}

/// Where a spellset came from.
///
/// A physical book is listed in a single annotated column; a monster's
/// aggregated knowledge has no single owning item and is laid out in two
/// columns.
#[derive(Debug, Clone, Copy)]
pub enum Owner<'a> {
    Item(&'a BookItem),
    Monster(&'a MonsterView),
}

impl<'a> Owner<'a> {
    /// Two-column layout applies exactly when no single physical item
    /// owns the set.
    pub fn double_column(&self) -> bool {
        matches!(self, Owner::Monster(_))
    }

    pub fn monster(&self) -> Option<&'a MonsterView> {
        match self {
            Owner::Monster(mon) => Some(mon),
            Owner::Item(_) => None,
        }
    }

    pub fn item(&self) -> Option<&'a BookItem> {
        match self {
            Owner::Item(item) => Some(item),
            Owner::Monster(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_spellset_single_blank_book() {
        let item = BookItem::new(
            "book of Flames",
            vec![SpellId::Foxfire, SpellId::Fireball],
        );
        let spells = item_spellset(&item);
        assert_eq!(spells.len(), 1);
        assert_eq!(spells[0].label, "");
        assert_eq!(spells[0].spells, vec![SpellId::Foxfire, SpellId::Fireball]);
    }

    #[test]
    fn test_item_spellset_empty_item() {
        let item = BookItem::new("blank book", Vec::new());
        assert!(item_spellset(&item).is_empty());
    }

    #[test]
    fn test_owner_double_column() {
        let item = BookItem::new("book of Frost", vec![SpellId::Freeze]);
        assert!(!Owner::Item(&item).double_column());
        assert!(Owner::Item(&item).item().is_some());
        assert!(Owner::Item(&item).monster().is_none());
    }
}
