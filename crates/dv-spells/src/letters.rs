//! Spellset flattening and display-letter assignment
//!
//! A monster listing prints two spells per physical line but labels them
//! as if reading down the left column and then down the right, so letter
//! assignment is decoupled from emission order.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::book::Spellset;
use crate::spell::SpellId;

/// Letter shown for a spell that did not receive one (more spells than
/// letters in the alphabet).
pub const BLANK_LETTER: char = ' ';

/// Every distinct spell in the set exactly once, in the order of its
/// first occurrence scanning books in order and, within a book, spells
/// in order.
pub fn flattened_spells(spells: &Spellset) -> Vec<SpellId> {
    // find unique spells
    let mut pending: HashSet<SpellId> = HashSet::new();
    for book in spells {
        for &spell in &book.spells {
            pending.insert(spell);
        }
    }

    // list spells in original order; removing on first emission makes
    // later occurrences skip
    let mut flat = Vec::with_capacity(pending.len());
    for book in spells {
        for &spell in &book.spells {
            if pending.remove(&spell) {
                flat.push(spell);
            }
        }
    }
    flat
}

/// Mapping from spell to display letter, one entry per lettered spell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterMap {
    entries: Vec<(SpellId, char)>,
}

impl LetterMap {
    pub fn get(&self, spell: SpellId) -> Option<char> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == spell)
            .map(|&(_, letter)| letter)
    }

    /// Letter for the spell, or a blank when the alphabet ran out.
    pub fn get_or_blank(&self, spell: SpellId) -> char {
        self.get(spell).unwrap_or(BLANK_LETTER)
    }

    pub fn entries(&self) -> &[(SpellId, char)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Assign display letters to the unique spells in the set.
///
/// Single-column sets are lettered in flattened order. Double-column
/// sets letter the even flattened indices first, then the odd ones, the
/// letter sequence continuing across the boundary. Letters come from a
/// bounded 'a'..='z' sequence; spells beyond it stay unmapped.
pub fn assign_letters(spells: &Spellset, double_column: bool) -> LetterMap {
    let flat = flattened_spells(spells);
    let order: Vec<SpellId> = if double_column {
        flat.iter()
            .copied()
            .step_by(2)
            .chain(flat.iter().copied().skip(1).step_by(2))
            .collect()
    } else {
        flat
    };

    let mut letters = 'a'..='z';
    let mut entries = Vec::with_capacity(order.len());
    for spell in order {
        let Some(letter) = letters.next() else {
            break;
        };
        entries.push((spell, letter));
    }
    LetterMap { entries }
}
