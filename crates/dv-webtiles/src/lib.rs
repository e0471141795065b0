//! dv-webtiles: structured spell-listing records for the web front end
//!
//! Mirrors the styled terminal listing field-for-field as serializable
//! records; the front end applies its own layout and styling. Letters
//! are already blank-substituted, colours travel as their lowercase
//! names.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use dv_spells::{
    Owner, RenderContext, Spellset, assign_letters, effect_string, range_string,
    spell_entry_colour,
};

/// Record export failures.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not serialize spellset records: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One spell entry of a book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellRecord {
    pub title: String,
    /// Display letter, or a single space when the alphabet ran out.
    pub letter: String,
    /// Lowercase colour name for the entry.
    pub colour: String,
    /// Effect annotation text ("(3d13)", "(34%)"), empty when absent.
    pub effect: String,
    /// Range annotation text ("(5)"), when the spell has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    pub schools: String,
    pub level: u8,
}

/// One book of the spellset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub label: String,
    pub spells: Vec<SpellRecord>,
}

/// Build the records for a spellset, one per book, preserving book
/// order and in-book spell order (duplicates across books included,
/// sharing their letter).
pub fn spellset_records(
    spells: &Spellset,
    owner: Owner,
    ctx: &RenderContext,
) -> Vec<BookRecord> {
    let letters = assign_letters(spells, owner.double_column());
    spells
        .iter()
        .map(|book| BookRecord {
            label: book.label.clone(),
            spells: book
                .spells
                .iter()
                .map(|&spell| SpellRecord {
                    title: spell.name().to_string(),
                    letter: letters.get_or_blank(spell).to_string(),
                    colour: spell_entry_colour(spell, owner, ctx).to_string(),
                    effect: effect_string(spell, owner, ctx)
                        .map(|span| span.text)
                        .unwrap_or_default(),
                    range: range_string(spell, owner, ctx).map(|span| span.text),
                    schools: spell.schools().joined_names(),
                    level: spell.level(),
                })
                .collect(),
        })
        .collect()
}

/// Serialize a spellset's records to JSON.
pub fn write_spellset(
    spells: &Spellset,
    owner: Owner,
    ctx: &RenderContext,
) -> Result<String, ExportError> {
    Ok(serde_json::to_string(&spellset_records(spells, owner, ctx))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dv_spells::monster::{AbilityType, MonsterView, Pronoun, SpellSlot};
    use dv_spells::{BookItem, SpellId, item_spellset, monster_spellset};

    fn lich() -> MonsterView {
        MonsterView {
            name: "lich".to_string(),
            pronoun: Pronoun::It,
            hit_dice: 10,
            spell_hd: 12,
            friendly: false,
            pos: Some((10, 10)),
            slots: vec![
                SpellSlot {
                    spell: SpellId::BoltOfDraining,
                    ability: AbilityType::Wizard,
                },
                SpellSlot {
                    spell: SpellId::Paralyse,
                    ability: AbilityType::Wizard,
                },
                SpellSlot {
                    spell: SpellId::Haste,
                    ability: AbilityType::Wizard,
                },
            ],
        }
    }

    #[test]
    fn test_records_mirror_letters() {
        let mon = lich();
        let spells = monster_spellset(&mon);
        let ctx = RenderContext::default();
        let books = spellset_records(&spells, Owner::Monster(&mon), &ctx);
        assert_eq!(books.len(), 1);
        let spells = &books[0].spells;
        // column-major: evens first, then odds
        assert_eq!(spells[0].letter, "a");
        assert_eq!(spells[1].letter, "c");
        assert_eq!(spells[2].letter, "b");
    }

    #[test]
    fn test_book_records_carry_schools_and_level() {
        let item = BookItem::new("book of Frost", vec![SpellId::ThrowIcicle]);
        let spells = item_spellset(&item);
        let ctx = RenderContext::default();
        let books = spellset_records(&spells, Owner::Item(&item), &ctx);
        let record = &books[0].spells[0];
        assert_eq!(record.title, "Throw Icicle");
        assert_eq!(record.schools, "Conjuration/Ice");
        assert_eq!(record.level, 4);
        assert_eq!(record.colour, "lightgrey");
        assert_eq!(record.effect, "");
        assert!(record.range.is_none());
    }

    #[test]
    fn test_monster_records_carry_effects_and_range() {
        let mon = lich();
        let spells = monster_spellset(&mon);
        let ctx = RenderContext::default();
        let books = spellset_records(&spells, Owner::Monster(&mon), &ctx);
        let bolt = &books[0].spells[0];
        assert!(bolt.effect.starts_with("(3d"));
        assert!(bolt.range.is_some());
        // self-enchantment: no range
        let haste = &books[0].spells[2];
        assert!(haste.range.is_none());
    }

    #[test]
    fn test_write_spellset_is_valid_json() {
        let mon = lich();
        let spells = monster_spellset(&mon);
        let ctx = RenderContext::default();
        let json = write_spellset(&spells, Owner::Monster(&mon), &ctx).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let books = parsed.as_array().unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0]["spells"].as_array().unwrap().len(), 3);
        assert_eq!(books[0]["spells"][0]["letter"], "a");
        // absent range is omitted, not null
        assert!(
            books[0]["spells"][2]
                .as_object()
                .unwrap()
                .get("range")
                .is_none()
        );
    }

    #[test]
    fn test_records_round_trip() {
        let item = BookItem::new(
            "book of Flames",
            vec![SpellId::Foxfire, SpellId::Fireball],
        );
        let spells = item_spellset(&item);
        let ctx = RenderContext::default();
        let books = spellset_records(&spells, Owner::Item(&item), &ctx);
        let json = serde_json::to_string(&books).unwrap();
        let back: Vec<BookRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(books, back);
    }

    #[test]
    fn test_overflow_letter_is_blank_string() {
        let item = BookItem::new(
            "grand grimoire",
            SpellId::all().iter().copied().take(30).collect(),
        );
        let spells = item_spellset(&item);
        let ctx = RenderContext::default();
        let books = spellset_records(&spells, Owner::Item(&item), &ctx);
        assert_eq!(books[0].spells[25].letter, "z");
        assert_eq!(books[0].spells[26].letter, " ");
    }
}
