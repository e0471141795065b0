//! Player-visible monster spell knowledge
//!
//! Builds the labelled books shown in a monster's description from what
//! the player knows about its spells. Grouping is by ability type, in a
//! fixed listing order, with a header sentence per group.

use serde::{Deserialize, Serialize};

use crate::book::{Book, Spellset};
use crate::spell::{SpellFlags, SpellId};

/// How a monster produces a group of its spells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityType {
    Natural,
    Vocal,
    Magical,
    Priest,
    Wizard,
}

impl AbilityType {
    /// Listing order of ability groupings in a monster description.
    pub const ALL: [AbilityType; 5] = [
        AbilityType::Natural,
        AbilityType::Vocal,
        AbilityType::Magical,
        AbilityType::Priest,
        AbilityType::Wizard,
    ];

    /// Descriptor used in non-wizard group headers.
    const fn descriptor(self) -> &'static str {
        match self {
            AbilityType::Natural | AbilityType::Vocal => "natural",
            AbilityType::Magical => "magical",
            AbilityType::Priest => "divine",
            AbilityType::Wizard => "arcane",
        }
    }

    const fn silencable(self) -> bool {
        matches!(
            self,
            AbilityType::Wizard | AbilityType::Priest | AbilityType::Vocal
        )
    }

    const fn antimagicable(self) -> bool {
        matches!(self, AbilityType::Wizard | AbilityType::Magical)
    }

    /// ", which are affected by ..." clause. Empty for natural abilities.
    fn vulnerability_clause(self) -> String {
        if self == AbilityType::Natural {
            return String::new();
        }
        debug_assert!(self.silencable() || self.antimagicable());
        let core = if !self.antimagicable() {
            "silence"
        } else if self.silencable() {
            "silence and antimagic"
        } else {
            // the antimagic-but-not-silence case gets named in full
            "antimagic (but not silence)"
        };
        format!(", which are affected by {core}")
    }
}

/// Subjective pronoun for a monster, with grammatical plurality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pronoun {
    It,
    He,
    She,
    They,
}

impl Pronoun {
    pub const fn subjective(self) -> &'static str {
        match self {
            Pronoun::It => "it",
            Pronoun::He => "he",
            Pronoun::She => "she",
            Pronoun::They => "they",
        }
    }

    pub const fn is_plural(self) -> bool {
        matches!(self, Pronoun::They)
    }
}

/// One spell the monster may cast, and how it produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellSlot {
    pub spell: SpellId,
    pub ability: AbilityType,
}

/// What the player knows about one monster, as far as spell display
/// needs: identity, casting strength, and its spell slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterView {
    pub name: String,
    pub pronoun: Pronoun,
    /// Base hit dice.
    pub hit_dice: i32,
    /// Hit dice used for real spellcasting; may differ from the base.
    pub spell_hd: i32,
    pub friendly: bool,
    /// Map position, when the monster is on the current level.
    pub pos: Option<(i32, i32)>,
    pub slots: Vec<SpellSlot>,
}

impl MonsterView {
    pub fn has_spells(&self) -> bool {
        !self.slots.is_empty()
    }

    /// Hit dice used when judging one spell's strength. Natural and
    /// vocal abilities scale with base hit dice, real spells with the
    /// caster's spell hit dice.
    pub fn hd_for(&self, spell: SpellId) -> i32 {
        for slot in &self.slots {
            if slot.spell == spell {
                return match slot.ability {
                    AbilityType::Natural | AbilityType::Vocal => self.hit_dice,
                    _ => self.spell_hd,
                };
            }
        }
        self.spell_hd
    }
}

fn uppercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Header sentence for one ability grouping, e.g.
/// "It has mastered the following spells, which are affected by silence
/// and antimagic:".
fn booktype_header(ability: AbilityType, pronoun: Pronoun) -> String {
    let subject = uppercase_first(pronoun.subjective());
    let vulnerability = ability.vulnerability_clause();

    if ability == AbilityType::Wizard {
        let verb = if pronoun.is_plural() { "have" } else { "has" };
        return format!("{subject} {verb} mastered the following spells{vulnerability}:");
    }

    let verb = if pronoun.is_plural() {
        "possess"
    } else {
        "possesses"
    };
    format!(
        "{subject} {verb} the following {} abilities{vulnerability}:",
        ability.descriptor()
    )
}

fn push_ability_book(mon: &MonsterView, ability: AbilityType, books: &mut Spellset) {
    let spells: Vec<SpellId> = mon
        .slots
        .iter()
        .filter(|slot| slot.ability == ability)
        .map(|slot| slot.spell)
        .collect();
    if spells.is_empty() {
        return;
    }

    let mut book = Book {
        label: booktype_header(ability, mon.pronoun),
        spells,
    };

    // a summoner that can abjure lists Abjuration alongside its summons
    if book
        .spells
        .iter()
        .any(|spell| spell.flags().contains(SpellFlags::MONS_ABJURE))
    {
        book.spells.push(SpellId::Abjuration);
    }

    books.push(book);
}

/// The spells potentially castable by a monster, as far as the player
/// knows: one labelled book per ability grouping present, in fixed
/// listing order.
pub fn monster_spellset(mon: &MonsterView) -> Spellset {
    let mut books = Vec::new();
    for ability in AbilityType::ALL {
        push_ability_book(mon, ability, &mut books);
    }
    debug_assert!(books.is_empty() == !mon.has_spells());
    books
}
