//! dv-spells: spell listing and description for the delve roguelike
//!
//! Pure presentation logic with no I/O: given a spellbook item or the
//! player's knowledge of a monster, build letter-labelled, styled spell
//! listings for a renderer to draw. Spell mechanics, monster AI, and
//! rendering live elsewhere; this crate owns the listing data model and
//! its layout decisions.

pub mod book;
pub mod describe;
pub mod letters;
pub mod monster;
pub mod spell;
pub mod style;

pub use book::{Book, BookItem, Owner, Spellset, item_spellset};
pub use describe::{
    PlayerView, RenderContext, describe_item_spells, describe_monster_spells,
    describe_spellset, effect_string, range_string, spell_entry_colour, terse_spell_list,
};
pub use letters::{BLANK_LETTER, LetterMap, assign_letters, flattened_spells};
pub use monster::{AbilityType, MonsterView, Pronoun, SpellSlot, monster_spellset};
pub use spell::{Dice, LOS_RADIUS, SpellFlags, SpellId, SpellSchools};
pub use style::{Colour, Span, StyledLine};
