//! Spell listing description
//!
//! Builds the styled lines shown when examining a spellbook or a
//! monster's abilities. All formerly-ambient view state (live game,
//! viewer position, the player's spell knowledge) arrives through an
//! explicit [`RenderContext`].

use hashbrown::HashSet;

use crate::book::{Book, BookItem, Owner, Spellset, item_spellset};
use crate::letters::{LetterMap, assign_letters};
use crate::monster::{MonsterView, monster_spellset};
use crate::spell::{self, SpellFlags, SpellId};
use crate::style::{Colour, Span, StyledLine, chop_pad};

/// Width of the name cell, including any effect and range annotation.
const NAME_COLUMN: usize = 30;

/// Width of the schools column in a book table.
const SCHOOL_COLUMN: usize = 30;

/// The viewing player's spell knowledge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerView {
    /// Spells currently memorised.
    pub memorised: HashSet<SpellId>,
    /// Spells in the player's library.
    pub library: HashSet<SpellId>,
    /// Spells this character can never learn.
    pub unlearnable: HashSet<SpellId>,
    /// Spells the player's god forbids. The religion layer computes
    /// this; display only reads it.
    pub forbidden: HashSet<SpellId>,
    pub experience_level: u8,
    /// Spell levels still free for memorisation.
    pub spell_levels_free: u8,
    /// Willpower, for hex chance annotations.
    pub willpower: i32,
    pub hex_immune: bool,
}

/// View state for one description request.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext<'a> {
    /// A live game is in progress. Out-of-game description (morgue
    /// files, lookup screens) drops colours and the Known column.
    pub in_game: bool,
    /// The viewer's map position, when on the subject's level.
    pub viewer_pos: Option<(i32, i32)>,
    pub player: Option<&'a PlayerView>,
}

impl<'a> RenderContext<'a> {
    /// The player's knowledge, if a live game is being viewed.
    fn live_player(&self) -> Option<&'a PlayerView> {
        if self.in_game { self.player } else { None }
    }
}

/// Colour for a spell entry in a listing.
///
/// Monster listings and out-of-game views stay in the body colour; book
/// entries are coloured by what the viewing player could do with the
/// spell.
pub fn spell_entry_colour(spell: SpellId, owner: Owner, ctx: &RenderContext) -> Colour {
    let Some(player) = ctx.live_player() else {
        return Colour::LightGrey;
    };
    if owner.item().is_none() {
        return Colour::LightGrey;
    }

    if player.memorised.contains(&spell) {
        return Colour::White;
    }
    if player.unlearnable.contains(&spell)
        || player.experience_level < spell.level()
        || player.spell_levels_free < spell.level()
    {
        return Colour::DarkGrey;
    }
    if player.forbidden.contains(&spell) {
        return Colour::LightRed;
    }
    Colour::LightBlue
}

fn grid_distance(a: (i32, i32), b: (i32, i32)) -> i32 {
    (a.0 - b.0).abs().max((a.1 - b.1).abs())
}

/// Chance, in percent, that a hex from a caster of the given hit dice
/// lands through the viewer's willpower.
fn hex_chance(hd: i32, willpower: i32) -> i32 {
    let power = spell::power_for_hd(hd);
    let chance = 100 * power / (power + 2 * willpower.max(0) + 1);
    chance.clamp(2, 100)
}

/// Range annotation for a monster's spell: "(N)", light red when the
/// viewer is inside the spell's reach. Books and self-enchantments have
/// none.
pub fn range_string(spell: SpellId, owner: Owner, ctx: &RenderContext) -> Option<Span> {
    let mon = owner.monster()?;
    if spell.flags().contains(SpellFlags::SELF_ENCH) {
        return None;
    }
    let range = spell::range(spell, spell::power_for_hd(mon.hd_for(spell)));
    if range <= 0 {
        return None;
    }

    let in_range = ctx.in_game
        && match (ctx.viewer_pos, mon.pos) {
            (Some(viewer), Some(mon_pos)) => grid_distance(viewer, mon_pos) <= range,
            _ => false,
        };
    let colour = if in_range {
        Colour::LightRed
    } else {
        Colour::LightGrey
    };
    Some(Span::new(format!("({range})"), colour))
}

/// Effect annotation for a monster's spell: a hex chance for
/// willpower-checked spells, damage dice otherwise. Books have none.
pub fn effect_string(spell: SpellId, owner: Owner, ctx: &RenderContext) -> Option<Span> {
    let mon = owner.monster()?;
    let hd = mon.hd_for(spell);
    if hd == 0 {
        return None;
    }

    if spell.flags().contains(SpellFlags::WL_CHECK) {
        // hex chances only mean anything against the viewer
        if mon.friendly {
            return None;
        }
        let player = ctx.live_player()?;
        if player.hex_immune {
            return Some(Span::plain("(immune)"));
        }
        return Some(Span::plain(format!(
            "({}%)",
            hex_chance(hd, player.willpower)
        )));
    }

    if spell == SpellId::Smiting {
        return Some(Span::plain("7-17"));
    }

    let dam = spell::damage(spell, spell::power_for_hd(hd))?;
    if dam.is_zero() {
        return None;
    }
    let volley = spell::volley_size(spell).unwrap_or("");
    Some(Span::new(
        format!("({volley}{dam})"),
        spell::flavour_colour(spell),
    ))
}

/// Append the lines for one book of the set.
fn describe_book(
    book: &Book,
    letters: &LetterMap,
    owner: Owner,
    ctx: &RenderContext,
    out: &mut Vec<StyledLine>,
) {
    if !book.label.is_empty() {
        out.push(StyledLine::new());
        out.push(StyledLine::from(Span::plain(book.label.clone())));
    }

    // column headers only apply to the book table
    if owner.item().is_some() {
        let mut header =
            String::from(" Spells                            Type                      Level");
        if ctx.live_player().is_some() {
            header.push_str("       Known");
        }
        out.push(StyledLine::from(Span::plain(header)));
    }

    let double_column = owner.double_column();
    let mut line = StyledLine::new();
    let mut left_cell = true;

    for &spell in &book.spells {
        let colour = spell_entry_colour(spell, owner, ctx);
        let effect = effect_string(spell, owner, ctx);
        let range = range_string(spell, owner, ctx);

        let effect_len = effect.as_ref().map_or(0, |span| span.text.chars().count());
        let range_len = if range.is_some() { 3 } else { 0 };
        let gap = usize::from(effect_len > 0 && range_len > 0);
        let name_width = NAME_COLUMN.saturating_sub(effect_len + range_len + gap);

        line.push_str(" ", Colour::LightGrey);
        line.push_str(
            &format!("{} - ", letters.get_or_blank(spell)),
            colour,
        );
        line.push_str(&chop_pad(spell.name(), name_width), colour);
        if let Some(effect) = effect {
            line.push(effect);
        }
        if gap == 1 {
            line.push_str(" ", Colour::LightGrey);
        }
        if let Some(range) = range {
            line.push(range);
        }

        if double_column {
            // two spells per line, labelled down the columns
            if left_cell {
                line.push_str("    ", Colour::LightGrey);
            } else {
                out.push(std::mem::take(&mut line));
            }
            left_cell = !left_cell;
            continue;
        }

        line.push_str(
            &chop_pad(&spell.schools().joined_names(), SCHOOL_COLUMN),
            colour,
        );
        line.push_str(&spell.level().to_string(), colour);
        if let Some(player) = ctx.live_player() {
            let known = if player.library.contains(&spell) {
                "         yes"
            } else {
                "          no"
            };
            line.push_str(known, colour);
        }
        out.push(std::mem::take(&mut line));
    }

    // flush a half-filled final row of a two-column table
    if double_column && !line.is_empty() {
        out.push(line);
    }
}

/// Describe a set of spells, with display letters assigned to match the
/// owner's layout.
pub fn describe_spellset(
    spells: &Spellset,
    owner: Owner,
    ctx: &RenderContext,
) -> Vec<StyledLine> {
    let letters = assign_letters(spells, owner.double_column());
    let mut out = Vec::new();
    for book in spells {
        describe_book(book, &letters, owner, ctx, &mut out);
    }
    out
}

/// Full listing for a physical book item.
pub fn describe_item_spells(item: &BookItem, ctx: &RenderContext) -> Vec<StyledLine> {
    let spells = item_spellset(item);
    describe_spellset(&spells, Owner::Item(item), ctx)
}

/// Full listing for a monster's spells and abilities.
pub fn describe_monster_spells(mon: &MonsterView, ctx: &RenderContext) -> Vec<StyledLine> {
    let spells = monster_spellset(mon);
    describe_spellset(&spells, Owner::Monster(mon), ctx)
}

/// One-line summary of a book's contents, for shop and pickup messages.
pub fn terse_spell_list(item: &BookItem) -> String {
    let descs: Vec<String> = item
        .spells
        .iter()
        .map(|spell| {
            format!(
                "{} (L{} {})",
                spell.name(),
                spell.level(),
                spell.schools().joined_names()
            )
        })
        .collect();
    format!("Spells: {}", descs.join(", "))
}
