//! Spell metadata tables
//!
//! Static display data for every spell: names, schools, difficulty
//! levels, behaviour flags, and damage dice. Values here are display
//! data for listings, not combat-authoritative.

use bitflags::bitflags;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::style::Colour;

/// Sight radius; no spell reaches further in a listing.
pub const LOS_RADIUS: i32 = 7;

bitflags! {
    /// Spell school membership.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SpellSchools: u16 {
        const CONJURATION   = 1 << 0;
        const HEXES         = 1 << 1;
        const FIRE          = 1 << 2;
        const ICE           = 1 << 3;
        const AIR           = 1 << 4;
        const EARTH         = 1 << 5;
        const ALCHEMY       = 1 << 6;
        const NECROMANCY    = 1 << 7;
        const SUMMONING     = 1 << 8;
        const TRANSLOCATION = 1 << 9;
    }
}

bitflags! {
    /// Behaviour flags that matter for display.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SpellFlags: u8 {
        /// Resisted by the target's willpower; listed with a hex chance
        /// instead of damage.
        const WL_CHECK = 0x01;
        /// Enchants the caster; never shown with a range.
        const SELF_ENCH = 0x02;
        /// Monsters with this spell can also abjure summons.
        const MONS_ABJURE = 0x04;
    }
}

/// Long school names, in listing order.
const SCHOOL_NAMES: &[(SpellSchools, &str)] = &[
    (SpellSchools::CONJURATION, "Conjuration"),
    (SpellSchools::HEXES, "Hexes"),
    (SpellSchools::FIRE, "Fire"),
    (SpellSchools::ICE, "Ice"),
    (SpellSchools::AIR, "Air"),
    (SpellSchools::EARTH, "Earth"),
    (SpellSchools::ALCHEMY, "Alchemy"),
    (SpellSchools::NECROMANCY, "Necromancy"),
    (SpellSchools::SUMMONING, "Summoning"),
    (SpellSchools::TRANSLOCATION, "Translocation"),
];

impl SpellSchools {
    /// '/'-separated list of school names, e.g. "Conjuration/Fire".
    pub fn joined_names(&self) -> String {
        let mut out = String::new();
        for (flag, name) in SCHOOL_NAMES {
            if !self.contains(*flag) {
                continue;
            }
            if !out.is_empty() {
                out.push('/');
            }
            out.push_str(name);
        }
        out
    }
}

/// Damage dice, displayed as `NdM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice {
    pub num: i32,
    pub size: i32,
}

impl Dice {
    pub const fn new(num: i32, size: i32) -> Self {
        Self { num, size }
    }

    pub const fn is_zero(&self) -> bool {
        self.num == 0 || self.size == 0
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.num, self.size)
    }
}

/// Spell identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum SpellId {
    MagicDart,
    Foxfire,
    Freeze,
    Shock,
    Pain,
    SummonSmallMammal,
    Slow,
    CallImp,
    Blink,
    Confuse,
    StoneArrow,
    Abjuration,
    TeleportOther,
    Haste,
    ThrowIcicle,
    Paralyse,
    AnimateDead,
    Petrify,
    Smiting,
    Fireball,
    VenomBolt,
    LightningBolt,
    Agony,
    BoltOfDraining,
    SummonDemon,
    Banishment,
    Polymorph,
    Invisibility,
    BoltOfFire,
    IronShot,
    ConjureBallLightning,
    CrystalSpear,
    Glaciate,
}

impl SpellId {
    /// Every spell, in definition order.
    pub fn all() -> &'static [SpellId] {
        use SpellId::*;
        &[
            MagicDart,
            Foxfire,
            Freeze,
            Shock,
            Pain,
            SummonSmallMammal,
            Slow,
            CallImp,
            Blink,
            Confuse,
            StoneArrow,
            Abjuration,
            TeleportOther,
            Haste,
            ThrowIcicle,
            Paralyse,
            AnimateDead,
            Petrify,
            Smiting,
            Fireball,
            VenomBolt,
            LightningBolt,
            Agony,
            BoltOfDraining,
            SummonDemon,
            Banishment,
            Polymorph,
            Invisibility,
            BoltOfFire,
            IronShot,
            ConjureBallLightning,
            CrystalSpear,
            Glaciate,
        ]
    }

    /// Display title.
    pub const fn name(&self) -> &'static str {
        match self {
            SpellId::MagicDart => "Magic Dart",
            SpellId::Foxfire => "Foxfire",
            SpellId::Freeze => "Freeze",
            SpellId::Shock => "Shock",
            SpellId::Pain => "Pain",
            SpellId::SummonSmallMammal => "Summon Small Mammal",
            SpellId::Slow => "Slow",
            SpellId::CallImp => "Call Imp",
            SpellId::Blink => "Blink",
            SpellId::Confuse => "Confuse",
            SpellId::StoneArrow => "Stone Arrow",
            SpellId::Abjuration => "Abjuration",
            SpellId::TeleportOther => "Teleport Other",
            SpellId::Haste => "Haste",
            SpellId::ThrowIcicle => "Throw Icicle",
            SpellId::Paralyse => "Paralyse",
            SpellId::AnimateDead => "Animate Dead",
            SpellId::Petrify => "Petrify",
            SpellId::Smiting => "Smiting",
            SpellId::Fireball => "Fireball",
            SpellId::VenomBolt => "Venom Bolt",
            SpellId::LightningBolt => "Lightning Bolt",
            SpellId::Agony => "Agony",
            SpellId::BoltOfDraining => "Bolt of Draining",
            SpellId::SummonDemon => "Summon Demon",
            SpellId::Banishment => "Banishment",
            SpellId::Polymorph => "Polymorph",
            SpellId::Invisibility => "Invisibility",
            SpellId::BoltOfFire => "Bolt of Fire",
            SpellId::IronShot => "Iron Shot",
            SpellId::ConjureBallLightning => "Conjure Ball Lightning",
            SpellId::CrystalSpear => "Crystal Spear",
            SpellId::Glaciate => "Glaciate",
        }
    }

    /// Difficulty level (1-9).
    pub const fn level(&self) -> u8 {
        match self {
            SpellId::MagicDart
            | SpellId::Foxfire
            | SpellId::Freeze
            | SpellId::Shock
            | SpellId::Pain
            | SpellId::SummonSmallMammal => 1,
            SpellId::Slow | SpellId::CallImp | SpellId::Blink => 2,
            SpellId::Confuse
            | SpellId::StoneArrow
            | SpellId::Abjuration
            | SpellId::TeleportOther => 3,
            SpellId::Haste
            | SpellId::ThrowIcicle
            | SpellId::Paralyse
            | SpellId::AnimateDead
            | SpellId::Petrify
            | SpellId::Smiting => 4,
            SpellId::Fireball
            | SpellId::VenomBolt
            | SpellId::LightningBolt
            | SpellId::Agony
            | SpellId::BoltOfDraining
            | SpellId::SummonDemon
            | SpellId::Banishment
            | SpellId::Polymorph => 5,
            SpellId::Invisibility
            | SpellId::BoltOfFire
            | SpellId::IronShot
            | SpellId::ConjureBallLightning => 6,
            SpellId::CrystalSpear => 8,
            SpellId::Glaciate => 9,
        }
    }

    /// School membership.
    pub const fn schools(&self) -> SpellSchools {
        match self {
            SpellId::MagicDart => SpellSchools::CONJURATION,
            SpellId::Foxfire => SpellSchools::CONJURATION.union(SpellSchools::FIRE),
            SpellId::Freeze => SpellSchools::ICE,
            SpellId::Shock => SpellSchools::CONJURATION.union(SpellSchools::AIR),
            SpellId::Pain => SpellSchools::NECROMANCY,
            SpellId::SummonSmallMammal => SpellSchools::SUMMONING,
            SpellId::Slow => SpellSchools::HEXES,
            SpellId::CallImp => SpellSchools::SUMMONING,
            SpellId::Blink => SpellSchools::TRANSLOCATION,
            SpellId::Confuse => SpellSchools::HEXES,
            SpellId::StoneArrow => SpellSchools::CONJURATION.union(SpellSchools::EARTH),
            SpellId::Abjuration => SpellSchools::SUMMONING,
            SpellId::TeleportOther => SpellSchools::TRANSLOCATION,
            SpellId::Haste => SpellSchools::HEXES,
            SpellId::ThrowIcicle => SpellSchools::CONJURATION.union(SpellSchools::ICE),
            SpellId::Paralyse => SpellSchools::HEXES,
            SpellId::AnimateDead => SpellSchools::NECROMANCY,
            SpellId::Petrify => SpellSchools::EARTH.union(SpellSchools::HEXES),
            // divine wrath; not taught by any school
            SpellId::Smiting => SpellSchools::empty(),
            SpellId::Fireball => SpellSchools::CONJURATION.union(SpellSchools::FIRE),
            SpellId::VenomBolt => SpellSchools::CONJURATION.union(SpellSchools::ALCHEMY),
            SpellId::LightningBolt => SpellSchools::CONJURATION.union(SpellSchools::AIR),
            SpellId::Agony => SpellSchools::NECROMANCY,
            SpellId::BoltOfDraining => {
                SpellSchools::CONJURATION.union(SpellSchools::NECROMANCY)
            }
            SpellId::SummonDemon => SpellSchools::SUMMONING,
            SpellId::Banishment => SpellSchools::TRANSLOCATION,
            SpellId::Polymorph => SpellSchools::HEXES.union(SpellSchools::ALCHEMY),
            SpellId::Invisibility => SpellSchools::HEXES,
            SpellId::BoltOfFire => SpellSchools::CONJURATION.union(SpellSchools::FIRE),
            SpellId::IronShot => SpellSchools::CONJURATION.union(SpellSchools::EARTH),
            SpellId::ConjureBallLightning => {
                SpellSchools::CONJURATION.union(SpellSchools::AIR)
            }
            SpellId::CrystalSpear => SpellSchools::CONJURATION.union(SpellSchools::EARTH),
            SpellId::Glaciate => SpellSchools::CONJURATION.union(SpellSchools::ICE),
        }
    }

    /// Display-relevant behaviour flags.
    pub const fn flags(&self) -> SpellFlags {
        match self {
            SpellId::Pain
            | SpellId::Slow
            | SpellId::Confuse
            | SpellId::TeleportOther
            | SpellId::Paralyse
            | SpellId::Petrify
            | SpellId::Agony
            | SpellId::Banishment
            | SpellId::Polymorph => SpellFlags::WL_CHECK,
            SpellId::Blink | SpellId::Haste | SpellId::Invisibility => SpellFlags::SELF_ENCH,
            SpellId::CallImp | SpellId::SummonDemon => SpellFlags::MONS_ABJURE,
            _ => SpellFlags::empty(),
        }
    }
}

/// Casting power of a monster with the given hit dice.
pub const fn power_for_hd(hd: i32) -> i32 {
    hd * 12
}

/// Display damage for a spell cast at the given power. `None` for
/// spells whose effect is not expressed as dice.
pub fn damage(spell: SpellId, power: i32) -> Option<Dice> {
    let dice = match spell {
        SpellId::MagicDart => Dice::new(3, 4 + power / 25),
        SpellId::Foxfire => Dice::new(1, 2 + power / 6),
        SpellId::Freeze => Dice::new(1, 3 + power / 8),
        SpellId::Shock => Dice::new(3, 3 + power / 20),
        SpellId::StoneArrow => Dice::new(3, 5 + power / 10),
        SpellId::ThrowIcicle => Dice::new(3, 7 + power / 8),
        SpellId::Fireball => Dice::new(3, 8 + power / 6),
        SpellId::VenomBolt => Dice::new(3, 6 + power / 10),
        SpellId::LightningBolt => Dice::new(3, 6 + power / 8),
        SpellId::BoltOfDraining => Dice::new(3, 6 + power / 10),
        SpellId::BoltOfFire => Dice::new(3, 8 + power / 8),
        SpellId::IronShot => Dice::new(9, 3 + power / 12),
        SpellId::ConjureBallLightning => Dice::new(2, 5 + power / 16),
        SpellId::CrystalSpear => Dice::new(10, 4 + power / 12),
        SpellId::Glaciate => Dice::new(10, 3 + power / 12),
        _ => return None,
    };
    Some(dice)
}

/// Some spells launch several identical bolts; the effect string shows
/// the count as a prefix, e.g. "3x2d9".
pub const fn volley_size(spell: SpellId) -> Option<&'static str> {
    match spell {
        SpellId::Foxfire => Some("2x"),
        SpellId::ConjureBallLightning => Some("3x"),
        _ => None,
    }
}

/// Maximum range in map cells at the given power. Zero means the spell
/// has no meaningful range (self-enchantments, summons).
pub fn range(spell: SpellId, power: i32) -> i32 {
    let base = match spell {
        SpellId::Freeze => 1,
        SpellId::Foxfire => 2,
        SpellId::StoneArrow | SpellId::IronShot => 4,
        SpellId::Fireball
        | SpellId::VenomBolt
        | SpellId::BoltOfFire
        | SpellId::LightningBolt
        | SpellId::BoltOfDraining => 4 + power / 100,
        SpellId::ThrowIcicle => 5,
        SpellId::ConjureBallLightning => 5,
        SpellId::Glaciate => 6,
        SpellId::Blink
        | SpellId::Haste
        | SpellId::Invisibility
        | SpellId::AnimateDead
        | SpellId::Abjuration
        | SpellId::SummonSmallMammal
        | SpellId::CallImp
        | SpellId::SummonDemon => 0,
        _ => LOS_RADIUS,
    };
    base.min(LOS_RADIUS)
}

/// Accent colour used for a spell's effect string.
pub fn flavour_colour(spell: SpellId) -> Colour {
    match spell {
        SpellId::Freeze | SpellId::Glaciate => return Colour::White,
        SpellId::CrystalSpear => return Colour::LightMagenta,
        _ => {}
    }
    let schools = spell.schools();
    if schools.contains(SpellSchools::FIRE) {
        Colour::Red
    } else if schools.contains(SpellSchools::ICE) {
        Colour::LightBlue
    } else if schools.contains(SpellSchools::AIR) {
        Colour::LightCyan
    } else if schools.contains(SpellSchools::EARTH) {
        Colour::Brown
    } else if schools.contains(SpellSchools::ALCHEMY) {
        Colour::Green
    } else if schools.contains(SpellSchools::NECROMANCY) {
        Colour::Magenta
    } else {
        Colour::LightGrey
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_names() {
        assert_eq!(
            SpellId::Fireball.schools().joined_names(),
            "Conjuration/Fire"
        );
        assert_eq!(SpellId::Freeze.schools().joined_names(), "Ice");
        assert_eq!(SpellId::Smiting.schools().joined_names(), "");
    }

    #[test]
    fn test_dice_display() {
        assert_eq!(Dice::new(3, 8).to_string(), "3d8");
        assert!(Dice::new(0, 8).is_zero());
        assert!(!Dice::new(3, 8).is_zero());
    }

    #[test]
    fn test_damage_scales_with_power() {
        let low = damage(SpellId::Fireball, power_for_hd(2)).unwrap();
        let high = damage(SpellId::Fireball, power_for_hd(16)).unwrap();
        assert_eq!(low.num, high.num);
        assert!(high.size > low.size);
    }

    #[test]
    fn test_non_damaging_spells_have_no_dice() {
        assert!(damage(SpellId::Slow, 120).is_none());
        assert!(damage(SpellId::SummonDemon, 120).is_none());
        assert!(damage(SpellId::Smiting, 120).is_none());
    }

    #[test]
    fn test_volley_size() {
        assert_eq!(volley_size(SpellId::ConjureBallLightning), Some("3x"));
        assert_eq!(volley_size(SpellId::Fireball), None);
    }

    #[test]
    fn test_range_capped_at_los() {
        for &spell in SpellId::all() {
            assert!(range(spell, power_for_hd(30)) <= LOS_RADIUS);
        }
    }

    #[test]
    fn test_self_ench_spells_have_no_range() {
        assert_eq!(range(SpellId::Haste, 120), 0);
        assert_eq!(range(SpellId::Blink, 120), 0);
    }

    #[test]
    fn test_all_spells_named() {
        for &spell in SpellId::all() {
            assert!(!spell.name().is_empty());
            assert!(spell.level() >= 1 && spell.level() <= 9);
        }
    }
}
