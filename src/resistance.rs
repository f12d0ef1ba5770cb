//! Damage multipliers and the `(type, multiplier)` pairs that key a typing's
//! resistance or attack-effectiveness table.

use crate::type_encoding::TypeEncoding;
use std::cmp::Ordering;

/// A damage multiplier, ordered by damage magnitude.
///
/// The discriminants double as the scoring point values used when a node is
/// chosen during a cover search (SPEC_FULL §6): casting a `Multiplier` to
/// `i32` yields the score contribution directly. `Empty` and `Normal` never
/// contribute, because rows are only ever built from multipliers strictly
/// better than normal (defense) or strictly worse than normal (attack).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum Multiplier {
    /// Placeholder value; never appears on a constructed matrix node.
    Empty = 0,
    /// x0.0 damage. Worth 1 point when chosen for a defensive cover.
    Immune = 1,
    /// x0.25 damage. Worth 2 points when chosen for a defensive cover.
    Quarter = 2,
    /// x0.5 damage. Worth 3 points when chosen for a defensive cover.
    Half = 3,
    /// x1.0 damage. Never included in a built matrix row.
    Normal = 4,
    /// x2.0 damage. Worth 5 points when chosen for an attack cover.
    Double = 5,
    /// x4.0 damage. Worth 6 points when chosen for an attack cover.
    Quadruple = 6,
}

impl Multiplier {
    /// The point value this multiplier contributes to a [`RankedSet`](crate::ranked_set::RankedSet)'s
    /// rank when the option containing it is chosen.
    pub fn score(self) -> i32 {
        self as i32
    }

    /// True for multipliers a defensive build admits (strictly better than normal).
    pub fn is_resistant(self) -> bool {
        matches!(self, Multiplier::Immune | Multiplier::Quarter | Multiplier::Half)
    }

    /// True for multipliers an attack build admits (strictly worse than normal).
    pub fn is_super_effective(self) -> bool {
        matches!(self, Multiplier::Double | Multiplier::Quadruple)
    }
}

/// A `(type, multiplier)` pair, associating a defensive or attack type with how
/// much damage it deals or takes.
///
/// Equality compares both fields, but [`Ord`]/[`PartialOrd`] compare only the
/// type, so a `BTreeSet<Resistance>` behaves like a map keyed by type -- the
/// same trick the reference implementation relies on to store these in a
/// `std::set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resistance {
    attack_or_defense_type: TypeEncoding,
    multiplier: Multiplier,
}

impl Resistance {
    pub fn new(attack_or_defense_type: TypeEncoding, multiplier: Multiplier) -> Self {
        Resistance {
            attack_or_defense_type,
            multiplier,
        }
    }

    pub fn type_encoding(self) -> TypeEncoding {
        self.attack_or_defense_type
    }

    pub fn multiplier(self) -> Multiplier {
        self.multiplier
    }
}

impl PartialOrd for Resistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Resistance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.attack_or_defense_type.cmp(&other.attack_or_defense_type)
    }
}
