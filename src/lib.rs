/*! This library implements Knuth's Algorithm X via dancing links (DLX), specialized to two
 * exact/overlapping set-cover variants of the Pokemon type coverage problem: choosing at most
 * `k` typings that defensively resist every attack type in play, or at most `k` single-type
 * attacks that hit every defensive typing in play for super-effective damage.
 *
 * The toroidal four-way linked matrix at the core of a DLX search is represented as three
 * parallel arrays of plain `usize` indices into one contiguous [`Vec`] rather than as a graph of
 * pointers -- see the [matrix] module for the layout. Construction, the cover/uncover primitives,
 * and the two (recursive and explicit-stack) search drivers are each a separate module; a
 * persistent hide/restore API sits on top for exploring "what if I rule this typing out" without
 * rebuilding the matrix.
 *
 * ## Usage
 *
 * The following builds a tiny defensive matrix and finds every team of at most 6 typings that
 * resists everything:
 *
 * ```
 * use pokelinks::{CoverageType, PokemonLinks, Multiplier, Resistance, TypeEncoding};
 * use std::collections::{BTreeMap, BTreeSet};
 * use std::str::FromStr;
 *
 * let mut typings = BTreeMap::new();
 * typings.insert(
 *     TypeEncoding::from_str("Water").unwrap(),
 *     BTreeSet::from([Resistance::new(TypeEncoding::from_str("Fire").unwrap(), Multiplier::Half)]),
 * );
 *
 * let mut dlx = PokemonLinks::new(&typings, CoverageType::Defense);
 * let coverages = dlx.exact_coverages_functional(6);
 * assert_eq!(coverages.len(), 1);
 * ```
 *
 * More detail on the matrix layout and the cover/uncover primitives can be found in the
 * module-level documentation of [matrix] and the crate's `cover`/`hide` modules.
 */

mod cover;
mod hide;
pub mod matrix;
pub mod query;
mod ranked_set;
mod resistance;
mod search;
pub mod type_encoding;

#[doc(inline)]
pub use matrix::{CoverageType, PokemonLinks};
#[doc(inline)]
pub use ranked_set::RankedSet;
#[doc(inline)]
pub use resistance::{Multiplier, Resistance};
#[doc(inline)]
pub use type_encoding::TypeEncoding;

/// The default team size a caller building a defensive cover is expected to pass as
/// `depth_limit`: six typings, matching a standard Pokemon team.
pub const DEFAULT_TEAM_SIZE: i32 = 6;

/// The default number of attack slots a caller building an attack cover is expected to pass as
/// `depth_limit`: four moves per team member across a six-member team.
pub const DEFAULT_ATTACK_SLOTS: i32 = 24;

/// The maximum number of solutions any search driver will collect before truncating and setting
/// [`PokemonLinks::reached_output_limit`]. Chosen for UI usability, not memory pressure; see
/// `DESIGN.md` for why 200,000 was chosen over the reference's other, smaller constant.
pub const MAX_OUTPUT: usize = 200_000;
