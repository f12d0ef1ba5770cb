//! The toroidal four-way linked matrix at the heart of a dancing-links search,
//! and the two ways to build one from a typing chart.
//!
//! All "pointers" are plain `usize` indices into one contiguous [`Vec<Node>`].
//! Nothing here owns a raw pointer or a cycle of `Rc`s: the vector owns every
//! node, and a link is just an integer offset into it. That makes the whole
//! structure `Send` and trivially `Clone` for free, at the cost of one extra
//! indirection per traversal step that a real pointer would avoid.

use crate::resistance::{Multiplier, Resistance};
use crate::type_encoding::TypeEncoding;
use std::collections::{BTreeMap, BTreeSet};

/// Sentinel tag value marking a node or column as hidden by the user-facing
/// hide API, as opposed to a non-negative recursion-depth claim made by the
/// overlapping search.
pub(crate) const HIDDEN: i32 = -1;

/// One node of the matrix: either a column header, an item node belonging to
/// some option's row, or a row spacer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Node {
    /// For a column header: the column's current length. For an item node:
    /// the index of its column header. For a spacer: the negated index into
    /// `option_table` of the option this spacer opens (or `i32::MIN` for the
    /// trailing spacer that closes the matrix).
    pub(crate) top_or_len: i32,
    pub(crate) up: usize,
    pub(crate) down: usize,
    pub(crate) multiplier: Multiplier,
    /// `0` while alive, [`HIDDEN`] while hidden by the user, or a positive
    /// recursion depth while claimed by an in-progress overlapping cover.
    pub(crate) tag: i32,
}

impl Node {
    fn header(top_or_len: i32, up: usize, down: usize) -> Self {
        Node {
            top_or_len,
            up,
            down,
            multiplier: Multiplier::Empty,
            tag: 0,
        }
    }

    fn spacer(top_or_len: i32) -> Self {
        Node {
            top_or_len,
            up: 0,
            down: 0,
            multiplier: Multiplier::Empty,
            tag: 0,
        }
    }
}

/// One entry of the horizontal item header list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ItemEntry {
    pub(crate) name: TypeEncoding,
    pub(crate) left: usize,
    pub(crate) right: usize,
}

/// One entry of the option name table. `index` points at the option's spacer
/// node in `links`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OptionEntry {
    pub(crate) name: TypeEncoding,
    pub(crate) index: usize,
}

/// Which direction a [`PokemonLinks`] matrix was built to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoverageType {
    /// Teams of typings that resist every attack item (lower score better).
    Defense,
    /// Attack types that hit every defensive item super-effectively (higher
    /// score better).
    Attack,
}

/// A toroidal doubly-linked matrix encoding one direction of the type
/// coverage problem, plus the persistent hide stacks layered on top of it.
///
/// See the [crate-level documentation](crate) for the coverage semantics and
/// the [module documentation](self) for the index-based link representation.
#[derive(Debug, Clone)]
pub struct PokemonLinks {
    pub(crate) option_table: Vec<OptionEntry>,
    pub(crate) item_table: Vec<ItemEntry>,
    pub(crate) links: Vec<Node>,
    pub(crate) hidden_items: Vec<usize>,
    pub(crate) hidden_options: Vec<usize>,
    pub(crate) num_items: usize,
    pub(crate) num_options: usize,
    pub(crate) max_output: usize,
    pub(crate) hit_limit: bool,
    coverage_type: CoverageType,
}

impl PokemonLinks {
    /// Builds a matrix over the full typing map in the given direction.
    pub fn new(typing_map: &BTreeMap<TypeEncoding, BTreeSet<Resistance>>, coverage_type: CoverageType) -> Self {
        match coverage_type {
            CoverageType::Defense => Self::build_defense(typing_map),
            CoverageType::Attack => Self::build_attack(typing_map),
        }
    }

    /// Builds a defensive matrix restricted to a subset of attack types. An
    /// empty subset is treated as "no restriction" and builds the full
    /// defensive matrix.
    pub fn new_defense_subset(
        typing_map: &BTreeMap<TypeEncoding, BTreeSet<Resistance>>,
        attack_types: &BTreeSet<TypeEncoding>,
    ) -> Self {
        if attack_types.is_empty() {
            return Self::build_defense(typing_map);
        }
        let projected: BTreeMap<TypeEncoding, BTreeSet<Resistance>> = typing_map
            .iter()
            .map(|(typing, resistances)| {
                let kept = resistances
                    .iter()
                    .copied()
                    .filter(|r| attack_types.contains(&r.type_encoding()))
                    .collect();
                (*typing, kept)
            })
            .collect();
        Self::build_defense(&projected)
    }

    fn build_defense(typing_map: &BTreeMap<TypeEncoding, BTreeSet<Resistance>>) -> Self {
        let items: Vec<TypeEncoding> = typing_map
            .values()
            .next()
            .map(|resistances| resistances.iter().map(|r| r.type_encoding()).collect())
            .unwrap_or_default();
        Self::build_links(typing_map, items, Multiplier::is_resistant, CoverageType::Defense)
    }

    fn build_attack(typing_map: &BTreeMap<TypeEncoding, BTreeSet<Resistance>>) -> Self {
        let mut inverted: BTreeMap<TypeEncoding, BTreeSet<Resistance>> = BTreeMap::new();
        for (defender, resistances) in typing_map {
            for r in resistances {
                if r.multiplier().is_super_effective() {
                    inverted
                        .entry(r.type_encoding())
                        .or_default()
                        .insert(Resistance::new(*defender, r.multiplier()));
                }
            }
        }
        let items: Vec<TypeEncoding> = typing_map.keys().copied().collect();
        Self::build_links(&inverted, items, Multiplier::is_super_effective, CoverageType::Attack)
    }

    /// Shared construction routine: `map`'s keys become options (rows), `items`
    /// becomes the column universe, and `admit` filters which resistances of
    /// each row are worth a link (the rest are treated as NORMAL and omitted).
    fn build_links(
        map: &BTreeMap<TypeEncoding, BTreeSet<Resistance>>,
        items: Vec<TypeEncoding>,
        admit: fn(Multiplier) -> bool,
        coverage_type: CoverageType,
    ) -> Self {
        let num_items = items.len();

        let mut item_table = Vec::with_capacity(num_items + 1);
        item_table.push(ItemEntry {
            name: TypeEncoding::EMPTY,
            left: num_items,
            right: if num_items == 0 { 0 } else { 1 },
        });
        for (i, name) in items.iter().enumerate() {
            let index = i + 1;
            item_table.push(ItemEntry {
                name: *name,
                left: if index == 1 { 0 } else { index - 1 },
                right: if index == num_items { 0 } else { index + 1 },
            });
        }

        let mut links = Vec::with_capacity(num_items + 1);
        links.push(Node::header(0, 0, 0));
        for header_index in 1..=num_items {
            links.push(Node::header(0, header_index, header_index));
        }

        let mut option_table = Vec::with_capacity(map.len() + 1);
        option_table.push(OptionEntry {
            name: TypeEncoding::EMPTY,
            index: 0,
        });

        // Bottommost node currently in each column; starts at the header
        // itself (an empty circular column).
        let mut column_tail: Vec<usize> = (0..=num_items).collect();
        // Row bounds of the option processed just before this one, used to
        // fill in each spacer's `up` link (see the module doc on spacer
        // layout: a spacer's `up` names the *previous* option's first node).
        let mut previous_row_start = 0usize;

        for (typing, resistances) in map {
            let spacer_index = links.len();
            let option_table_index = option_table.len();
            links.push(Node::spacer(-(option_table_index as i32)));
            links[spacer_index].up = previous_row_start;
            option_table.push(OptionEntry {
                name: *typing,
                index: spacer_index,
            });

            let row_start = links.len();
            for r in resistances.iter().filter(|r| admit(r.multiplier())) {
                let Some(col) = find_item_column(&item_table, r.type_encoding()) else {
                    continue;
                };
                let node_index = links.len();
                links.push(Node {
                    top_or_len: col as i32,
                    up: column_tail[col],
                    down: col,
                    multiplier: r.multiplier(),
                    tag: 0,
                });
                links[column_tail[col]].down = node_index;
                links[col].up = node_index;
                links[col].top_or_len += 1;
                column_tail[col] = node_index;
            }
            let row_end = links.len();

            if row_end > row_start {
                links[spacer_index].down = row_end - 1;
                previous_row_start = row_start;
            } else {
                links[spacer_index].down = spacer_index;
                previous_row_start = spacer_index;
            }
        }

        links.push(Node {
            top_or_len: i32::MIN,
            up: previous_row_start,
            down: 0,
            multiplier: Multiplier::Empty,
            tag: 0,
        });

        let num_options = option_table.len() - 1;
        PokemonLinks {
            option_table,
            item_table,
            links,
            hidden_items: Vec::new(),
            hidden_options: Vec::new(),
            num_items,
            num_options,
            max_output: crate::MAX_OUTPUT,
            hit_limit: false,
            coverage_type,
        }
    }

    pub fn coverage_type(&self) -> CoverageType {
        self.coverage_type
    }

    pub fn num_items(&self) -> usize {
        self.num_items
    }

    pub fn num_options(&self) -> usize {
        self.num_options
    }

    /// Visible (non-hidden) item names, in table order.
    pub fn items(&self) -> Vec<TypeEncoding> {
        self.item_table[1..]
            .iter()
            .enumerate()
            .filter(|(i, _)| self.links[i + 1].tag != HIDDEN)
            .map(|(_, entry)| entry.name)
            .collect()
    }

    /// Visible (non-hidden) option names, in table order.
    pub fn options(&self) -> Vec<TypeEncoding> {
        self.option_table[1..]
            .iter()
            .filter(|entry| self.links[entry.index].tag != HIDDEN)
            .map(|entry| entry.name)
            .collect()
    }

    /// `true` once a search call has hit `max_output` and truncated its
    /// result set.
    pub fn reached_output_limit(&self) -> bool {
        self.hit_limit
    }

    pub(crate) fn find_item_index(&self, name: TypeEncoding) -> Option<usize> {
        find_item_column(&self.item_table, name)
    }

    pub(crate) fn find_option_index(&self, name: TypeEncoding) -> Option<usize> {
        self.option_table[1..]
            .binary_search_by(|entry| entry.name.cmp(&name))
            .ok()
            .map(|i| self.option_table[i + 1].index)
    }
}

fn find_item_column(item_table: &[ItemEntry], name: TypeEncoding) -> Option<usize> {
    item_table[1..]
        .binary_search_by(|entry| entry.name.cmp(&name))
        .ok()
        .map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn encoding(name: &str) -> TypeEncoding {
        TypeEncoding::from_str(name).unwrap()
    }

    fn resistance(name: &str, multiplier: Multiplier) -> Resistance {
        Resistance::new(encoding(name), multiplier)
    }

    fn sample_defense_map() -> BTreeMap<TypeEncoding, BTreeSet<Resistance>> {
        let mut map = BTreeMap::new();
        map.insert(
            encoding("Water"),
            BTreeSet::from([
                resistance("Electric", Multiplier::Normal),
                resistance("Fire", Multiplier::Half),
                resistance("Grass", Multiplier::Double),
            ]),
        );
        map.insert(
            encoding("Fire"),
            BTreeSet::from([
                resistance("Electric", Multiplier::Normal),
                resistance("Fire", Multiplier::Half),
                resistance("Grass", Multiplier::Half),
            ]),
        );
        map
    }

    #[test]
    fn defense_build_only_links_resisted_attacks() {
        let dlx = PokemonLinks::new(&sample_defense_map(), CoverageType::Defense);
        assert_eq!(dlx.num_items(), 3, "items come from the first row's attack set");
        assert_eq!(dlx.num_options(), 2);
        // Electric is Normal against both typings, so its column stays empty.
        let electric_header = dlx.find_item_index(encoding("Electric")).unwrap();
        assert_eq!(dlx.links[electric_header].top_or_len, 0);
        let fire_header = dlx.find_item_index(encoding("Fire")).unwrap();
        assert_eq!(dlx.links[fire_header].top_or_len, 2);
    }

    #[test]
    fn attack_build_inverts_and_keeps_only_super_effective() {
        let dlx = PokemonLinks::new(&sample_defense_map(), CoverageType::Attack);
        // Items are the defensive typings from the original map.
        assert_eq!(dlx.num_items(), 2);
        // Options are attack types that hit something super-effectively: only Grass (vs Water).
        assert_eq!(dlx.num_options(), 1);
        assert!(dlx.find_option_index(encoding("Grass")).is_some());
    }

    #[test]
    fn empty_input_yields_empty_matrix() {
        let dlx = PokemonLinks::new(&BTreeMap::new(), CoverageType::Defense);
        assert_eq!(dlx.num_items(), 0);
        assert_eq!(dlx.num_options(), 0);
        assert!(dlx.items().is_empty());
        assert!(dlx.options().is_empty());
    }

    #[test]
    fn defense_subset_restricts_items_to_requested_attacks() {
        let subset = BTreeSet::from([encoding("Fire")]);
        let dlx = PokemonLinks::new_defense_subset(&sample_defense_map(), &subset);
        assert_eq!(dlx.num_items(), 1);
        assert!(dlx.find_item_index(encoding("Fire")).is_some());
        assert!(dlx.find_item_index(encoding("Grass")).is_none());
    }
}
