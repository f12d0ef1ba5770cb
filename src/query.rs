//! A free-function facade over [`PokemonLinks`], for call sites that prefer
//! `query::num_items(&dlx)` over `dlx.num_items()` -- mirroring the reference
//! implementation's top-level wrapper functions, which exist so the GUI and
//! CLI front-ends this crate doesn't implement can depend on a small set of
//! free functions rather than the struct's full method surface.

use crate::matrix::{CoverageType, PokemonLinks};
use crate::ranked_set::RankedSet;
use crate::type_encoding::TypeEncoding;
use std::collections::BTreeSet;

pub fn solve_exact_cover(dlx: &mut PokemonLinks, choice_limit: i32) -> BTreeSet<RankedSet<TypeEncoding>> {
    dlx.exact_coverages_functional(choice_limit)
}

pub fn solve_overlapping_cover(dlx: &mut PokemonLinks, choice_limit: i32) -> BTreeSet<RankedSet<TypeEncoding>> {
    dlx.overlapping_coverages_functional(choice_limit)
}

pub fn exact_cover_functional(dlx: &mut PokemonLinks, choice_limit: i32) -> BTreeSet<RankedSet<TypeEncoding>> {
    dlx.exact_coverages_functional(choice_limit)
}

pub fn exact_cover_stack(dlx: &mut PokemonLinks, choice_limit: i32) -> BTreeSet<RankedSet<TypeEncoding>> {
    dlx.exact_coverages_stack(choice_limit)
}

pub fn overlapping_cover_functional(dlx: &mut PokemonLinks, choice_limit: i32) -> BTreeSet<RankedSet<TypeEncoding>> {
    dlx.overlapping_coverages_functional(choice_limit)
}

pub fn overlapping_cover_stack(dlx: &mut PokemonLinks, choice_limit: i32) -> BTreeSet<RankedSet<TypeEncoding>> {
    dlx.overlapping_coverages_stack(choice_limit)
}

pub fn has_max_solutions(dlx: &PokemonLinks) -> bool {
    dlx.reached_output_limit()
}

pub fn items(dlx: &PokemonLinks) -> Vec<TypeEncoding> {
    dlx.items()
}

pub fn num_items(dlx: &PokemonLinks) -> usize {
    dlx.num_items()
}

pub fn has_item(dlx: &PokemonLinks, item: TypeEncoding) -> bool {
    dlx.has_item(item)
}

pub fn hide_item(dlx: &mut PokemonLinks, to_hide: TypeEncoding) -> bool {
    dlx.hide_item(to_hide)
}

pub fn hide_items(dlx: &mut PokemonLinks, to_hide: &[TypeEncoding]) -> bool {
    dlx.hide_items(to_hide)
}

pub fn hide_items_except(dlx: &mut PokemonLinks, to_keep: &BTreeSet<TypeEncoding>) {
    dlx.hide_all_items_except(to_keep);
}

pub fn num_hidden_items(dlx: &PokemonLinks) -> usize {
    dlx.num_hidden_items()
}

pub fn peek_hidden_item(dlx: &PokemonLinks) -> TypeEncoding {
    dlx.peek_hidden_item()
}

pub fn pop_hidden_item(dlx: &mut PokemonLinks) {
    dlx.pop_hidden_item();
}

pub fn hidden_items_is_empty(dlx: &PokemonLinks) -> bool {
    dlx.hidden_items_is_empty()
}

pub fn reset_items(dlx: &mut PokemonLinks) {
    dlx.reset_items();
}

pub fn options(dlx: &PokemonLinks) -> Vec<TypeEncoding> {
    dlx.options()
}

pub fn num_options(dlx: &PokemonLinks) -> usize {
    dlx.num_options()
}

pub fn has_option(dlx: &PokemonLinks, option: TypeEncoding) -> bool {
    dlx.has_option(option)
}

pub fn hide_option(dlx: &mut PokemonLinks, to_hide: TypeEncoding) -> bool {
    dlx.hide_option(to_hide)
}

pub fn hide_options(dlx: &mut PokemonLinks, to_hide: &[TypeEncoding]) -> bool {
    dlx.hide_options(to_hide)
}

pub fn hide_options_except(dlx: &mut PokemonLinks, to_keep: &BTreeSet<TypeEncoding>) {
    dlx.hide_all_options_except(to_keep);
}

pub fn num_hidden_options(dlx: &PokemonLinks) -> usize {
    dlx.num_hidden_options()
}

pub fn peek_hidden_option(dlx: &PokemonLinks) -> TypeEncoding {
    dlx.peek_hidden_option()
}

pub fn pop_hidden_option(dlx: &mut PokemonLinks) {
    dlx.pop_hidden_option();
}

pub fn hidden_options_is_empty(dlx: &PokemonLinks) -> bool {
    dlx.hidden_options_is_empty()
}

pub fn reset_options(dlx: &mut PokemonLinks) {
    dlx.reset_options();
}

pub fn reset_items_options(dlx: &mut PokemonLinks) {
    dlx.reset_items_options();
}

pub fn coverage_type(dlx: &PokemonLinks) -> CoverageType {
    dlx.coverage_type()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resistance::{Multiplier, Resistance};
    use std::collections::BTreeMap;
    use std::str::FromStr;

    #[test]
    fn facade_forwards_to_the_same_results_as_method_calls() {
        let mut map = BTreeMap::new();
        map.insert(
            TypeEncoding::from_str("Water").unwrap(),
            BTreeSet::from([Resistance::new(TypeEncoding::from_str("Fire").unwrap(), Multiplier::Half)]),
        );
        let mut via_facade = PokemonLinks::new(&map, CoverageType::Defense);
        let mut via_method = via_facade.clone();

        assert_eq!(num_items(&via_facade), via_method.num_items());
        assert_eq!(
            solve_exact_cover(&mut via_facade, 6),
            via_method.exact_coverages_functional(6)
        );
        assert_eq!(has_max_solutions(&via_facade), via_method.reached_output_limit());
    }

    #[test]
    fn facade_exposes_both_functional_and_stack_variants_of_each_cover_mode() {
        let mut map = BTreeMap::new();
        map.insert(
            TypeEncoding::from_str("Water").unwrap(),
            BTreeSet::from([Resistance::new(TypeEncoding::from_str("Fire").unwrap(), Multiplier::Half)]),
        );
        let mut functional = PokemonLinks::new(&map, CoverageType::Defense);
        let mut stack = functional.clone();

        assert_eq!(
            exact_cover_functional(&mut functional, 6),
            exact_cover_stack(&mut stack, 6)
        );
        assert_eq!(
            overlapping_cover_functional(&mut functional, 6),
            overlapping_cover_stack(&mut stack, 6)
        );
    }
}
