//! The user-facing hide/restore API: persistent, in-place removal of items
//! or options from the matrix, independent of (and surviving across) any
//! number of search calls.
//!
//! Hiding is tracked on two LIFO stacks, `hidden_items` and `hidden_options`,
//! so that hides can always be undone in the reverse order they were applied
//! -- the same discipline the cover/uncover primitives use for a single
//! search call, just persisted across calls instead of scoped to one.

use crate::matrix::{PokemonLinks, HIDDEN};
use crate::type_encoding::TypeEncoding;
use std::collections::BTreeSet;

impl PokemonLinks {
    /// Hides a single item if present and not already hidden. Returns
    /// whether the hide took effect.
    pub fn hide_item(&mut self, item: TypeEncoding) -> bool {
        let Some(index) = self.find_item_index(item) else {
            return false;
        };
        if self.links[index].tag == HIDDEN {
            return false;
        }
        self.hidden_items.push(index);
        self.hide_item_at(index);
        true
    }

    /// Hides each item in `items`, continuing past failures. Returns `true`
    /// only if every hide took effect.
    pub fn hide_items(&mut self, items: &[TypeEncoding]) -> bool {
        let mut all_succeeded = true;
        for &item in items {
            if !self.hide_item(item) {
                all_succeeded = false;
            }
        }
        all_succeeded
    }

    /// Hides each item in `items`, appending any that failed to `failed`.
    pub fn hide_items_reporting_failures(&mut self, items: &[TypeEncoding], failed: &mut Vec<TypeEncoding>) {
        for &item in items {
            if !self.hide_item(item) {
                failed.push(item);
            }
        }
    }

    /// Hides every currently visible item whose name is not in `keep`.
    pub fn hide_all_items_except(&mut self, keep: &BTreeSet<TypeEncoding>) {
        let mut cur = self.item_table[0].right;
        while cur != 0 {
            let next = self.item_table[cur].right;
            if !keep.contains(&self.item_table[cur].name) {
                self.hidden_items.push(cur);
                self.hide_item_at(cur);
            }
            cur = next;
        }
    }

    /// `true` iff `item` is present and currently visible.
    pub fn has_item(&self, item: TypeEncoding) -> bool {
        self.find_item_index(item)
            .is_some_and(|index| self.links[index].tag != HIDDEN)
    }

    /// Unhides the most recently hidden item.
    ///
    /// # Panics
    /// Panics if no items are currently hidden -- there is nothing meaningful
    /// to unhide, and the reference implementation treats this the same way
    /// (SPEC_FULL §7).
    pub fn pop_hidden_item(&mut self) {
        let index = self.hidden_items.pop().expect("pop_hidden_item called with an empty hidden-items stack");
        self.unhide_item_at(index);
    }

    /// The most recently hidden item's name, without unhiding it.
    ///
    /// # Panics
    /// Panics if no items are currently hidden.
    pub fn peek_hidden_item(&self) -> TypeEncoding {
        let index = *self.hidden_items.last().expect("peek_hidden_item called with an empty hidden-items stack");
        self.item_table[index].name
    }

    pub fn hidden_items_is_empty(&self) -> bool {
        self.hidden_items.is_empty()
    }

    pub fn num_hidden_items(&self) -> usize {
        self.hidden_items.len()
    }

    /// Unhides every currently hidden item, draining the stack.
    pub fn reset_items(&mut self) {
        while let Some(index) = self.hidden_items.pop() {
            self.unhide_item_at(index);
        }
    }

    /// Hides a single option if present and not already hidden. Returns
    /// whether the hide took effect.
    pub fn hide_option(&mut self, option: TypeEncoding) -> bool {
        let Some(index) = self.find_option_index(option) else {
            return false;
        };
        if self.links[index].tag == HIDDEN {
            return false;
        }
        self.hidden_options.push(index);
        self.hide_option_at(index);
        true
    }

    /// Hides each option in `options`, continuing past failures. Returns
    /// `true` only if every hide took effect.
    pub fn hide_options(&mut self, options: &[TypeEncoding]) -> bool {
        let mut all_succeeded = true;
        for &option in options {
            if !self.hide_option(option) {
                all_succeeded = false;
            }
        }
        all_succeeded
    }

    /// Hides each option in `options`, appending any that failed to `failed`.
    pub fn hide_options_reporting_failures(&mut self, options: &[TypeEncoding], failed: &mut Vec<TypeEncoding>) {
        for &option in options {
            if !self.hide_option(option) {
                failed.push(option);
            }
        }
    }

    /// Hides every currently visible option whose name is not in `keep`.
    ///
    /// Walks spacer nodes directly rather than the option table: `links[i].down`
    /// on a spacer names the last item node of that option's row, so `+ 1`
    /// lands on the next option's spacer (see [`crate::matrix`] for the
    /// layout this relies on).
    pub fn hide_all_options_except(&mut self, keep: &BTreeSet<TypeEncoding>) {
        let mut spacer = self.item_table.len();
        while spacer < self.links.len() - 1 {
            if self.links[spacer].tag != HIDDEN {
                let option_index = (-self.links[spacer].top_or_len) as usize;
                if !keep.contains(&self.option_table[option_index].name) {
                    self.hidden_options.push(spacer);
                    self.hide_option_at(spacer);
                }
            }
            spacer = self.links[spacer].down + 1;
        }
    }

    /// `true` iff `option` is present and currently visible.
    pub fn has_option(&self, option: TypeEncoding) -> bool {
        self.find_option_index(option)
            .is_some_and(|index| self.links[index].tag != HIDDEN)
    }

    /// Unhides the most recently hidden option.
    ///
    /// # Panics
    /// Panics if no options are currently hidden.
    pub fn pop_hidden_option(&mut self) {
        let index = self.hidden_options.pop().expect("pop_hidden_option called with an empty hidden-options stack");
        self.unhide_option_at(index);
    }

    /// The most recently hidden option's name, without unhiding it.
    ///
    /// # Panics
    /// Panics if no options are currently hidden.
    pub fn peek_hidden_option(&self) -> TypeEncoding {
        let index = *self.hidden_options.last().expect("peek_hidden_option called with an empty hidden-options stack");
        let option_index = (-self.links[index].top_or_len) as usize;
        self.option_table[option_index].name
    }

    pub fn hidden_options_is_empty(&self) -> bool {
        self.hidden_options.is_empty()
    }

    pub fn num_hidden_options(&self) -> usize {
        self.hidden_options.len()
    }

    /// Unhides every currently hidden option, draining the stack.
    pub fn reset_options(&mut self) {
        while let Some(index) = self.hidden_options.pop() {
            self.unhide_option_at(index);
        }
    }

    /// Drains both hidden stacks, restoring the matrix to its fully visible
    /// state.
    pub fn reset_items_options(&mut self) {
        self.reset_items();
        self.reset_options();
    }

    fn hide_item_at(&mut self, header_index: usize) {
        let left = self.item_table[header_index].left;
        let right = self.item_table[header_index].right;
        self.item_table[left].right = right;
        self.item_table[right].left = left;
        self.links[header_index].tag = HIDDEN;
        self.num_items -= 1;
    }

    fn unhide_item_at(&mut self, header_index: usize) {
        let left = self.item_table[header_index].left;
        let right = self.item_table[header_index].right;
        self.item_table[left].right = header_index;
        self.item_table[right].left = header_index;
        self.links[header_index].tag = 0;
        self.num_items += 1;
    }

    fn hide_option_at(&mut self, spacer_index: usize) {
        self.links[spacer_index].tag = HIDDEN;
        let mut cur = spacer_index + 1;
        while self.links[cur].top_or_len > 0 {
            let up = self.links[cur].up;
            let down = self.links[cur].down;
            self.links[up].down = down;
            self.links[down].up = up;
            let header = self.links[cur].top_or_len as usize;
            self.links[header].top_or_len -= 1;
            cur += 1;
        }
        self.num_options -= 1;
    }

    fn unhide_option_at(&mut self, spacer_index: usize) {
        self.links[spacer_index].tag = 0;
        let mut cur = spacer_index + 1;
        while self.links[cur].top_or_len > 0 {
            let header = self.links[cur].top_or_len as usize;
            self.links[self.links[cur].up].down = cur;
            self.links[self.links[cur].down].up = cur;
            self.links[header].top_or_len += 1;
            cur += 1;
        }
        self.num_options += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::CoverageType;
    use crate::resistance::{Multiplier, Resistance};
    use std::collections::BTreeMap;
    use std::str::FromStr;

    fn encoding(name: &str) -> TypeEncoding {
        TypeEncoding::from_str(name).unwrap()
    }

    fn resistance(name: &str, multiplier: Multiplier) -> Resistance {
        Resistance::new(encoding(name), multiplier)
    }

    fn six_by_six_defense_map() -> BTreeMap<TypeEncoding, BTreeSet<Resistance>> {
        let mut map = BTreeMap::new();
        map.insert(
            encoding("Electric"),
            BTreeSet::from([
                resistance("Electric", Multiplier::Half),
                resistance("Fire", Multiplier::Normal),
                resistance("Grass", Multiplier::Normal),
                resistance("Ice", Multiplier::Normal),
                resistance("Normal", Multiplier::Normal),
                resistance("Water", Multiplier::Normal),
            ]),
        );
        map.insert(
            encoding("Fire"),
            BTreeSet::from([
                resistance("Electric", Multiplier::Normal),
                resistance("Fire", Multiplier::Half),
                resistance("Grass", Multiplier::Half),
                resistance("Ice", Multiplier::Half),
                resistance("Normal", Multiplier::Normal),
                resistance("Water", Multiplier::Normal),
            ]),
        );
        map.insert(
            encoding("Ground"),
            BTreeSet::from([
                resistance("Electric", Multiplier::Immune),
                resistance("Fire", Multiplier::Normal),
                resistance("Grass", Multiplier::Normal),
                resistance("Ice", Multiplier::Normal),
                resistance("Normal", Multiplier::Normal),
                resistance("Water", Multiplier::Normal),
            ]),
        );
        map.insert(
            encoding("Ice"),
            BTreeSet::from([
                resistance("Electric", Multiplier::Normal),
                resistance("Fire", Multiplier::Normal),
                resistance("Grass", Multiplier::Normal),
                resistance("Ice", Multiplier::Half),
                resistance("Normal", Multiplier::Normal),
                resistance("Water", Multiplier::Normal),
            ]),
        );
        map.insert(
            encoding("Normal"),
            BTreeSet::from([
                resistance("Electric", Multiplier::Normal),
                resistance("Fire", Multiplier::Normal),
                resistance("Grass", Multiplier::Normal),
                resistance("Ice", Multiplier::Normal),
                resistance("Normal", Multiplier::Normal),
                resistance("Water", Multiplier::Normal),
            ]),
        );
        map.insert(
            encoding("Water"),
            BTreeSet::from([
                resistance("Electric", Multiplier::Double),
                resistance("Fire", Multiplier::Half),
                resistance("Grass", Multiplier::Double),
                resistance("Ice", Multiplier::Half),
                resistance("Normal", Multiplier::Normal),
                resistance("Water", Multiplier::Half),
            ]),
        );
        map
    }

    #[test]
    fn hide_item_removes_coverage_requirement_not_the_option_name() {
        let map = six_by_six_defense_map();
        let mut dlx = PokemonLinks::new(&map, CoverageType::Defense);
        assert!(dlx.hide_item(encoding("Electric")));
        assert!(!dlx.has_item(encoding("Electric")));
        assert_eq!(dlx.num_items(), 5);

        let solutions = dlx.exact_coverages_functional(6);
        // Electric is no longer an item to satisfy, but the "Electric" typing
        // is still a selectable option and still appears by name here: this
        // matches Scenario 4 of SPEC_FULL §8, which keeps the typing but
        // drops the coverage requirement.
        let mut expected = RankedSet::new();
        for (score, name) in [(3, "Electric"), (3, "Fire"), (3, "Ice"), (0, "Normal")] {
            expected.insert(score, encoding(name));
        }
        assert_eq!(solutions.len(), 1);
        assert!(solutions.contains(&expected));
    }

    #[test]
    fn reset_items_restores_hidden_item_to_visible() {
        let map = six_by_six_defense_map();
        let mut dlx = PokemonLinks::new(&map, CoverageType::Defense);
        let before = dlx.clone();
        dlx.hide_item(encoding("Electric"));
        dlx.hide_item(encoding("Fire"));
        dlx.reset_items();
        assert!(dlx.hidden_items_is_empty());
        assert_eq!(dlx.links, before.links);
        assert_eq!(dlx.item_table, before.item_table);
        assert_eq!(dlx.num_items(), before.num_items());
    }

    #[test]
    fn hide_all_except_single_item_and_option_collapses_to_one_solution() {
        let map = six_by_six_defense_map();
        let mut dlx = PokemonLinks::new(&map, CoverageType::Defense);
        dlx.hide_all_items_except(&BTreeSet::from([encoding("Water")]));
        dlx.hide_all_options_except(&BTreeSet::from([encoding("Grass")]));
        assert_eq!(dlx.num_items(), 1);
        assert_eq!(dlx.num_options(), 1);

        let mut expected = RankedSet::new();
        expected.insert(3, encoding("Grass"));

        let exact = dlx.exact_coverages_functional(6);
        assert_eq!(exact.len(), 1);
        assert!(exact.contains(&expected));

        let overlapping = dlx.overlapping_coverages_functional(6);
        assert_eq!(overlapping.len(), 1);
        assert!(overlapping.contains(&expected));

        let before_reset_options = before_reset_options(&map);
        dlx.reset_items_options();
        assert_eq!(dlx.links, before_reset_options.links);
        assert_eq!(dlx.item_table, before_reset_options.item_table);
    }

    fn before_reset_options(map: &BTreeMap<TypeEncoding, BTreeSet<Resistance>>) -> PokemonLinks {
        PokemonLinks::new(map, CoverageType::Defense)
    }

    #[test]
    fn hide_and_pop_are_inverse_operations() {
        let map = six_by_six_defense_map();
        let mut dlx = PokemonLinks::new(&map, CoverageType::Defense);
        let before = dlx.clone();
        dlx.hide_option(encoding("Water"));
        dlx.pop_hidden_option();
        assert!(dlx.hidden_options_is_empty());
        assert_eq!(dlx.links, before.links);
        assert_eq!(dlx.option_table, before.option_table);
    }

    #[test]
    #[should_panic(expected = "empty hidden-items stack")]
    fn pop_hidden_item_on_empty_stack_panics() {
        let map = six_by_six_defense_map();
        let mut dlx = PokemonLinks::new(&map, CoverageType::Defense);
        dlx.pop_hidden_item();
    }

    #[test]
    fn duplicate_hide_is_a_silent_no_op() {
        let map = six_by_six_defense_map();
        let mut dlx = PokemonLinks::new(&map, CoverageType::Defense);
        assert!(dlx.hide_item(encoding("Electric")));
        assert!(!dlx.hide_item(encoding("Electric")));
        assert_eq!(dlx.num_hidden_items(), 1);
    }

    #[test]
    fn hiding_an_unknown_type_fails_without_panicking() {
        let map = six_by_six_defense_map();
        let mut dlx = PokemonLinks::new(&map, CoverageType::Defense);
        assert!(!dlx.hide_item(TypeEncoding::EMPTY));
        assert!(!dlx.hide_option(TypeEncoding::EMPTY));
    }
}
