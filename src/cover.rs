//! Cover and uncover primitives: the mutating core of a dancing-links search
//! step, for both the exact and overlapping coverage regimes.
//!
//! Every traversal here walks a row by array index rather than an explicit
//! linked list: incrementing (or decrementing) the cursor steps across the
//! row, and landing on a spacer node (`top_or_len <= 0`) means the row has
//! wrapped -- `up`/`down` on that spacer carry the cursor back to the other
//! end. See [`crate::matrix`] for the exact invariants this relies on.

use crate::matrix::{PokemonLinks, HIDDEN};
use crate::type_encoding::TypeEncoding;

impl PokemonLinks {
    /// Picks the column with the fewest live options, breaking ties by
    /// header order. Returns the sentinel index `0` if every remaining
    /// column is empty (meaning this branch cannot be completed).
    pub(crate) fn choose_item(&self) -> usize {
        let mut cur = self.item_table[0].right;
        let mut chosen = 0;
        let mut shortest = i32::MAX;
        while cur != 0 {
            let len = self.links[cur].top_or_len;
            if len == 0 {
                return 0;
            }
            if len < shortest {
                shortest = len;
                chosen = cur;
            }
            cur = self.item_table[cur].right;
        }
        chosen
    }

    /// Covers the option containing `start_index` exactly: every item this
    /// option satisfies is removed from the header row, and every other
    /// option touching those items is spliced out entirely. Returns the
    /// option's name and the score accumulated from the multipliers of its
    /// live item nodes.
    pub(crate) fn cover(&mut self, start_index: usize) -> (TypeEncoding, i32) {
        let name = self.option_name_of(start_index);
        let mut score = 0;
        let mut cur = start_index;
        loop {
            if self.links[cur].top_or_len <= 0 {
                cur = self.links[cur].up;
            } else {
                let item = self.links[cur].top_or_len as usize;
                if self.links[item].tag != HIDDEN {
                    self.unlink_item_horizontally(item);
                    self.splice_crossing_options(item, cur);
                    score += self.links[cur].multiplier.score();
                }
                cur += 1;
            }
            if cur == start_index {
                break;
            }
        }
        (name, score)
    }

    /// Reverses a previous [`cover`](Self::cover) call at the same index,
    /// restoring the matrix to its pre-cover state.
    pub(crate) fn uncover(&mut self, start_index: usize) {
        let mut cur = start_index;
        loop {
            if self.links[cur].top_or_len <= 0 {
                cur = self.links[cur].down;
            } else {
                let item = self.links[cur].top_or_len as usize;
                if self.links[item].tag != HIDDEN {
                    self.unsplice_crossing_options(item, cur);
                    self.relink_item_horizontally(item);
                }
                cur -= 1;
            }
            if cur == start_index {
                break;
            }
        }
    }

    /// Splices every option other than `except` that crosses column `item`
    /// out of the columns it touches, decrementing those columns' lengths.
    fn splice_crossing_options(&mut self, item: usize, except: usize) {
        let mut row_cursor = self.links[item].down;
        while row_cursor != item {
            if row_cursor != except {
                let mut cur = row_cursor + 1;
                while cur != row_cursor {
                    if self.links[cur].top_or_len <= 0 {
                        cur = self.links[cur].up;
                        continue;
                    }
                    let up = self.links[cur].up;
                    let down = self.links[cur].down;
                    self.links[up].down = down;
                    self.links[down].up = up;
                    self.links[self.links[cur].top_or_len as usize].top_or_len -= 1;
                    cur += 1;
                }
            }
            row_cursor = self.links[row_cursor].down;
        }
    }

    /// Reverses a previous [`splice_crossing_options`](Self::splice_crossing_options) call,
    /// restoring every spliced row in the opposite order it was removed.
    fn unsplice_crossing_options(&mut self, item: usize, except: usize) {
        let mut row_cursor = self.links[item].up;
        while row_cursor != item {
            if row_cursor != except {
                let mut cur = row_cursor - 1;
                while cur != row_cursor {
                    if self.links[cur].top_or_len <= 0 {
                        cur = self.links[cur].down;
                        continue;
                    }
                    let header = self.links[cur].top_or_len as usize;
                    self.links[self.links[cur].up].down = cur;
                    self.links[self.links[cur].down].up = cur;
                    self.links[header].top_or_len += 1;
                    cur -= 1;
                }
            }
            row_cursor = self.links[row_cursor].up;
        }
    }

    /// Overlapping-cover variant: claims every live item of this option at
    /// `depth_tag` without removing any other option. Nodes whose column is
    /// already hidden contribute nothing and are left untouched.
    pub(crate) fn overlapping_cover(&mut self, start_index: usize, depth_tag: i32) -> (TypeEncoding, i32) {
        let name = self.option_name_of(start_index);
        let mut score = 0;
        let mut cur = start_index;
        loop {
            if self.links[cur].top_or_len <= 0 {
                cur = self.links[cur].up;
            } else {
                let item = self.links[cur].top_or_len as usize;
                if self.links[item].tag != HIDDEN {
                    self.links[item].tag = depth_tag;
                    self.unlink_item_horizontally(item);
                    score += self.links[cur].multiplier.score();
                    self.links[cur].tag = depth_tag;
                }
                cur += 1;
            }
            if cur == start_index {
                break;
            }
        }
        (name, score)
    }

    /// Reverses a previous [`overlapping_cover`](Self::overlapping_cover)
    /// call made at the same `start_index`.
    pub(crate) fn overlapping_uncover(&mut self, start_index: usize) {
        let mut cur = start_index;
        loop {
            if self.links[cur].top_or_len <= 0 {
                cur = self.links[cur].down;
            } else {
                let item = self.links[cur].top_or_len as usize;
                if self.links[item].tag == HIDDEN {
                    self.links[cur].tag = 0;
                } else if self.links[cur].tag == self.links[item].tag {
                    self.links[item].tag = 0;
                    self.links[cur].tag = 0;
                    self.relink_item_horizontally(item);
                }
                cur -= 1;
            }
            if cur == start_index {
                break;
            }
        }
    }

    fn option_name_of(&self, index_in_option: usize) -> TypeEncoding {
        let mut cur = index_in_option;
        while self.links[cur].top_or_len > 0 {
            cur += 1;
        }
        // `cur` now sits on the spacer that opens the *next* option; its `up`
        // carries back to the first node of this row, one past this row's own
        // leading spacer.
        let row_start = self.links[cur].up;
        let own_spacer = row_start - 1;
        let option_index = (-self.links[own_spacer].top_or_len) as usize;
        self.option_table[option_index].name
    }

    /// Splices `item` out of the horizontal header list. This is search-local
    /// bookkeeping, distinct from [`hide_item`](Self::hide_item): it does not
    /// touch `num_items`, which counts only user-hidden items.
    fn unlink_item_horizontally(&mut self, item: usize) {
        let left = self.item_table[item].left;
        let right = self.item_table[item].right;
        self.item_table[left].right = right;
        self.item_table[right].left = left;
    }

    fn relink_item_horizontally(&mut self, item: usize) {
        let left = self.item_table[item].left;
        let right = self.item_table[item].right;
        self.item_table[left].right = item;
        self.item_table[right].left = item;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::CoverageType;
    use crate::resistance::{Multiplier, Resistance};
    use std::collections::{BTreeMap, BTreeSet};
    use std::str::FromStr;

    fn encoding(name: &str) -> TypeEncoding {
        TypeEncoding::from_str(name).unwrap()
    }

    fn resistance(name: &str, multiplier: Multiplier) -> Resistance {
        Resistance::new(encoding(name), multiplier)
    }

    fn two_option_matrix() -> PokemonLinks {
        let mut map = BTreeMap::new();
        map.insert(
            encoding("Water"),
            BTreeSet::from([resistance("Fire", Multiplier::Half), resistance("Grass", Multiplier::Double)]),
        );
        map.insert(
            encoding("Grass"),
            BTreeSet::from([resistance("Fire", Multiplier::Half), resistance("Water", Multiplier::Half)]),
        );
        PokemonLinks::new(&map, CoverageType::Defense)
    }

    #[test]
    fn cover_then_uncover_restores_matrix() {
        let mut dlx = two_option_matrix();
        let before = dlx.clone();
        let fire_header = dlx.find_item_index(encoding("Fire")).unwrap();
        let start = dlx.links[fire_header].down;
        let (_name, _score) = dlx.cover(start);
        assert_ne!(dlx.item_table, before.item_table, "cover must detach at least one item");
        dlx.uncover(start);
        assert_eq!(dlx.item_table, before.item_table);
        assert_eq!(dlx.links, before.links);
    }

    #[test]
    fn cover_reports_option_name_and_score() {
        let mut dlx = two_option_matrix();
        let fire_header = dlx.find_item_index(encoding("Fire")).unwrap();
        let start = dlx.links[fire_header].down;
        let (name, score) = dlx.cover(start);
        assert_eq!(score, Multiplier::Half.score());
        assert!(name == encoding("Water") || name == encoding("Grass"));
    }

    #[test]
    fn overlapping_cover_then_uncover_restores_matrix() {
        let mut dlx = two_option_matrix();
        let before = dlx.clone();
        let fire_header = dlx.find_item_index(encoding("Fire")).unwrap();
        let start = dlx.links[fire_header].down;
        dlx.overlapping_cover(start, 1);
        dlx.overlapping_uncover(start);
        assert_eq!(dlx.item_table, before.item_table);
        assert_eq!(dlx.links, before.links);
    }

    #[test]
    fn overlapping_cover_leaves_other_options_selectable() {
        let mut dlx = two_option_matrix();
        let water_header = dlx.find_item_index(encoding("Water")).unwrap();
        let water_len_before = dlx.links[water_header].top_or_len;
        let fire_header = dlx.find_item_index(encoding("Fire")).unwrap();
        let start = dlx.links[fire_header].down;
        dlx.overlapping_cover(start, 1);
        // Overlapping cover only tags and horizontally splices the headers it
        // touches; unlike exact cover it never calls splice_crossing_options, so no
        // column's length changes.
        assert_eq!(dlx.links[water_header].top_or_len, water_len_before);
    }
}
