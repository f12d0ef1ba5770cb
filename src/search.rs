//! The two equivalent search drivers: a recursive one that mirrors the
//! reference implementation almost line for line, and an explicit-stack
//! driver that reaches the same set of solutions without growing the call
//! stack.
//!
//! Both drivers leave the matrix bitwise identical to its pre-call state on
//! every exit path -- normal exhaustion, depth-limit pruning, and early
//! termination once [`PokemonLinks::max_output`](crate::matrix::PokemonLinks)
//! solutions have been collected. The stack driver's frames mirror the
//! recursive driver's call frames exactly: a `max_output` hit cascades
//! "uncover and return" up through every pending frame, just as it would
//! unwind the call stack one level at a time in the recursive form.

use crate::matrix::PokemonLinks;
use crate::ranked_set::RankedSet;
use crate::type_encoding::TypeEncoding;
use std::collections::BTreeSet;

impl PokemonLinks {
    /// All exact covers reachable within `depth_limit` choices, found via the
    /// recursive driver.
    pub fn exact_coverages_functional(&mut self, depth_limit: i32) -> BTreeSet<RankedSet<TypeEncoding>> {
        let mut coverages = BTreeSet::new();
        let mut partial = RankedSet::with_capacity(depth_limit.max(0) as usize);
        self.hit_limit = false;
        self.fill_exact_functional(&mut coverages, &mut partial, depth_limit);
        coverages
    }

    fn fill_exact_functional(
        &mut self,
        coverages: &mut BTreeSet<RankedSet<TypeEncoding>>,
        partial: &mut RankedSet<TypeEncoding>,
        depth_limit: i32,
    ) {
        if self.item_table[0].right == 0 && depth_limit >= 0 {
            coverages.insert(partial.clone());
            return;
        }
        if depth_limit <= 0 {
            return;
        }
        let item = self.choose_item();
        if item == 0 {
            return;
        }
        let mut cur = self.links[item].down;
        while cur != item {
            let (name, score) = self.cover(cur);
            partial.insert(score, name);

            self.fill_exact_functional(coverages, partial, depth_limit - 1);

            if coverages.len() == self.max_output {
                self.hit_limit = true;
                self.uncover(cur);
                return;
            }
            partial.erase(score, &name);
            self.uncover(cur);
            cur = self.links[cur].down;
        }
    }

    /// Same result set as [`exact_coverages_functional`](Self::exact_coverages_functional),
    /// found with an explicit frame stack instead of recursion. Each frame
    /// stands in for one pending activation of
    /// [`fill_exact_functional`](Self::fill_exact_functional): resuming a
    /// frame after its "recursive call" does exactly what resuming that stack
    /// frame would do, including the `max_output` cascade.
    pub fn exact_coverages_stack(&mut self, depth_limit: i32) -> BTreeSet<RankedSet<TypeEncoding>> {
        let mut coverages = BTreeSet::new();
        let mut partial = RankedSet::with_capacity(depth_limit.max(0) as usize);
        self.hit_limit = false;

        let mut frames: Vec<ExactFrame> = Vec::new();
        let mut depth_limit = depth_limit;

        'call: loop {
            if self.item_table[0].right == 0 && depth_limit >= 0 {
                coverages.insert(partial.clone());
            } else if depth_limit > 0 {
                if let Some(item) = self.first_live_column(self.choose_item()) {
                    let cur = self.links[item].down;
                    let (name, score) = self.cover(cur);
                    partial.insert(score, name);
                    frames.push(ExactFrame {
                        item,
                        cur,
                        name,
                        score,
                        depth_limit,
                    });
                    depth_limit -= 1;
                    continue 'call;
                }
            }

            // "Return" from the call just completed: unwind to the nearest
            // frame that has another option to try, cascading an uncover at
            // every frame along the way if the output cap was just hit.
            loop {
                let Some(frame) = frames.pop() else {
                    break 'call;
                };
                if coverages.len() == self.max_output {
                    self.hit_limit = true;
                    self.uncover(frame.cur);
                    continue;
                }
                partial.erase(frame.score, &frame.name);
                self.uncover(frame.cur);
                let next = self.links[frame.cur].down;
                if next == frame.item {
                    continue;
                }
                let (name, score) = self.cover(next);
                partial.insert(score, name);
                frames.push(ExactFrame {
                    item: frame.item,
                    cur: next,
                    name,
                    score,
                    depth_limit: frame.depth_limit,
                });
                depth_limit = frame.depth_limit - 1;
                continue 'call;
            }
        }

        coverages
    }

    /// All overlapping covers reachable within `depth_limit` choices, found
    /// via the recursive driver.
    pub fn overlapping_coverages_functional(&mut self, depth_limit: i32) -> BTreeSet<RankedSet<TypeEncoding>> {
        let mut coverages = BTreeSet::new();
        let mut partial = RankedSet::with_capacity(depth_limit.max(0) as usize);
        self.hit_limit = false;
        self.fill_overlapping_functional(&mut coverages, &mut partial, depth_limit);
        coverages
    }

    fn fill_overlapping_functional(
        &mut self,
        coverages: &mut BTreeSet<RankedSet<TypeEncoding>>,
        partial: &mut RankedSet<TypeEncoding>,
        depth_tag: i32,
    ) {
        if self.item_table[0].right == 0 && depth_tag >= 0 {
            coverages.insert(partial.clone());
            return;
        }
        if depth_tag <= 0 {
            return;
        }
        let item = self.choose_item();
        if item == 0 {
            return;
        }
        let mut cur = self.links[item].down;
        while cur != item {
            let (name, score) = self.overlapping_cover(cur, depth_tag);
            partial.insert(score, name);

            self.fill_overlapping_functional(coverages, partial, depth_tag - 1);

            if coverages.len() == self.max_output {
                self.hit_limit = true;
                self.overlapping_uncover(cur);
                return;
            }
            partial.erase(score, &name);
            self.overlapping_uncover(cur);
            cur = self.links[cur].down;
        }
    }

    /// Same result set as
    /// [`overlapping_coverages_functional`](Self::overlapping_coverages_functional),
    /// found with an explicit frame stack instead of recursion.
    pub fn overlapping_coverages_stack(&mut self, depth_limit: i32) -> BTreeSet<RankedSet<TypeEncoding>> {
        let mut coverages = BTreeSet::new();
        let mut partial = RankedSet::with_capacity(depth_limit.max(0) as usize);
        self.hit_limit = false;

        let mut frames: Vec<ExactFrame> = Vec::new();
        let mut depth_tag = depth_limit;

        'call: loop {
            if self.item_table[0].right == 0 && depth_tag >= 0 {
                coverages.insert(partial.clone());
            } else if depth_tag > 0 {
                if let Some(item) = self.first_live_column(self.choose_item()) {
                    let cur = self.links[item].down;
                    let (name, score) = self.overlapping_cover(cur, depth_tag);
                    partial.insert(score, name);
                    frames.push(ExactFrame {
                        item,
                        cur,
                        name,
                        score,
                        depth_limit: depth_tag,
                    });
                    depth_tag -= 1;
                    continue 'call;
                }
            }

            loop {
                let Some(frame) = frames.pop() else {
                    break 'call;
                };
                if coverages.len() == self.max_output {
                    self.hit_limit = true;
                    self.overlapping_uncover(frame.cur);
                    continue;
                }
                partial.erase(frame.score, &frame.name);
                self.overlapping_uncover(frame.cur);
                let next = self.links[frame.cur].down;
                if next == frame.item {
                    continue;
                }
                let (name, score) = self.overlapping_cover(next, frame.depth_limit);
                partial.insert(score, name);
                frames.push(ExactFrame {
                    item: frame.item,
                    cur: next,
                    name,
                    score,
                    depth_limit: frame.depth_limit,
                });
                depth_tag = frame.depth_limit - 1;
                continue 'call;
            }
        }

        coverages
    }

    /// `choose_item` returns the sentinel `0` both when no items remain and
    /// when the chosen column is unreachable; this turns that into the
    /// `Option` the stack drivers branch on.
    fn first_live_column(&self, chosen: usize) -> Option<usize> {
        if chosen == 0 { None } else { Some(chosen) }
    }
}

/// One pending activation of a recursive `fill_*` call: which item it is
/// branching over, which row is currently covered, the `(name, score)` that
/// covering contributed to the partial set, and the `depth_limit`/`depth_tag`
/// value this call was entered with (needed to recompute the child depth
/// when the call advances to the next option in the same column).
struct ExactFrame {
    item: usize,
    cur: usize,
    name: TypeEncoding,
    score: i32,
    depth_limit: i32,
}
