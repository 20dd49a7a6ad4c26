/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Per-function call counters.

use super::GLFunc;

/// Table of call counts, one slot per [GLFunc].
#[derive(Clone, PartialEq, Eq)]
pub struct CallCounters {
    counts: [u64; GLFunc::COUNT],
}

impl Default for CallCounters {
    fn default() -> Self {
        CallCounters {
            counts: [0; GLFunc::COUNT],
        }
    }
}

impl CallCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, func: GLFunc) {
        self.counts[func.index()] += 1;
    }

    pub fn get(&self, func: GLFunc) -> u64 {
        self.counts[func.index()]
    }

    /// Zero every slot.
    pub fn reset(&mut self) {
        self.counts = [0; GLFunc::COUNT];
    }

    /// Sum of the counts for a group of functions, e.g.
    /// [GLFunc::DRAW_CALLS].
    pub fn sum(&self, funcs: &[GLFunc]) -> u64 {
        funcs.iter().map(|&func| self.get(func)).sum()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Functions that have been called at least once, with their counts, in
    /// index order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (GLFunc, u64)> + '_ {
        GLFunc::ALL
            .iter()
            .zip(self.counts.iter())
            .filter(|&(_, &count)| count != 0)
            .map(|(&func, &count)| (func, count))
    }
}

impl std::fmt::Debug for CallCounters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter_nonzero()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_and_reset() {
        let mut counters = CallCounters::new();
        assert_eq!(counters.total(), 0);

        counters.increment(GLFunc::Clear);
        counters.increment(GLFunc::Clear);
        counters.increment(GLFunc::DrawArrays);
        assert_eq!(counters.get(GLFunc::Clear), 2);
        assert_eq!(counters.get(GLFunc::DrawArrays), 1);
        assert_eq!(counters.get(GLFunc::Viewport), 0);
        assert_eq!(counters.total(), 3);
        assert_eq!(
            counters.iter_nonzero().collect::<Vec<_>>(),
            // Clear is declared before DrawArrays in the table.
            vec![(GLFunc::Clear, 2), (GLFunc::DrawArrays, 1)]
        );

        counters.reset();
        assert_eq!(counters, CallCounters::default());
        assert!(GLFunc::ALL.iter().all(|&func| counters.get(func) == 0));
    }

    #[test]
    fn sum_of_group() {
        let mut counters = CallCounters::new();
        counters.increment(GLFunc::DrawArrays);
        counters.increment(GLFunc::DrawElements);
        counters.increment(GLFunc::MultiDrawArrays);
        counters.increment(GLFunc::ReadPixels);
        assert_eq!(counters.sum(GLFunc::DRAW_CALLS), 3);
        assert_eq!(counters.sum(&[GLFunc::ReadPixels]), 1);
        assert_eq!(counters.sum(&[]), 0);
    }
}
