//! Minimal lazily-growing bit set used to carry a set of "reason" indices
//! alongside polynomials through algebraic operations.

use std::fmt;

const WORD_BITS: usize = 32;

/// A variable-length sequence of bits, growing lazily in 32-bit words.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReasonSet {
    words: Vec<u32>,
}

impl ReasonSet {
    pub fn empty() -> Self {
        Self { words: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    pub fn set(&mut self, i: usize) {
        let word = i / WORD_BITS;
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        self.words[word] |= 1 << (i % WORD_BITS);
    }

    pub fn get(&self, i: usize) -> bool {
        let word = i / WORD_BITS;
        self.words.get(word).is_some_and(|w| w & (1 << (i % WORD_BITS)) != 0)
    }

    pub fn union(&self, other: &Self) -> Self {
        let len = self.words.len().max(other.words.len());
        let mut words = Vec::with_capacity(len);
        for idx in 0..len {
            let a = self.words.get(idx).copied().unwrap_or(0);
            let b = other.words.get(idx).copied().unwrap_or(0);
            words.push(a | b);
        }
        Self { words }
    }

    pub fn union_in_place(&mut self, other: &Self) {
        if other.words.len() > self.words.len() {
            self.words.resize(other.words.len(), 0);
        }
        for (idx, w) in other.words.iter().enumerate() {
            self.words[idx] |= w;
        }
    }

    /// `self` is a subset of `other`: every bit set in `self` is also set in `other`.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.words.iter().enumerate().all(|(idx, w)| {
            let o = other.words.get(idx).copied().unwrap_or(0);
            w & !o == 0
        })
    }

    pub fn first_set_bit(&self) -> Option<usize> {
        self.iter().next()
    }

    /// Forward iteration over set bit positions.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(word_idx, &word)| {
            (0..WORD_BITS).filter_map(move |bit| {
                if word & (1 << bit) != 0 {
                    Some(word_idx * WORD_BITS + bit)
                } else {
                    None
                }
            })
        })
    }
}

impl fmt::Display for ReasonSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (idx, bit) in self.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{bit}")?;
        }
        write!(f, "}}")
    }
}

impl FromIterator<usize> for ReasonSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = ReasonSet::empty();
        for i in iter {
            set.set(i);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_roundtrip() {
        let mut s = ReasonSet::empty();
        s.set(5);
        s.set(40);
        assert!(s.get(5));
        assert!(s.get(40));
        assert!(!s.get(6));
    }

    #[test]
    fn union_combines_bits() {
        let a: ReasonSet = [1, 2, 3].into_iter().collect();
        let b: ReasonSet = [3, 4].into_iter().collect();
        let u = a.union(&b);
        for i in [1, 2, 3, 4] {
            assert!(u.get(i));
        }
        assert!(!u.get(5));
    }

    #[test]
    fn subset_test() {
        let a: ReasonSet = [1, 2].into_iter().collect();
        let b: ReasonSet = [1, 2, 3].into_iter().collect();
        assert!(a.is_subset_of(&b));
        assert!(!b.is_subset_of(&a));
    }

    #[test]
    fn first_set_bit_and_iteration_order() {
        let s: ReasonSet = [10, 2, 70].into_iter().collect();
        assert_eq!(s.first_set_bit(), Some(2));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![2, 10, 70]);
    }

    #[test]
    fn empty_set_has_no_bits() {
        let s = ReasonSet::empty();
        assert!(s.is_empty());
        assert_eq!(s.first_set_bit(), None);
    }
}
