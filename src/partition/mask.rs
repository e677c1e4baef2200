use std::ops::{BitAnd, BitOr, Not};

/// One boolean per shape of a batch, selecting a subset of it.
///
/// Masks built from the same batch can be combined with `&`, `|` and `!`. Combining masks of
/// different lengths is a programming error and panics.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Mask {
    bits: Vec<bool>,
}

impl Mask {
    #[cfg(test)]
    pub fn all(len: usize) -> Self {
        Self {
            bits: vec![true; len],
        }
    }

    #[cfg(test)]
    pub fn none(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Number of selected shapes
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }

    fn zip_with(&self, other: &Mask, op: impl Fn(bool, bool) -> bool) -> Mask {
        assert_eq!(
            self.len(),
            other.len(),
            "combining masks of different lengths ({} and {})",
            self.len(),
            other.len()
        );
        Mask {
            bits: self
                .bits
                .iter()
                .zip(&other.bits)
                .map(|(a, b)| op(*a, *b))
                .collect(),
        }
    }
}

impl From<Vec<bool>> for Mask {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl FromIterator<bool> for Mask {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl Extend<bool> for Mask {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        self.bits.extend(iter);
    }
}

impl BitAnd for &Mask {
    type Output = Mask;
    fn bitand(self, rhs: &Mask) -> Mask {
        self.zip_with(rhs, |a, b| a && b)
    }
}

impl BitOr for &Mask {
    type Output = Mask;
    fn bitor(self, rhs: &Mask) -> Mask {
        self.zip_with(rhs, |a, b| a || b)
    }
}

impl Not for &Mask {
    type Output = Mask;
    fn not(self) -> Mask {
        Mask {
            bits: self.bits.iter().map(|b| !b).collect(),
        }
    }
}

impl BitAnd for Mask {
    type Output = Mask;
    fn bitand(self, rhs: Mask) -> Mask {
        &self & &rhs
    }
}

impl BitOr for Mask {
    type Output = Mask;
    fn bitor(self, rhs: Mask) -> Mask {
        &self | &rhs
    }
}

impl Not for Mask {
    type Output = Mask;
    fn not(mut self) -> Mask {
        self.bits.iter_mut().for_each(|b| *b = !*b);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_algebra() {
        let a = Mask::from(vec![true, true, false, false]);
        let b = Mask::from(vec![true, false, true, false]);
        assert_eq!(&a & &b, Mask::from(vec![true, false, false, false]));
        assert_eq!(&a | &b, Mask::from(vec![true, true, true, false]));
        assert_eq!(!&a, Mask::from(vec![false, false, true, true]));
        // straddling = a & b, strictly a = a & !b
        assert_eq!(a.clone() & !b.clone(), Mask::from(vec![false, true, false, false]));
        assert_eq!((&a & &b).count(), 1);
    }

    #[test]
    #[should_panic(expected = "combining masks of different lengths")]
    fn mismatched_lengths_panic() {
        let _ = &Mask::all(3) & &Mask::none(2);
    }

    #[test]
    fn constructors() {
        assert_eq!(Mask::all(2).count(), 2);
        assert_eq!(Mask::none(2).count(), 0);
        assert_eq!(Mask::none(2).get(1), Some(false));
        assert_eq!(Mask::none(2).get(2), None);
        assert!(Mask::default().is_empty());
    }
}
