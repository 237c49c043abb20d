//! Integration of [`Set`] with the standard traits: iteration, collection, operators and formatting.
//!
//! The set operators are implemented on references and always produce a new set:
//!
//! | operator  | method                |
//! |-----------|-----------------------|
//! | `&a \| &b` | [`Set::union`]       |
//! | `&a & &b` | [`Set::inter`]        |
//! | `&a - &b` | [`Set::diff`]         |
//! | `&a ^ &b` | [`Set::sym_diff`]     |

use crate::set::Set;
use itertools::Itertools;
use std::fmt::{Debug, Display, Error, Formatter};
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

impl<T: Hash + Eq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl<T: Hash + Eq> Eq for Set<T> {}

impl<T: Hash + Eq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Set::new();
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.add(v);
        }
    }
}

impl<'a, T: Hash + Eq + Copy + 'a> Extend<&'a T> for Set<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(vals: [T; N]) -> Self {
        vals.into_iter().collect()
    }
}

impl<T: Hash + Eq> From<Vec<T>> for Set<T> {
    fn from(vals: Vec<T>) -> Self {
        vals.into_iter().collect()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = hashbrown::hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_inner().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = hashbrown::hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner().iter()
    }
}

impl<T: Hash + Eq + Clone> BitOr<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitor(self, rhs: &Set<T>) -> Set<T> {
        self.union(rhs)
    }
}

impl<T: Hash + Eq + Clone> BitAnd<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitand(self, rhs: &Set<T>) -> Set<T> {
        self.inter(rhs)
    }
}

impl<T: Hash + Eq + Clone> Sub<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn sub(self, rhs: &Set<T>) -> Set<T> {
        self.diff(rhs)
    }
}

impl<T: Hash + Eq + Clone> BitXor<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitxor(self, rhs: &Set<T>) -> Set<T> {
        self.sym_diff(rhs)
    }
}

impl<T: Debug> Debug for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{{{:?}}}", self.inner().iter().format(", "))
    }
}

impl<T: Display> Display for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{{{}}}", self.inner().iter().format(", "))
    }
}
