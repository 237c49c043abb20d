//! Generic sets of hashable values, with the usual set algebra.
//!
//! ```
//! use genset::Set;
//!
//! let a = Set::from_slice(&[1, 2, 3]);
//! let b = Set::from_slice(&[2, 4]);
//!
//! assert!(a.union(&b).is_equal(&Set::from_slice(&[1, 2, 3, 4])));
//! assert_eq!(a.inter(&b), Set::from([2]));
//! assert_eq!(&a - &b, Set::from([1, 3]));
//! assert!(Set::from([1, 3]).is_proper_subset(&a));
//! ```
//!
//! A [`Set`] is not synchronized: sharing a set that is being modified between threads requires
//! external locking.

pub mod ops;
pub mod params;
pub mod seq;
pub mod set;

pub use params::{EnvParam, ParamError};
pub use seq::ToSet;
pub use set::{Set, SetError};
