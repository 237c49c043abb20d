use crate::set::Set;
use std::hash::Hash;

/// Conversion of any collection of values into a [`Set`], dropping duplicates.
///
/// ```
/// use genset::ToSet;
/// let evens = (0..10).filter(|i| i % 2 == 0).to_set();
/// assert_eq!(evens.len(), 5);
/// assert_eq!([3, 1, 3, 2].to_set(), vec![1, 2, 3].to_set());
/// ```
pub trait ToSet<T> {
    fn to_set(self) -> Set<T>;
}

impl<Collection, T> ToSet<T> for Collection
where
    Collection: IntoIterator<Item = T>,
    T: Hash + Eq,
{
    fn to_set(self) -> Set<T> {
        self.into_iter().collect()
    }
}

#[cfg(test)]
mod test {
    use super::ToSet;
    use crate::set::Set;

    #[test]
    fn test_to_set() {
        let words = vec!["a", "b", "a"].to_set();
        assert_eq!(words, Set::from(["b", "a"]));

        let empty = Vec::<u8>::new().to_set();
        assert!(empty.is_empty());

        let chars = "hello".chars().to_set();
        assert_eq!(chars.len(), 4);
        assert!(chars.contains(&'l'));
    }
}
