//! Ordered refinement after a primary sort.

use crate::query::Query;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cmp::Ordering;
use sequin_core::BufferCursor;

/// A query whose buffer has been primarily sorted.
///
/// Alongside the buffer the handle keeps a rank per element: two elements
/// share a rank exactly when every key applied so far considers them equal.
/// Each `then_by` call stably sorts by (rank, new key), so the primary
/// `order_by` key keeps dominating and later keys only break the ties the
/// earlier ones leave. Chaining N refinements behaves like one stable
/// multi-key sort with keys in application order.
///
/// Refinement builds a fresh buffer; a query derived from this handle
/// before a `then_by` keeps the order it saw.
pub struct Ordered<T> {
    buffer: Rc<Vec<T>>,
    ranks: Vec<usize>,
}

impl<T: Clone> Ordered<T> {
    /// Sorts the data with the given primary comparator.
    ///
    /// The primary pass is unstable; ties are in unspecified order until a
    /// refinement pins them down.
    pub(crate) fn sort<F>(mut data: Vec<T>, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering,
    {
        data.sort_unstable_by(&compare);

        let mut ranks = Vec::with_capacity(data.len());
        let mut rank = 0;
        for i in 0..data.len() {
            if i > 0 && compare(&data[i - 1], &data[i]) != Ordering::Equal {
                rank += 1;
            }
            ranks.push(rank);
        }

        Self {
            buffer: Rc::new(data),
            ranks,
        }
    }

    /// Breaks remaining ties by the given key, ascending.
    pub fn then_by<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.refine(move |a, b| key(a).cmp(&key(b)))
    }

    /// Breaks remaining ties by the given key, descending.
    pub fn then_by_descending<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.refine(move |a, b| key(b).cmp(&key(a)))
    }

    fn refine<F>(self, next: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let buf = self.buffer.as_ref();
        let ranks = &self.ranks;

        // Stable, so elements equal under the whole chain keep their
        // current relative order.
        let mut order: Vec<usize> = (0..buf.len()).collect();
        order.sort_by(|&i, &j| ranks[i].cmp(&ranks[j]).then_with(|| next(&buf[i], &buf[j])));

        let mut data = Vec::with_capacity(buf.len());
        let mut new_ranks = Vec::with_capacity(buf.len());
        let mut rank = 0;
        for (pos, &i) in order.iter().enumerate() {
            if pos > 0 {
                let prev = order[pos - 1];
                if ranks[prev] != ranks[i] || next(&buf[prev], &buf[i]) != Ordering::Equal {
                    rank += 1;
                }
            }
            new_ranks.push(rank);
            data.push(buf[i].clone());
        }

        Self {
            buffer: Rc::new(data),
            ranks: new_ranks,
        }
    }

    /// Returns a query over the ordered buffer.
    pub fn query(&self) -> Query<BufferCursor<T>> {
        Query::over_buffer(self.buffer.clone())
    }

    /// Copies the ordered elements into a vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.buffer.as_ref().clone()
    }
}

#[cfg(test)]
mod tests {
    use crate::query::from;
    use alloc::vec::Vec;

    #[test]
    fn test_then_by_breaks_ties_only() {
        // (department, name): the primary key keeps dominating after the
        // refinement.
        let data = [
            ("sales", "carol"),
            ("eng", "bob"),
            ("sales", "alice"),
            ("eng", "alice"),
        ];
        let sorted = from(&data)
            .order_by(|r: &(&str, &str)| r.0)
            .then_by(|r: &(&str, &str)| r.1)
            .to_vec();
        assert_eq!(
            sorted,
            [
                ("eng", "alice"),
                ("eng", "bob"),
                ("sales", "alice"),
                ("sales", "carol"),
            ]
        );
    }

    #[test]
    fn test_then_by_descending() {
        let data = [(1, 10), (2, 20), (1, 30), (2, 40)];
        let sorted = from(&data)
            .order_by(|r: &(i32, i32)| r.0)
            .then_by_descending(|r: &(i32, i32)| r.1)
            .to_vec();
        assert_eq!(sorted, [(1, 30), (1, 10), (2, 40), (2, 20)]);
    }

    #[test]
    fn test_chained_refinements_priority_order() {
        let data = [(1, 1, 2), (1, 2, 1), (1, 1, 1), (2, 1, 1)];
        let sorted = from(&data)
            .order_by(|r: &(i32, i32, i32)| r.0)
            .then_by(|r: &(i32, i32, i32)| r.1)
            .then_by(|r: &(i32, i32, i32)| r.2)
            .to_vec();
        assert_eq!(sorted, [(1, 1, 1), (1, 1, 2), (1, 2, 1), (2, 1, 1)]);
    }

    #[test]
    fn test_refinement_does_not_disturb_earlier_handles() {
        let data = [(1, "b"), (1, "a"), (2, "c")];
        let primary = from(&data).order_by(|r: &(i32, &str)| r.0);
        let before = primary.query();
        let before_vec = before.to_vec();

        let refined = primary.then_by(|r: &(i32, &str)| r.1);

        // The earlier handle keeps exactly the order it saw.
        assert_eq!(before.to_vec(), before_vec);
        assert_eq!(refined.to_vec(), [(1, "a"), (1, "b"), (2, "c")]);
    }

    #[test]
    fn test_ordered_query_feeds_further_operators() {
        let data = [4, 1, 3, 2];
        let evens: Vec<i32> = from(&data)
            .order_by(|x| *x)
            .query()
            .filter(|x| x % 2 == 0)
            .to_vec();
        assert_eq!(evens, [2, 4]);
    }

    #[test]
    fn test_ordered_over_borrowed_elements() {
        // Element types borrowing from a shorter-lived owner still sort;
        // nothing in the chain demands 'static data.
        let owned = [
            alloc::string::String::from("bb"),
            alloc::string::String::from("a"),
        ];
        let refs: Vec<&str> = owned.iter().map(|s| s.as_str()).collect();
        let sorted = from(&refs).order_by(|s: &&str| s.len()).to_vec();
        assert_eq!(sorted, ["a", "bb"]);
    }
}
