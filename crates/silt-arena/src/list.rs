//! Ordered, cursor-addressed list with O(1) erase and predecessor access.
//!
//! [`BlockList`] is a doubly-linked list stored in a `Vec` of nodes and
//! linked by index rather than by pointer. Slot 0 is a permanent sentinel
//! marking "one past the last element"; the list is circular through it,
//! so the sentinel's `next` is the first element and its `prev` is the
//! last. Erased slots go onto a free-index pool and are handed back out
//! by later [`push_back`](BlockList::push_back) calls.
//!
//! ```text
//!   sentinel ──next──▶ a ──▶ b ──▶ c ──▶ sentinel
//!   sentinel ◀──prev── a ◀── b ◀── c ◀── sentinel
//! ```

use std::fmt;

/// Index of the sentinel slot.
const SENTINEL: usize = 0;

/// A position in a [`BlockList`].
///
/// Cursors are plain indices: they stay valid across inserts and across
/// erasure of *other* elements. A cursor to an erased element must not
/// be used again, because its slot may be recycled for a later
/// `push_back`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor(usize);

impl Cursor {
    /// Whether this cursor is the sentinel ("one past the last") position.
    pub fn is_end(&self) -> bool {
        self.0 == SENTINEL
    }
}

#[derive(Clone)]
struct Node<T> {
    /// `None` for the sentinel and for erased slots awaiting reuse.
    value: Option<T>,
    prev: usize,
    next: usize,
}

impl<T> Node<T> {
    fn sentinel() -> Self {
        Self {
            value: None,
            prev: SENTINEL,
            next: SENTINEL,
        }
    }
}

/// An ordered sequence with O(1) append, erase-by-cursor, and
/// predecessor lookup.
#[derive(Clone)]
pub struct BlockList<T> {
    nodes: Vec<Node<T>>,
    /// Indices of erased slots available for reuse.
    free_slots: Vec<usize>,
    len: usize,
}

impl<T> BlockList<T> {
    /// Create an empty list holding only the sentinel.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty list with room for `capacity` elements before
    /// the node storage reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.saturating_add(1));
        nodes.push(Node::sentinel());
        Self {
            nodes,
            free_slots: Vec::new(),
            len: 0,
        }
    }

    /// Append `value` after the current last element.
    pub fn push_back(&mut self, value: T) -> Cursor {
        let tail = self.nodes[SENTINEL].prev;
        let node = Node {
            value: Some(value),
            prev: tail,
            next: SENTINEL,
        };
        let idx = if let Some(reuse) = self.free_slots.pop() {
            self.nodes[reuse] = node;
            reuse
        } else {
            self.nodes.push(node);
            self.nodes.len() - 1
        };
        self.nodes[tail].next = idx;
        self.nodes[SENTINEL].prev = idx;
        self.len += 1;
        Cursor(idx)
    }

    /// Cursor to the first element, or [`end`](Self::end) if empty.
    pub fn begin(&self) -> Cursor {
        Cursor(self.nodes[SENTINEL].next)
    }

    /// The sentinel cursor, one past the last element.
    pub fn end(&self) -> Cursor {
        Cursor(SENTINEL)
    }

    /// Cursor to the last element, or `None` if empty.
    pub fn last(&self) -> Option<Cursor> {
        let tail = self.nodes[SENTINEL].prev;
        (tail != SENTINEL).then_some(Cursor(tail))
    }

    /// The element after `at`.
    ///
    /// Advancing the last element yields [`end`](Self::end); advancing
    /// the sentinel wraps to [`begin`](Self::begin).
    pub fn next(&self, at: Cursor) -> Cursor {
        Cursor(self.nodes[at.0].next)
    }

    /// The element before `at`.
    ///
    /// The predecessor of the first element is the sentinel, and the
    /// predecessor of the sentinel is the last element.
    pub fn prev(&self, at: Cursor) -> Cursor {
        Cursor(self.nodes[at.0].prev)
    }

    /// The element at `at`, or `None` for the sentinel.
    pub fn get(&self, at: Cursor) -> Option<&T> {
        self.nodes.get(at.0)?.value.as_ref()
    }

    /// Mutable access to the element at `at`, or `None` for the sentinel.
    pub fn get_mut(&mut self, at: Cursor) -> Option<&mut T> {
        self.nodes.get_mut(at.0)?.value.as_mut()
    }

    /// Remove the element at `at` and return a cursor to its successor.
    ///
    /// The predecessor and successor are re-linked to each other; when
    /// `at` was the first element its successor becomes the new first.
    ///
    /// # Panics
    ///
    /// Panics if `at` is the sentinel or an already-erased slot.
    pub fn erase(&mut self, at: Cursor) -> Cursor {
        self.remove(at).1
    }

    /// Remove the element at `at`, returning it together with a cursor
    /// to its successor.
    ///
    /// # Panics
    ///
    /// Panics if `at` is the sentinel or an already-erased slot.
    pub fn remove(&mut self, at: Cursor) -> (T, Cursor) {
        let node = &mut self.nodes[at.0];
        let value = match node.value.take() {
            Some(v) => v,
            None => panic!("BlockList::erase on sentinel or erased slot {}", at.0),
        };
        let (prev, next) = (node.prev, node.next);
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.free_slots.push(at.0);
        self.len -= 1;
        (value, Cursor(next))
    }

    /// Number of live elements (the sentinel is not counted).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove every element, keeping the node storage for reuse.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[SENTINEL] = Node::sentinel();
        self.free_slots.clear();
        self.len = 0;
    }

    /// Iterate over the elements from first to last.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            at: self.nodes[SENTINEL].next,
            remaining: self.len,
        }
    }
}

impl<T> Default for BlockList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for BlockList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for BlockList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BlockList<T> {}

impl<T> Extend<T> for BlockList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for BlockList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a BlockList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward iterator over a [`BlockList`], created by [`BlockList::iter`].
pub struct Iter<'a, T> {
    list: &'a BlockList<T>,
    at: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.at == SENTINEL {
            return None;
        }
        let node = &self.list.nodes[self.at];
        self.at = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(list: &BlockList<u32>) -> Vec<u32> {
        list.iter().copied().collect()
    }

    #[test]
    fn new_list_is_empty_with_begin_at_end() {
        let list: BlockList<u32> = BlockList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.begin(), list.end());
        assert!(list.last().is_none());
        assert!(list.get(list.end()).is_none());
    }

    #[test]
    fn push_back_preserves_order() {
        let list: BlockList<u32> = [1, 2, 3].into_iter().collect();
        assert_eq!(values(&list), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(list.begin()), Some(&1));
        assert_eq!(list.last().and_then(|c| list.get(c)), Some(&3));
    }

    #[test]
    fn cursor_walk_forward_and_back() {
        let list: BlockList<u32> = [10, 20, 30].into_iter().collect();
        let first = list.begin();
        let second = list.next(first);
        let third = list.next(second);
        assert_eq!(list.get(second), Some(&20));
        assert!(list.next(third).is_end());
        assert_eq!(list.prev(third), second);
        assert!(list.prev(first).is_end());
        assert_eq!(list.prev(list.end()), third);
    }

    #[test]
    fn erase_middle_relinks_neighbours() {
        let mut list: BlockList<u32> = [1, 2, 3].into_iter().collect();
        let mid = list.next(list.begin());
        let after = list.erase(mid);
        assert_eq!(list.get(after), Some(&3));
        assert_eq!(list.prev(after), list.begin());
        assert_eq!(values(&list), vec![1, 3]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn erase_first_moves_begin() {
        let mut list: BlockList<u32> = [1, 2].into_iter().collect();
        let after = list.erase(list.begin());
        assert_eq!(after, list.begin());
        assert_eq!(list.get(list.begin()), Some(&2));
        assert!(list.prev(list.begin()).is_end());
    }

    #[test]
    fn erase_last_returns_end() {
        let mut list: BlockList<u32> = [1, 2].into_iter().collect();
        let last = list.last().unwrap();
        let after = list.erase(last);
        assert!(after.is_end());
        assert_eq!(values(&list), vec![1]);
    }

    #[test]
    fn erase_only_element_empties_list() {
        let mut list: BlockList<u32> = [7].into_iter().collect();
        let after = list.erase(list.begin());
        assert!(after.is_end());
        assert!(list.is_empty());
        assert_eq!(list.begin(), list.end());
    }

    #[test]
    fn erased_slots_are_recycled() {
        let mut list: BlockList<u32> = [1, 2, 3].into_iter().collect();
        let slots_before = list.nodes.len();
        let mid = list.next(list.begin());
        list.erase(mid);
        list.push_back(4);
        assert_eq!(list.nodes.len(), slots_before);
        assert_eq!(values(&list), vec![1, 3, 4]);
    }

    #[test]
    fn remove_returns_value() {
        let mut list: BlockList<u32> = [5, 6].into_iter().collect();
        let (v, next) = list.remove(list.begin());
        assert_eq!(v, 5);
        assert_eq!(list.get(next), Some(&6));
    }

    #[test]
    #[should_panic(expected = "sentinel or erased slot")]
    fn erase_sentinel_panics() {
        let mut list: BlockList<u32> = [1].into_iter().collect();
        let end = list.end();
        list.erase(end);
    }

    #[test]
    #[should_panic(expected = "sentinel or erased slot")]
    fn double_erase_panics() {
        let mut list: BlockList<u32> = [1, 2].into_iter().collect();
        let first = list.begin();
        list.erase(first);
        list.erase(first);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut list: BlockList<u32> = [1, 2].into_iter().collect();
        let last = list.last().unwrap();
        *list.get_mut(last).unwrap() += 40;
        assert_eq!(values(&list), vec![1, 42]);
    }

    #[test]
    fn clear_resets_to_sentinel_only() {
        let mut list: BlockList<u32> = [1, 2, 3].into_iter().collect();
        list.clear();
        assert!(list.is_empty());
        assert!(list.begin().is_end());
        list.push_back(9);
        assert_eq!(values(&list), vec![9]);
    }

    #[test]
    fn debug_lists_live_values() {
        let mut list: BlockList<u32> = [1, 2, 3].into_iter().collect();
        list.erase(list.begin());
        assert_eq!(format!("{list:?}"), "[2, 3]");
    }

    #[test]
    fn iter_reports_exact_size() {
        let list: BlockList<u32> = [1, 2, 3].into_iter().collect();
        let mut it = list.iter();
        assert_eq!(it.len(), 3);
        it.next();
        assert_eq!(it.len(), 2);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Clone, Debug)]
        enum Op {
            Push(u32),
            /// Erase the element at this position (modulo length).
            Erase(usize),
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                any::<u32>().prop_map(Op::Push),
                any::<usize>().prop_map(Op::Erase),
            ]
        }

        proptest! {
            #[test]
            fn matches_vec_model(ops in proptest::collection::vec(op_strategy(), 0..64)) {
                let mut list = BlockList::new();
                let mut model: Vec<u32> = Vec::new();
                for op in ops {
                    match op {
                        Op::Push(v) => {
                            list.push_back(v);
                            model.push(v);
                        }
                        Op::Erase(pos) => {
                            if model.is_empty() {
                                continue;
                            }
                            let pos = pos % model.len();
                            let mut at = list.begin();
                            for _ in 0..pos {
                                at = list.next(at);
                            }
                            let next = list.erase(at);
                            model.remove(pos);
                            prop_assert_eq!(list.get(next), model.get(pos));
                        }
                    }
                    prop_assert_eq!(list.len(), model.len());
                    prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), model.clone());
                }
            }

            #[test]
            fn prev_inverts_next(n in 1usize..32) {
                let list: BlockList<usize> = (0..n).collect();
                let mut at = list.begin();
                while !at.is_end() {
                    prop_assert_eq!(list.prev(list.next(at)), at);
                    at = list.next(at);
                }
            }
        }
    }
}
