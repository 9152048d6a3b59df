/*
   Singly Linked List: A minimal forward-only linked list whose nodes
   exclusively own their successors. Elements can be pushed at
   either end and popped from the head.

   Copyright 2026 The linkchain Authors

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/

use crate::singly::{
    iter::IntoIter,
    iter::Iter,
    node::{Link, Node},
    render::Render,
};
use core::fmt;
use core::iter::FromIterator;
use log::trace;

/// A singly linked list that owns its nodes. Elements can be pushed
/// at the head or the tail and popped from the head. Traversal runs
/// from head to tail only.
///
/// Every node is owned by exactly one link: the list's head or the
/// `next` link of the node before it. The chain is therefore always
/// finite and acyclic, and popping the head hands its value back to
/// the caller while the node itself is freed.
///
/// # Getting Started
///
/// To get started add the linkchain dependency to Cargo.toml and the
/// use declaration in your source.
///
/// ```text
/// [dependencies]
/// linkchain = "0.1.0"
/// ```
///
/// ```
/// use linkchain::lists::LinkedList;
///
/// let mut list = LinkedList::<&str>::new();
/// list.push_head("summer");
/// list.push_head("spring");
/// list.push_tail("fall");
/// list.push_tail("winter");
///
/// assert_eq!(list.to_vec(), ["spring", "summer", "fall", "winter"]);
/// assert_eq!(list.pop_head(), Some("spring"));
/// assert_eq!(list.to_string(), "<head> summer fall winter <tail>");
/// ```
pub struct LinkedList<T> {
    pub(super) head: Link<T>,
    len: usize,
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.render(), f)
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    /// Appends every element of `iter` at the tail, in iteration
    /// order. The chain is walked to the tail once per call.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut cur = &mut self.head;
        while let Some(node) = cur {
            cur = &mut node.next;
        }
        let before = self.len;
        for elem in iter {
            let node = cur.insert(Box::new(Node::new(elem)));
            cur = &mut node.next;
            self.len += 1;
        }
        trace!("extend: appended {} at tail, len {}", self.len - before, self.len);
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> LinkedList<T> {
    /// Creates an empty linked list.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkchain::lists::LinkedList;
    /// let list = LinkedList::<u8>::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> LinkedList<T> {
        LinkedList { head: None, len: 0 }
    }

    /// Returns an iterator over the list from head to tail.
    ///
    /// The iterator borrows the list, so it can be created any
    /// number of times and yields the same sequence until the list
    /// is mutated.
    ///
    /// # Examples
    /// ```
    /// use linkchain::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.push_head(1);
    /// list.push_head(2);
    /// list.push_head(3);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<T> {
        Iter::new(self)
    }

    /// Returns the values of the list in chain order, from head to
    /// tail. The list is left unchanged.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use linkchain::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// assert!(list.to_vec().is_empty());
    ///
    /// list.push_tail(1);
    /// list.push_tail(2);
    /// assert_eq!(list.to_vec(), [1, 2]);
    /// assert_eq!(list.to_vec(), [1, 2]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        out.extend(self.iter().cloned());
        out
    }

    /// Returns a value that formats the list as `<head> a b c
    /// <tail>`, with the elements separated by single spaces. An
    /// empty list renders as `<head>  <tail>`.
    ///
    /// The list also implements [`Display`](core::fmt::Display) with
    /// the same output.
    ///
    /// # Examples
    /// ```
    /// use linkchain::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// assert_eq!(list.render().to_string(), "<head>  <tail>");
    ///
    /// list.push_tail(1);
    /// list.push_tail(2);
    /// assert_eq!(list.render().to_string(), "<head> 1 2 <tail>");
    /// ```
    pub fn render(&self) -> Render<T>
    where
        T: fmt::Display,
    {
        Render::new(self)
    }

    /// Removes and drops all the elements from this list.
    ///
    /// Nodes are released one at a time so that dropping a long list
    /// does not recurse through the chain.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use linkchain::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.push_head(1);
    /// list.push_head(2);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.head(), None);
    /// ```
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        if self.len > 0 {
            trace!("clear: released {} nodes", self.len);
        }
        self.len = 0;
    }

    /// Returns a reference to the front (head) of the list or `None`
    /// if the list is empty. This method simply calls
    /// [`self.head()`](#method.head)
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use linkchain::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn front(&self) -> Option<&T> {
        self.head()
    }

    /// Returns a reference to the head of the list or `None` if the
    /// list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use linkchain::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// assert_eq!(list.head(), None);
    ///
    /// list.push_tail(1);
    /// list.push_tail(2);
    /// assert_eq!(list.head(), Some(&1));
    /// ```
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.val)
    }

    /// Returns a reference to the head node or `None` if the list is
    /// empty. The rest of the chain can be walked with
    /// [`Node::next()`](../node/struct.Node.html#method.next).
    ///
    /// # Examples
    /// ```
    /// use linkchain::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.push_tail(1);
    /// list.push_tail(2);
    ///
    /// let head = list.head_node().unwrap();
    /// assert_eq!(head.val(), &1);
    /// assert_eq!(head.next().map(|n| *n.val()), Some(2));
    /// assert!(head.next().unwrap().next().is_none());
    /// ```
    pub fn head_node(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Returns true if the list is empty and false otherwise.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use linkchain::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// assert_eq!(list.is_empty(), true);
    ///
    /// list.push_head(1);
    /// assert_eq!(list.is_empty(), false);
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the list has a head node and false if the list
    /// is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use linkchain::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// assert_eq!(list.has_head(), false);
    /// list.push_head(1);
    /// assert_eq!(list.has_head(), true);
    /// list.pop_head();
    /// assert_eq!(list.has_head(), false);
    /// ```
    pub fn has_head(&self) -> bool {
        self.head.is_some()
    }

    /// Returns the number of elements in the list
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use linkchain::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// assert_eq!(list.len(), 0);
    ///
    /// list.push_head(1);
    /// list.push_tail(2);
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Adds an element to the front (head) of the list. This method
    /// simply calls [`self.push_head()`](#method.push_head)
    ///
    /// This operation should complete in *O*(*1*) time.
    pub fn push_front(&mut self, elem: T) {
        self.push_head(elem);
    }

    /// Adds an element to the back (tail) of the list. This method
    /// simply calls [`self.push_tail()`](#method.push_tail)
    ///
    /// This operation should complete in *O*(*n*) time.
    pub fn push_back(&mut self, elem: T) {
        self.push_tail(elem);
    }

    /// Removes and returns the value at the front (head) of the list
    /// or `None` if the list is empty. This method simply calls
    /// [`self.pop_head()`](#method.pop_head)
    ///
    /// This operation should complete in *O*(*1*) time.
    pub fn pop_front(&mut self) -> Option<T> {
        self.pop_head()
    }

    /// Adds an element to the head of the list. The previous head
    /// becomes the successor of the new node, so the last element
    /// pushed at the head is the first one traversed.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use linkchain::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.push_head(1);
    /// assert_eq!(list.head(), Some(&1));
    ///
    /// list.push_head(2);
    /// assert_eq!(list.head(), Some(&2));
    /// assert_eq!(list.to_vec(), [2, 1]);
    /// ```
    pub fn push_head(&mut self, elem: T) {
        let mut node = Box::new(Node::new(elem));
        node.set_next(self.head.take());
        self.head = Some(node);
        self.len += 1;
        trace!("push_head: len {}", self.len);
    }

    /// Adds an element to the tail of the list. The chain is walked
    /// from the head to the node without a successor and the new node
    /// is linked there. If the list is empty the new node becomes the
    /// head.
    ///
    /// This operation should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use linkchain::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.push_tail(1);
    /// list.push_tail(2);
    /// list.push_tail(3);
    /// assert_eq!(list.to_vec(), [1, 2, 3]);
    /// ```
    pub fn push_tail(&mut self, elem: T) {
        let mut cur = &mut self.head;
        let mut walked: usize = 0;
        while let Some(node) = cur {
            cur = &mut node.next;
            walked += 1;
        }
        *cur = Some(Box::new(Node::new(elem)));
        self.len += 1;
        trace!("push_tail: walked {} nodes, len {}", walked, self.len);
    }

    /// Removes and returns the value at the head of the list or
    /// `None` if the list is empty. An empty list is left unchanged.
    ///
    /// The successor of the removed node becomes the new head and the
    /// removed node is freed.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use linkchain::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// assert_eq!(list.pop_head(), None);
    ///
    /// list.push_head(1);
    /// list.push_head(2);
    /// assert_eq!(list.pop_head(), Some(2));
    /// assert_eq!(list.pop_head(), Some(1));
    /// assert_eq!(list.pop_head(), None);
    /// ```
    pub fn pop_head(&mut self) -> Option<T> {
        let mut node = self.head.take()?;
        self.head = node.take_next();
        self.len -= 1;
        trace!("pop_head: len {}", self.len);
        Some((*node).into_val())
    }

    /// Returns true if the list contains an element equal to `x`.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use linkchain::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.push_tail(1);
    /// list.push_tail(2);
    ///
    /// assert!(list.contains(&2));
    /// assert!(!list.contains(&3));
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == x)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    macro_rules! assert_empty {
        ($ll:ident) => {
            assert!($ll.head.is_none());
            assert_eq!($ll.len(), 0);
            assert!($ll.is_empty());
            assert!($ll.to_vec().is_empty());
        };
    }

    /// Walks the chain through the node links and checks it against
    /// `expected` and the cached length.
    macro_rules! assert_chain {
        ($ll:ident, $expected:expr) => {
            let expected = $expected;
            let mut walked = Vec::new();
            let mut cur = $ll.head_node();
            while let Some(node) = cur {
                walked.push(*node.val());
                cur = node.next();
            }
            assert_eq!(walked, expected);
            assert_eq!($ll.len(), expected.len());
            assert_eq!($ll.iter().count(), expected.len());
        };
    }

    #[test]
    fn test_new() {
        init();
        let ll = LinkedList::<u8>::new();
        assert_empty!(ll);
        let ll = LinkedList::<u8>::default();
        assert_empty!(ll);
    }

    #[test]
    fn test_push_head() {
        init();
        let mut ll = LinkedList::<u8>::new();
        ll.push_head(11);
        assert_chain!(ll, vec![11]);
        ll.push_head(12);
        assert_chain!(ll, vec![12, 11]);
        ll.push_head(13);
        assert_chain!(ll, vec![13, 12, 11]);

        ll.clear();
        assert_empty!(ll);
    }

    #[test]
    fn test_push_head_reverses_insertion_order() {
        init();
        let mut ll = LinkedList::<u8>::new();
        for i in 0..10 {
            ll.push_front(i);
        }
        let expected: Vec<u8> = (0..10).rev().collect();
        assert_chain!(ll, expected);
    }

    #[test]
    fn test_push_tail() {
        init();
        let mut ll = LinkedList::<u8>::new();
        ll.push_tail(33);
        assert_chain!(ll, vec![33]);
        ll.push_tail(44);
        assert_chain!(ll, vec![33, 44]);
        ll.push_back(55);
        assert_chain!(ll, vec![33, 44, 55]);

        ll.clear();
        assert_empty!(ll);
    }

    #[test]
    fn test_pop_head() {
        init();
        let mut ll = LinkedList::<u8>::new();
        assert_eq!(ll.pop_head(), None);
        assert_empty!(ll);

        ll.push_head(11);
        assert_eq!(ll.pop_head(), Some(11));
        assert_empty!(ll);

        ll.push_tail(11);
        ll.push_tail(12);
        ll.push_tail(13);
        assert_eq!(ll.pop_head(), Some(11));
        assert_chain!(ll, vec![12, 13]);
        assert_eq!(ll.pop_front(), Some(12));
        assert_chain!(ll, vec![13]);
        assert_eq!(ll.pop_head(), Some(13));
        assert_empty!(ll);
        assert_eq!(ll.pop_head(), None);
        assert_empty!(ll);
    }

    #[test]
    fn test_pop_head_keeps_relative_order() {
        init();
        let mut ll = LinkedList::<u8>::new();
        ll.push_tail(2);
        ll.push_head(1);
        ll.push_tail(3);
        ll.push_head(0);
        ll.push_tail(4);

        assert_eq!(ll.pop_head(), Some(0));
        assert!(!ll.contains(&0));
        assert_chain!(ll, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_mixed_len() {
        init();
        let mut ll = LinkedList::<u16>::new();
        for i in 0..50 {
            if i % 3 == 0 {
                ll.push_head(i);
            } else {
                ll.push_tail(i);
            }
            assert_eq!(ll.len(), (i + 1) as usize);
        }
        assert_eq!(ll.to_vec().len(), 50);
        assert_eq!(ll.iter().count(), 50);
    }

    #[test]
    fn test_seasons() {
        init();
        let mut seasons = LinkedList::<&str>::new();
        assert_eq!(seasons.to_vec(), Vec::<&str>::new());
        assert_eq!(seasons.to_string(), "<head>  <tail>");

        seasons.push_head("summer");
        assert_eq!(seasons.to_vec(), ["summer"]);
        seasons.push_head("spring");
        assert_eq!(seasons.to_vec(), ["spring", "summer"]);
        seasons.push_tail("fall");
        assert_eq!(seasons.to_vec(), ["spring", "summer", "fall"]);
        seasons.push_tail("winter");
        assert_eq!(seasons.to_vec(), ["spring", "summer", "fall", "winter"]);
        assert_eq!(
            seasons.to_string(),
            "<head> spring summer fall winter <tail>"
        );

        assert_eq!(seasons.pop_head(), Some("spring"));
        assert_eq!(seasons.to_vec(), ["summer", "fall", "winter"]);
        assert_eq!(seasons.to_string(), "<head> summer fall winter <tail>");
    }

    #[test]
    fn test_head() {
        init();
        let mut ll = LinkedList::<u8>::new();
        assert_eq!(ll.head(), None);
        assert_eq!(ll.front(), None);
        assert!(!ll.has_head());
        assert!(ll.head_node().is_none());

        ll.push_tail(1);
        ll.push_tail(2);
        assert_eq!(ll.head(), Some(&1));
        assert!(ll.has_head());
        assert_chain!(ll, vec![1, 2]);
    }

    #[test]
    fn test_to_vec_is_repeatable() {
        init();
        let mut ll = LinkedList::<u8>::new();
        ll.push_tail(1);
        ll.push_tail(2);
        let first = ll.to_vec();
        let second = ll.to_vec();
        assert_eq!(first, second);
        assert_eq!(ll.len(), 2);
    }

    #[test]
    fn test_contains() {
        init();
        let mut ll = LinkedList::<u8>::new();
        assert!(!ll.contains(&1));
        ll.push_head(1);
        ll.push_head(2);
        assert!(ll.contains(&1));
        assert!(ll.contains(&2));
        assert!(!ll.contains(&3));
    }

    #[test]
    fn test_clear() {
        init();
        let mut ll = LinkedList::<u8>::new();
        ll.clear();
        assert_empty!(ll);
        for i in 0..10 {
            ll.push_head(i);
        }
        ll.clear();
        assert_empty!(ll);
        ll.push_tail(1);
        assert_chain!(ll, vec![1]);
    }

    #[test]
    fn test_extend() {
        init();
        let mut ll = LinkedList::<u8>::new();
        ll.extend(vec![1, 2]);
        assert_chain!(ll, vec![1, 2]);
        ll.push_head(0);
        ll.extend(3..5);
        assert_chain!(ll, vec![0, 1, 2, 3, 4]);
        ll.extend(Vec::new());
        assert_chain!(ll, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_from_iter_and_clone() {
        init();
        let ll: LinkedList<u8> = (1..=4).collect();
        assert_chain!(ll, vec![1, 2, 3, 4]);

        let mut cloned = ll.clone();
        assert_eq!(cloned, ll);
        cloned.pop_head();
        assert_ne!(cloned, ll);
        assert_chain!(ll, vec![1, 2, 3, 4]);
        assert_chain!(cloned, vec![2, 3, 4]);
    }

    #[test]
    fn test_eq() {
        init();
        let a: LinkedList<u8> = vec![1, 2, 3].into_iter().collect();
        let mut b = LinkedList::new();
        b.push_head(3);
        b.push_head(2);
        b.push_head(1);
        assert_eq!(a, b);

        let c: LinkedList<u8> = vec![1, 2].into_iter().collect();
        assert_ne!(a, c);
        assert_eq!(LinkedList::<u8>::new(), LinkedList::<u8>::new());
    }

    #[test]
    fn test_debug() {
        init();
        let mut ll = LinkedList::<u8>::new();
        assert_eq!(format!("{:?}", ll), "[]");
        ll.push_tail(1);
        ll.push_tail(2);
        assert_eq!(format!("{:?}", ll), "[1, 2]");
    }

    #[test]
    fn test_drop_long_list() {
        init();
        let mut ll = LinkedList::<u32>::new();
        for i in 0..200_000 {
            ll.push_head(i);
        }
        assert_eq!(ll.len(), 200_000);
        drop(ll);
    }

    #[test]
    fn test_drop_releases_values() {
        use std::rc::Rc;

        init();
        let tracker = Rc::new(());
        let mut ll = LinkedList::new();
        for _ in 0..5 {
            ll.push_tail(Rc::clone(&tracker));
        }
        assert_eq!(Rc::strong_count(&tracker), 6);

        let popped = ll.pop_head();
        assert_eq!(Rc::strong_count(&tracker), 6);
        drop(popped);
        assert_eq!(Rc::strong_count(&tracker), 5);

        drop(ll);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn test_long_list_eq_and_debug() {
        init();
        let a: LinkedList<u32> = (0..200_000).collect();
        let b: LinkedList<u32> = (0..200_000).collect();
        assert!(a == b);
        let head = a.head_node().unwrap();
        assert_eq!(format!("{:?}", head), "Node { val: 0, has_next: true }");
        assert_eq!(format!("{:?}", b).len(), format!("{:?}", a).len());
    }

    #[test]
    fn test_pop_head_then_drop_long_list() {
        init();
        let mut ll: LinkedList<u32> = (0..200_000).collect();
        assert_eq!(ll.pop_head(), Some(0));
        assert_eq!(ll.head(), Some(&1));
        assert_eq!(ll.len(), 199_999);
        drop(ll);
    }
}
