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
use crate::singly::{list::LinkedList, node::Node};
use core::fmt;

/// A forward iterator over the values of the
/// [`LinkedList`](LinkedList), from head to tail.
///
/// This struct is created by the [`.iter()`](LinkedList#method.iter)
/// of the [`LinkedList`](LinkedList).
///
/// # Examples
/// ```
/// use linkchain::lists::LinkedList;
/// use linkchain::lists::singly::Iter;
///
/// let mut list = LinkedList::<u8>::new();
/// list.push_head(1);
/// list.push_head(2);
/// list.push_head(3);
///
/// let mut iter: Iter<u8> = list.iter();
/// assert_eq!(iter.next(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next(), None);
/// ```
pub struct Iter<'a, T> {
    cursor: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T: fmt::Debug> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("current", &self.cursor.map(|node| &node.val))
            .field("remaining", &self.remaining)
            .finish()
    }
}

/// An iterator that moves the values out of the [`LinkedList`] from
/// head to tail.
///
/// This struct is created by the `into_iter()` method of the
/// [`LinkedList`](LinkedList).
#[derive(Debug)]
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a LinkedList<T>) -> Iter<'a, T> {
        Iter {
            cursor: list.head.as_deref(),
            remaining: list.len(),
        }
    }
}

impl<T> IntoIter<T> {
    pub(crate) fn new(list: LinkedList<T>) -> IntoIter<T> {
        IntoIter { list }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        self.cursor.map(|node| {
            self.cursor = node.next.as_deref();
            self.remaining -= 1;
            &node.val
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.list.pop_head()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}
