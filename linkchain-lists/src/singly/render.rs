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
use crate::singly::list::LinkedList;
use core::fmt;

const HEAD_MARKER: &str = "<head>";
const TAIL_MARKER: &str = "<tail>";

/// Formats a [`LinkedList`] for people to read, as
/// `<head> a b c <tail>`.
///
/// The values are written in chain order separated by single spaces,
/// between the head and tail markers. The output is not meant to be
/// parsed back into a list.
///
/// This struct is created by the
/// [`.render()`](LinkedList#method.render) method of the
/// [`LinkedList`](LinkedList). It borrows the list and does no I/O,
/// so the caller decides where the text goes.
///
/// # Examples
/// ```
/// use linkchain::lists::LinkedList;
///
/// let mut list = LinkedList::<&str>::new();
/// list.push_tail("fall");
/// list.push_head("summer");
/// println!("{}", list.render());
/// assert_eq!(format!("{}", list.render()), "<head> summer fall <tail>");
/// ```
#[derive(Debug)]
pub struct Render<'a, T> {
    list: &'a LinkedList<T>,
}

impl<'a, T> Render<'a, T> {
    pub(crate) fn new(list: &'a LinkedList<T>) -> Render<'a, T> {
        Render { list }
    }
}

impl<'a, T: fmt::Display> fmt::Display for Render<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", HEAD_MARKER)?;
        let mut iter = self.list.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for val in iter {
                write!(f, " {}", val)?;
            }
        }
        write!(f, " {}", TAIL_MARKER)
    }
}
