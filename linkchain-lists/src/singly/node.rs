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

use core::fmt;
use core::mem::ManuallyDrop;
use core::ptr;

/// The successor slot of a [`Node`]. `None` means the node has no
/// successor. The `Box` is the only owner of the node it points to.
pub type Link<T> = Option<Box<Node<T>>>;

/// A node in the [`LinkedList`](../list/struct.LinkedList.html).
///
/// A node holds a value that is fixed at construction and an owning
/// link to the next node. Because the link can only hold another
/// `Node` or nothing, a node can never be linked to anything that is
/// not a node.
///
/// # Examples
/// ```
/// use linkchain::lists::singly::Node;
///
/// let mut first = Node::new("I am an instance of a Node!");
/// let second = Node::new("I am the next Node!");
/// assert!(first.set_next(Some(Box::new(second))).is_none());
///
/// assert_eq!(first.next().map(|n| *n.val()), Some("I am the next Node!"));
/// ```
pub struct Node<T> {
    pub(super) val: T,
    pub(super) next: Link<T>,
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        // each detached node is dropped with an empty link
        let mut link = self.next.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("val", &self.val)
            .field("has_next", &self.has_next())
            .finish()
    }
}

impl<T> Node<T> {
    /// Creates a node holding `val` with no successor.
    pub fn new(val: T) -> Node<T> {
        Node { val, next: None }
    }

    /// Returns a reference to the value held by this node.
    pub fn val(&self) -> &T {
        &self.val
    }

    /// Consumes the node and returns its value. Any successor still
    /// linked to this node is dropped along with it.
    pub fn into_val(mut self) -> T {
        drop(self.next.take());
        let node = ManuallyDrop::new(self);
        // `next` is already empty and `node` is never dropped, so `val`
        // is read out exactly once.
        unsafe { ptr::read(&node.val) }
    }

    /// Replaces the successor of this node with `next` and returns
    /// the link that was replaced.
    ///
    /// Passing `None` breaks the link. The previous successor (and
    /// everything reachable from it) is handed back rather than
    /// dropped so the caller can relink it; if the returned value is
    /// discarded that sub-chain is orphaned and freed.
    ///
    /// # Examples
    /// ```
    /// use linkchain::lists::singly::Node;
    ///
    /// let mut vanilla = Node::new("Vanilla");
    /// let mut strawberry = Node::new("Berry Tasty");
    /// strawberry.set_next(Some(Box::new(Node::new("Coconuts for Coconut"))));
    /// vanilla.set_next(Some(Box::new(strawberry)));
    ///
    /// let mut flavors = Vec::new();
    /// let mut cur = Some(&vanilla);
    /// while let Some(node) = cur {
    ///     flavors.push(*node.val());
    ///     cur = node.next();
    /// }
    /// assert_eq!(flavors, ["Vanilla", "Berry Tasty", "Coconuts for Coconut"]);
    ///
    /// let detached = vanilla.set_next(None);
    /// assert!(vanilla.next().is_none());
    /// assert_eq!(detached.map(|n| n.into_val()), Some("Berry Tasty"));
    /// ```
    pub fn set_next(&mut self, next: Link<T>) -> Link<T> {
        std::mem::replace(&mut self.next, next)
    }

    /// Returns a reference to the next node or `None` if this node
    /// is the tail.
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    /// Returns a mutable reference to the next node or `None` if
    /// this node is the tail.
    pub fn next_mut(&mut self) -> Option<&mut Node<T>> {
        self.next.as_deref_mut()
    }

    /// Detaches and returns the successor of this node, leaving this
    /// node without one.
    pub fn take_next(&mut self) -> Link<T> {
        self.next.take()
    }

    /// Returns true if this node has a successor.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}
