//! A minimal singly linked list whose nodes own their successors.

/// A singly linked list that supports insertion at either end,
/// removal at the head and forward traversal.
pub mod lists {
    pub use linkchain_lists::singly::list::LinkedList;
    /// This module contains structs specific to the [`LinkedList`]
    pub mod singly {
        pub use linkchain_lists::singly::iter::IntoIter;
        pub use linkchain_lists::singly::iter::Iter;
        pub use linkchain_lists::singly::node::Link;
        pub use linkchain_lists::singly::node::Node;
        pub use linkchain_lists::singly::render::Render;
    }
}
