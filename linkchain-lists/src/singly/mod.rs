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

//! A singly linked list that owns its nodes. Each node holds a value
//! and an owning link to the next node, so the chain is always
//! acyclic and every node has exactly one owner: either the list's
//! head or the node before it.
//!
//! Pushing at the head and popping the head complete in constant
//! time. Pushing at the tail walks the chain once.
//!
pub mod iter;
pub mod list;
pub mod node;
pub mod render;
