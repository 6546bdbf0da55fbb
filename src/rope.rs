// Copyright 2018 The xi-editor Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The public rope value type.
//!
//! A [`Rope`] stores a long byte sequence as a balanced tree and is fully
//! persistent: every operation returns a new rope, old ropes remain valid
//! and unchanged, and the two share every subtree the operation did not
//! touch. Holding on to old roots is therefore a cheap way to keep
//! snapshots, e.g. for an undo history.
//!
//! ```
//! use byterope::Rope;
//!
//! let base = Rope::from("hello");
//! let edited = base.insert(5, ", world")?.append("!");
//! assert_eq!(String::from(&edited), "hello, world!");
//! assert_eq!(String::from(&base), "hello");
//! # Ok::<(), byterope::RopeError>(())
//! ```

use std::fmt;
use std::ops::{Add, Bound, RangeBounds};

use crate::compare;
use crate::error::RopeError;
use crate::reader::Reader;
use crate::tree::{Chunks, Node, MAX_LEAF};

/// A persistent rope over bytes.
///
/// Cloning is O(1); all mutators take `&self` and return a fresh rope.
#[derive(Clone, Default)]
pub struct Rope {
    root: Node,
}

impl Rope {
    /// Returns the empty rope.
    pub fn new() -> Rope {
        Rope::default()
    }

    #[inline]
    pub(crate) fn from_root(root: Node) -> Rope {
        Rope { root }
    }

    #[inline]
    pub(crate) fn root(&self) -> &Node {
        &self.root
    }

    /// The length in bytes. O(1), cached at every node.
    #[inline]
    pub fn len(&self) -> usize {
        self.root.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The byte at `offset`.
    pub fn byte(&self, offset: usize) -> Result<u8, RopeError> {
        if offset >= self.len() {
            return Err(RopeError::OutOfBounds { offset, len: self.len() });
        }
        Ok(self.root.byte_at(offset))
    }

    /// Returns the concatenation of `self` and `other`.
    ///
    /// Small ropes collapse into a single leaf; otherwise the result is a
    /// new concat node over the two shared inputs, rebuilt if it fails the
    /// balance check.
    pub fn append(&self, other: impl Into<Rope>) -> Rope {
        Rope::from_root(Node::concat(self.root.clone(), other.into().root))
    }

    /// Splits into the ropes covering `[0, at)` and `[at, len)`.
    ///
    /// Both results share their subtrees with `self`; only the spine down to
    /// the split point is rebuilt.
    pub fn split(&self, at: usize) -> Result<(Rope, Rope), RopeError> {
        if at > self.len() {
            return Err(RopeError::OutOfBounds { offset: at, len: self.len() });
        }
        let (left, right) = self.root.split(at);
        Ok((Rope::from_root(left), Rope::from_root(right)))
    }

    /// Returns a new rope with `other` inserted at byte offset `at`.
    pub fn insert(&self, at: usize, other: impl Into<Rope>) -> Result<Rope, RopeError> {
        let other = other.into();
        if at == 0 {
            return Ok(other.append(self.clone()));
        }
        if at == self.len() {
            return Ok(self.append(other));
        }
        let (left, right) = self.split(at)?;
        Ok(left.append(other).append(right))
    }

    /// Returns a new rope with `len` bytes removed starting at `offset`.
    pub fn delete(&self, offset: usize, len: usize) -> Result<Rope, RopeError> {
        if offset > self.len() || len > self.len() - offset {
            return Err(RopeError::OutOfBounds {
                offset: offset.saturating_add(len),
                len: self.len(),
            });
        }
        if len == 0 || offset == self.len() {
            return Ok(self.clone());
        }
        let (left, rest) = self.root.split(offset);
        let (_, right) = rest.split(len);
        Ok(Rope::from_root(Node::concat(left, right)))
    }

    /// Materializes the bytes in `range` as a contiguous vector.
    ///
    /// The end bound is clamped to the rope length; a start bound past the
    /// clamped end is an error.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Result<Vec<u8>, RopeError> {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => self.len(),
        };
        let end = end.min(self.len());
        if start > end {
            return Err(RopeError::OutOfBounds { offset: start, len: self.len() });
        }
        let mut out = vec![0; end - start];
        if !out.is_empty() {
            // the clamped range lies inside the rope, so this cannot come up short
            let n = self.read_at(&mut out, start)?;
            debug_assert_eq!(n, out.len());
        }
        Ok(out)
    }

    /// Materializes the whole rope as a contiguous vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        self.root.write_into(&mut out);
        out
    }

    /// Iterates over the rope's leaf byte runs in order, without copying.
    pub fn chunks(&self) -> Chunks<'_> {
        self.root.chunks()
    }

    /// Returns a [`Reader`] over this rope, positioned at offset 0.
    pub fn reader(&self) -> Reader {
        Reader::new(self.clone())
    }

    /// Whether the tree currently satisfies the balance criterion.
    ///
    /// Operations restore balance on their own; this is an observation
    /// hook, paired with [`rebalance`](Rope::rebalance).
    pub fn is_balanced(&self) -> bool {
        self.root.is_balanced()
    }

    /// Returns a balanced rope with the same content.
    ///
    /// Usually unnecessary: composition rebalances implicitly. Useful after
    /// generating many ad-hoc ropes whose roots are long-lived.
    pub fn rebalance(&self) -> Rope {
        Rope::from_root(self.root.rebalance())
    }

    /// Returns `true` if the two ropes share the same root node.
    ///
    /// A cheap sufficient (not necessary) condition for equality.
    pub fn ptr_eq(&self, other: &Rope) -> bool {
        self.root.ptr_eq(&other.root)
    }
}

impl From<&[u8]> for Rope {
    fn from(bytes: &[u8]) -> Rope {
        Rope::from_root(Node::from_bytes(bytes))
    }
}

impl From<Vec<u8>> for Rope {
    fn from(bytes: Vec<u8>) -> Rope {
        if bytes.len() <= MAX_LEAF {
            Rope::from_root(Node::from_leaf(bytes.into_boxed_slice()))
        } else {
            Rope::from(bytes.as_slice())
        }
    }
}

impl From<&str> for Rope {
    fn from(s: &str) -> Rope {
        Rope::from(s.as_bytes())
    }
}

impl From<String> for Rope {
    fn from(s: String) -> Rope {
        Rope::from(s.into_bytes())
    }
}

impl From<&Rope> for String {
    fn from(rope: &Rope) -> String {
        String::from_utf8_lossy(&rope.to_bytes()).into_owned()
    }
}

impl Add for Rope {
    type Output = Rope;

    fn add(self, rhs: Rope) -> Rope {
        Rope::from_root(Node::concat(self.root, rhs.root))
    }
}

impl PartialEq for Rope {
    fn eq(&self, other: &Rope) -> bool {
        compare::rope_eq(self, other)
    }
}

impl Eq for Rope {}

impl fmt::Display for Rope {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.to_bytes()))
    }
}

impl fmt::Debug for Rope {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Rope({:?})", String::from_utf8_lossy(&self.to_bytes()))
    }
}
