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

//! A persistent rope for long byte sequences.
//!
//! Every operation returns a new [`Rope`] that shares unchanged subtrees
//! with its inputs; existing ropes are never modified. Ropes can be read
//! concurrently from any number of threads without synchronization.

pub(crate) mod compare;
pub mod error;
pub mod reader;
pub mod rope;
#[cfg(feature = "serde")]
mod serde_impls;
pub mod tree;

pub use crate::error::RopeError;
pub use crate::reader::Reader;
pub use crate::rope::Rope;
pub use crate::tree::Chunks;
