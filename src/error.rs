// Copyright 2019 The xi-editor Authors.
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

use thiserror::Error;

/// Errors surfaced by rope operations.
///
/// Operations are total over their documented preconditions; nothing here is
/// transient or retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RopeError {
    /// An index, offset, or range violates its precondition.
    #[error("offset {offset} out of bounds for rope of length {len}")]
    OutOfBounds { offset: usize, len: usize },

    /// A streaming read ended before the buffer was filled. Not fatal:
    /// `read` bytes were delivered and further reads are well-defined.
    #[error("end of input after reading {read} bytes")]
    EndOfInput { read: usize },
}
