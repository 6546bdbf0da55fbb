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

//! Streaming byte reads over a rope.

use std::io;

use crate::error::RopeError;
use crate::rope::Rope;

impl Rope {
    /// Fills `buf` with bytes starting at `offset`.
    ///
    /// Copies `min(buf.len(), len - offset)` bytes, walking consecutive
    /// leaves until the buffer is full or the rope ends. Returns the number
    /// of bytes copied, or [`RopeError::EndOfInput`] carrying that number
    /// whenever it is less than `buf.len()`. An offset at or past the end
    /// reads zero bytes; it is not an error to ask again.
    pub fn read_at(&self, buf: &mut [u8], offset: usize) -> Result<usize, RopeError> {
        let mut read = 0;
        while read < buf.len() && offset + read < self.len() {
            let (chunk, start) = self.root().leaf_at(offset + read);
            let available = &chunk[start..];
            let take = available.len().min(buf.len() - read);
            buf[read..read + take].copy_from_slice(&available[..take]);
            read += take;
        }
        if read < buf.len() {
            Err(RopeError::EndOfInput { read })
        } else {
            Ok(read)
        }
    }
}

/// A stateful cursor that reads a rope's bytes sequentially.
///
/// The rope itself is immutable and freely shared; all the reader adds is a
/// byte offset. It is therefore not meant to be shared between threads
/// mid-read; clone it instead, which copies the offset and bumps a refcount.
#[derive(Clone)]
pub struct Reader {
    rope: Rope,
    offset: usize,
}

impl Reader {
    pub(crate) fn new(rope: Rope) -> Reader {
        Reader { rope, offset: 0 }
    }

    /// The rope this reader traverses.
    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// The offset the next [`read`](Reader::read) starts from.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Reads into `buf` from the current offset.
    ///
    /// Delegates to [`Rope::read_at`] and advances the offset by the number
    /// of bytes read, but only on success: a short read reports
    /// [`RopeError::EndOfInput`] and leaves the offset where it was, so
    /// retrying with a smaller buffer re-reads the same position.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, RopeError> {
        let read = self.rope.read_at(buf, self.offset)?;
        self.offset += read;
        Ok(read)
    }
}

impl io::Read for Reader {
    /// `std::io` interop: a short read is an `Ok` partial read that advances
    /// the offset, matching the trait contract rather than the stricter
    /// inherent [`Reader::read`].
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match Reader::read(self, buf) {
            Ok(read) => Ok(read),
            Err(RopeError::EndOfInput { read }) => {
                self.offset += read;
                Ok(read)
            }
            Err(err) => Err(io::Error::new(io::ErrorKind::InvalidInput, err)),
        }
    }
}
