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

//! Content comparison between ropes.
//!
//! Two ropes with different internal shapes can hold the same bytes, so
//! equality walks both leaf sequences in lockstep, comparing runs aligned to
//! whichever side's current leaf ends first. This gives `memcmp`-sized
//! comparisons instead of byte-at-a-time work, with the same result.

use crate::rope::Rope;

pub(crate) fn rope_eq(a: &Rope, b: &Rope) -> bool {
    if a.ptr_eq(b) {
        return true;
    }
    if a.len() != b.len() {
        return false;
    }
    let mut chunks_a = a.chunks();
    let mut chunks_b = b.chunks();
    let mut run_a: &[u8] = &[];
    let mut run_b: &[u8] = &[];
    loop {
        if run_a.is_empty() {
            run_a = match chunks_a.next() {
                Some(chunk) => chunk,
                // lengths match, so both sides exhaust together
                None => return true,
            };
        }
        if run_b.is_empty() {
            run_b = match chunks_b.next() {
                Some(chunk) => chunk,
                None => return true,
            };
        }
        let n = run_a.len().min(run_b.len());
        if run_a[..n] != run_b[..n] {
            return false;
        }
        run_a = &run_a[n..];
        run_b = &run_b[n..];
    }
}
