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

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::rope::Rope;

// Ropes serialize by content; the tree shape is an implementation detail
// and is rebuilt (balanced) on deserialization.

impl Serialize for Rope {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.to_bytes())
    }
}

impl<'de> Deserialize<'de> for Rope {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_bytes(RopeVisitor)
    }
}

struct RopeVisitor;

impl<'de> Visitor<'de> for RopeVisitor {
    type Value = Rope;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a byte array")
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Rope, E>
    where
        E: de::Error,
    {
        Ok(Rope::from(v))
    }

    fn visit_byte_buf<E>(self, v: Vec<u8>) -> Result<Rope, E>
    where
        E: de::Error,
    {
        Ok(Rope::from(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Rope, E>
    where
        E: de::Error,
    {
        Ok(Rope::from(v))
    }

    // formats without a native bytes type (e.g. JSON) hand back a sequence
    fn visit_seq<A>(self, mut seq: A) -> Result<Rope, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(byte) = seq.next_element::<u8>()? {
            bytes.push(byte);
        }
        Ok(Rope::from(bytes))
    }
}
