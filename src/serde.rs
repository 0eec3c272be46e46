//! `serde` support, using the plain sequence representation.

use core::{fmt, marker::PhantomData};

use ::serde::{
    de::{Deserialize, Deserializer, SeqAccess, Visitor},
    ser::{Serialize, Serializer},
};

use crate::SimpleVector;

/// Upper bound on the number of bytes preallocated from an untrusted length
/// hint.
const MAX_PREALLOCATED_BYTES: usize = 1024 * 1024;

impl<T: Serialize> Serialize for SimpleVector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SimpleVector<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(SequenceVisitor(PhantomData))
    }
}

struct SequenceVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for SequenceVisitor<T> {
    type Value = SimpleVector<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let hint = seq.size_hint().unwrap_or(0);
        let limit = MAX_PREALLOCATED_BYTES / core::mem::size_of::<T>().max(1);

        let mut values = SimpleVector::with_capacity(hint.min(limit));
        while let Some(value) = seq.next_element()? {
            values.push_back(value);
        }
        Ok(values)
    }
}
