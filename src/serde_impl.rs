use core::fmt;
use core::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, Error as _, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::GrowVec;

impl<T> Serialize for GrowVec<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl<'de, T> Deserialize<'de> for GrowVec<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor<'de, T>(PhantomData<(&'de (), T)>);

        impl<'de, T> Visitor<'de> for ValueVisitor<'de, T>
        where
            T: Deserialize<'de>,
        {
            type Value = GrowVec<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a sequence")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut values = GrowVec::new();
                // Cap the hint so a hostile length cannot force a huge
                // allocation up front.
                let hint = seq.size_hint().unwrap_or(0).min(4096);
                values.reserve(hint).map_err(A::Error::custom)?;

                while let Some(value) = seq.next_element()? {
                    values.push(value).map_err(A::Error::custom)?;
                }

                Ok(values)
            }
        }
        deserializer.deserialize_seq(ValueVisitor(PhantomData))
    }
}
