use crate::desc::{
    AEKeyword, DescType, MISSING_VALUE, TYPE_AE_LIST, TYPE_FALSE, TYPE_NULL, TYPE_TRUE, TYPE_TYPE,
};

mod flatten;
mod unflatten;
pub use unflatten::*;

/// One unit of inter-process data: a type tag plus a payload.
///
/// A `Scalar` payload is an opaque byte buffer whose interpretation is fixed
/// by its tag; the containers nest further descriptors. Values are immutable
/// once built.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Descriptor {
    Scalar {
        dtype: DescType,
        data: Vec<u8>,
    },
    /// An ordered, heterogeneous sequence. Always tagged `typeAEList`.
    List { items: Vec<Descriptor> },
    /// A keyed mapping with unique keys, in insertion order. Tagged
    /// `typeAERecord` or an application-defined type.
    Record {
        dtype: DescType,
        fields: Vec<(AEKeyword, Descriptor)>,
    },
}

impl Descriptor {
    pub fn type_tag(&self) -> DescType {
        match self {
            Self::Scalar { dtype, .. } => *dtype,
            Self::List { .. } => TYPE_AE_LIST,
            Self::Record { dtype, .. } => *dtype,
        }
    }

    /// The `null` sentinel: no payload, no value.
    pub fn null() -> Self {
        Self::Scalar {
            dtype: TYPE_NULL,
            data: vec![],
        }
    }

    /// The `true`/`false` sentinels. Their tags carry the value; the payload
    /// stays empty.
    pub fn boolean(b: bool) -> Self {
        let dtype = if b { TYPE_TRUE } else { TYPE_FALSE };
        Self::Scalar {
            dtype,
            data: vec![],
        }
    }

    /// The missing-value sentinel: a `typeType` scalar carrying the reserved
    /// `msng` code. Scripting clients send it where `null` would lose the
    /// distinction between "no reply" and "a reply of nothing".
    pub fn missing_value() -> Self {
        Self::Scalar {
            dtype: TYPE_TYPE,
            data: MISSING_VALUE.to_bytes().to_vec(),
        }
    }

    pub fn is_missing_value(&self) -> bool {
        match self {
            Self::Scalar { dtype, data } => {
                *dtype == TYPE_TYPE && data[..] == MISSING_VALUE.to_bytes()
            }
            _ => false,
        }
    }
}
