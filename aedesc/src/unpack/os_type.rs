use crate::desc::{
    Descriptor, OSType, TYPE_ABSOLUTE_ORDINAL, TYPE_ENUMERATED, TYPE_KEYWORD, TYPE_PROPERTY,
    TYPE_TYPE,
};
use crate::error::{Error, Result};
use crate::unpack::fixed_payload;

/// Coerces the type-code family (`type`, `prop`, `keyw`) to the four-char
/// code in its payload. The missing-value sentinel lands here too: it is a
/// `typeType` scalar carrying `msng`.
pub fn unpack_as_type(desc: &Descriptor) -> Result<OSType> {
    extract_code(desc, &[TYPE_TYPE, TYPE_PROPERTY, TYPE_KEYWORD], "type code")
}

/// Coerces the enumeration family (`enum`, `abso`) to the four-char code in
/// its payload.
pub fn unpack_as_enum(desc: &Descriptor) -> Result<OSType> {
    extract_code(desc, &[TYPE_ENUMERATED, TYPE_ABSOLUTE_ORDINAL], "enum code")
}

fn extract_code(desc: &Descriptor, accepted: &[OSType], target: &'static str) -> Result<OSType> {
    match desc {
        Descriptor::Scalar { dtype, data } if accepted.contains(dtype) => {
            Ok(OSType::new(fixed_payload(*dtype, data)?))
        }
        _ => Err(Error::UnsupportedCoercion {
            dtype: desc.type_tag(),
            target,
        }),
    }
}
