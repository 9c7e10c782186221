use crate::desc::{
    Descriptor, TYPE_IEEE32_BIT_FLOATING_POINT, TYPE_IEEE64_BIT_FLOATING_POINT, TYPE_SINT16,
    TYPE_SINT32, TYPE_SINT64, TYPE_UINT16, TYPE_UINT32, TYPE_UINT64, TYPE_UNICODE_TEXT,
    TYPE_UTF16_EXTERNAL_REPRESENTATION, TYPE_UTF8_TEXT,
};
use crate::error::{Error, Result};
use crate::unpack::{fixed_payload, unpack_as_integer, unpack_as_string};

/// Coerces to `f64`. Single precision widens losslessly; integers round the
/// way `as f64` rounds at the extremes of the 64-bit range.
pub fn unpack_as_double(desc: &Descriptor) -> Result<f64> {
    let unsupported = || Error::UnsupportedCoercion {
        dtype: desc.type_tag(),
        target: "f64",
    };

    match desc {
        Descriptor::Scalar { dtype, data } => match *dtype {
            TYPE_IEEE64_BIT_FLOATING_POINT => {
                Ok(f64::from_be_bytes(fixed_payload(*dtype, data)?))
            }
            TYPE_IEEE32_BIT_FLOATING_POINT => {
                Ok(f64::from(f32::from_be_bytes(fixed_payload(*dtype, data)?)))
            }
            TYPE_SINT16 | TYPE_SINT32 | TYPE_SINT64 => {
                Ok(unpack_as_integer::<i64>(desc)? as f64)
            }
            TYPE_UINT16 | TYPE_UINT32 | TYPE_UINT64 => {
                Ok(unpack_as_integer::<u64>(desc)? as f64)
            }
            TYPE_UTF8_TEXT | TYPE_UTF16_EXTERNAL_REPRESENTATION | TYPE_UNICODE_TEXT => {
                unpack_as_string(desc)?.parse::<f64>().map_err(|_| unsupported())
            }
            _ => Err(unsupported()),
        },
        _ => Err(unsupported()),
    }
}
