use crate::desc::{
    Descriptor, TYPE_BOOLEAN, TYPE_FALSE, TYPE_IEEE32_BIT_FLOATING_POINT,
    TYPE_IEEE64_BIT_FLOATING_POINT, TYPE_SINT16, TYPE_SINT32, TYPE_SINT64, TYPE_TRUE,
    TYPE_UINT16, TYPE_UINT32, TYPE_UINT64, TYPE_UNICODE_TEXT, TYPE_UTF16_EXTERNAL_REPRESENTATION,
    TYPE_UTF8_TEXT,
};
use crate::error::{Error, Result};
use crate::unpack::{fixed_payload, unpack_as_boolean, unpack_as_string};
use num_traits::NumCast;
use std::any;
use std::str::FromStr;

/// Coerces to any primitive integer width. Native-width payloads are decoded
/// big-endian then range-checked; a value that does not fit `T` exactly is a
/// failed coercion, never a wraparound.
pub fn unpack_as_integer<T: NumCast + FromStr>(desc: &Descriptor) -> Result<T> {
    let unsupported = || Error::UnsupportedCoercion {
        dtype: desc.type_tag(),
        target: any::type_name::<T>(),
    };

    let int: Option<T> = match desc {
        Descriptor::Scalar { dtype, data } => match *dtype {
            TYPE_SINT16 => num_traits::cast(i16::from_be_bytes(fixed_payload(*dtype, data)?)),
            TYPE_SINT32 => num_traits::cast(i32::from_be_bytes(fixed_payload(*dtype, data)?)),
            TYPE_SINT64 => num_traits::cast(i64::from_be_bytes(fixed_payload(*dtype, data)?)),
            TYPE_UINT16 => num_traits::cast(u16::from_be_bytes(fixed_payload(*dtype, data)?)),
            TYPE_UINT32 => num_traits::cast(u32::from_be_bytes(fixed_payload(*dtype, data)?)),
            TYPE_UINT64 => num_traits::cast(u64::from_be_bytes(fixed_payload(*dtype, data)?)),
            TYPE_TRUE | TYPE_FALSE | TYPE_BOOLEAN => {
                num_traits::cast(unpack_as_boolean(desc)? as u8)
            }
            TYPE_IEEE32_BIT_FLOATING_POINT => {
                /* Widen via Into; `f64::from` is ambiguous with `NumCast::from` in scope. */
                exact_from_f64(f32::from_be_bytes(fixed_payload(*dtype, data)?).into())
            }
            TYPE_IEEE64_BIT_FLOATING_POINT => {
                exact_from_f64(f64::from_be_bytes(fixed_payload(*dtype, data)?))
            }
            TYPE_UTF8_TEXT | TYPE_UTF16_EXTERNAL_REPRESENTATION | TYPE_UNICODE_TEXT => {
                unpack_as_string(desc)?.parse::<T>().ok()
            }
            _ => return Err(unsupported()),
        },
        _ => return Err(unsupported()),
    };
    int.ok_or_else(unsupported)
}

/// Integral float values only, range-checked. `2.0` coerces; `2.5`, NaN, and
/// the infinities do not.
fn exact_from_f64<T: NumCast>(f: f64) -> Option<T> {
    if f.fract() != 0.0 {
        return None;
    }
    num_traits::cast(f)
}

pub fn unpack_as_i16(desc: &Descriptor) -> Result<i16> {
    unpack_as_integer(desc)
}

pub fn unpack_as_i32(desc: &Descriptor) -> Result<i32> {
    unpack_as_integer(desc)
}

pub fn unpack_as_i64(desc: &Descriptor) -> Result<i64> {
    unpack_as_integer(desc)
}

pub fn unpack_as_u16(desc: &Descriptor) -> Result<u16> {
    unpack_as_integer(desc)
}

pub fn unpack_as_u32(desc: &Descriptor) -> Result<u32> {
    unpack_as_integer(desc)
}

pub fn unpack_as_u64(desc: &Descriptor) -> Result<u64> {
    unpack_as_integer(desc)
}
