use crate::desc::{
    Descriptor, TYPE_BOOLEAN, TYPE_FALSE, TYPE_SINT16, TYPE_SINT32, TYPE_SINT64, TYPE_TRUE,
    TYPE_UINT16, TYPE_UINT32, TYPE_UINT64, TYPE_UNICODE_TEXT,
    TYPE_UTF16_EXTERNAL_REPRESENTATION, TYPE_UTF8_TEXT,
};
use crate::error::{Error, Result};
use crate::unpack::{fixed_payload, unpack_as_integer, unpack_as_string};

/// Coerces to `bool`.
///
/// `typeTrue`/`typeFalse` carry the value in the tag itself. A `typeBoolean`
/// flag byte follows the C convention, any non-zero value is true. Integers
/// accept exactly 1 and 0, and text accepts "true"/"yes"/"false"/"no"
/// case-insensitively.
pub fn unpack_as_boolean(desc: &Descriptor) -> Result<bool> {
    let unsupported = || Error::UnsupportedCoercion {
        dtype: desc.type_tag(),
        target: "bool",
    };

    match desc {
        Descriptor::Scalar { dtype, data } => match *dtype {
            TYPE_TRUE => {
                fixed_payload::<0>(*dtype, data)?;
                Ok(true)
            }
            TYPE_FALSE => {
                fixed_payload::<0>(*dtype, data)?;
                Ok(false)
            }
            TYPE_BOOLEAN => {
                let [flag] = fixed_payload(*dtype, data)?;
                Ok(flag != 0)
            }
            TYPE_SINT16 | TYPE_SINT32 | TYPE_SINT64 => match unpack_as_integer::<i64>(desc)? {
                1 => Ok(true),
                0 => Ok(false),
                _ => Err(unsupported()),
            },
            TYPE_UINT16 | TYPE_UINT32 | TYPE_UINT64 => match unpack_as_integer::<u64>(desc)? {
                1 => Ok(true),
                0 => Ok(false),
                _ => Err(unsupported()),
            },
            TYPE_UTF8_TEXT | TYPE_UTF16_EXTERNAL_REPRESENTATION | TYPE_UNICODE_TEXT => {
                let text = unpack_as_string(desc)?;
                if text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("yes") {
                    Ok(true)
                } else if text.eq_ignore_ascii_case("false") || text.eq_ignore_ascii_case("no") {
                    Ok(false)
                } else {
                    Err(unsupported())
                }
            }
            _ => Err(unsupported()),
        },
        _ => Err(unsupported()),
    }
}
