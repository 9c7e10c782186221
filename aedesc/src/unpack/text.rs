use crate::desc::{
    DescType, Descriptor, TYPE_SINT16, TYPE_SINT32, TYPE_SINT64, TYPE_UINT16, TYPE_UINT32,
    TYPE_UINT64, TYPE_UNICODE_TEXT, TYPE_UTF16_EXTERNAL_REPRESENTATION, TYPE_UTF8_TEXT,
};
use crate::error::{Error, Result};
use crate::unpack::unpack_as_integer;

/// Coerces to `String`. Integer tags render in base 10; the result always
/// re-packs as a `typeUTF8Text` scalar coercing back to the same string.
pub fn unpack_as_string(desc: &Descriptor) -> Result<String> {
    let unsupported = || Error::UnsupportedCoercion {
        dtype: desc.type_tag(),
        target: "String",
    };

    match desc {
        Descriptor::Scalar { dtype, data } => match *dtype {
            TYPE_UTF8_TEXT => String::from_utf8(data.clone())
                .map_err(|_| Error::corrupt("text payload is not valid UTF-8")),
            TYPE_UTF16_EXTERNAL_REPRESENTATION | TYPE_UNICODE_TEXT => {
                decode_utf16(*dtype, data)
            }
            TYPE_SINT16 | TYPE_SINT32 | TYPE_SINT64 => {
                Ok(unpack_as_integer::<i64>(desc)?.to_string())
            }
            TYPE_UINT16 | TYPE_UINT32 | TYPE_UINT64 => {
                Ok(unpack_as_integer::<u64>(desc)?.to_string())
            }
            _ => Err(unsupported()),
        },
        _ => Err(unsupported()),
    }
}

/// UTF-16 with an optional byte order mark: `FE FF` reads as big-endian and
/// `FF FE` as little-endian, with the mark stripped. Without one, the
/// external representation (`ut16`) defaults to big-endian while legacy
/// `utxt` payloads carry the byte order of the machine that packed them.
fn decode_utf16(dtype: DescType, data: &[u8]) -> Result<String> {
    if data.is_empty() {
        return Ok(String::new());
    }
    if data.len() % 2 != 0 {
        return Err(Error::corrupt(format!(
            "UTF-16 payload has odd byte count {}",
            data.len()
        )));
    }

    let (big_endian, body) = match [data[0], data[1]] {
        [0xFE, 0xFF] => (true, &data[2..]),
        [0xFF, 0xFE] => (false, &data[2..]),
        _ => (dtype != TYPE_UNICODE_TEXT || cfg!(target_endian = "big"), data),
    };

    let units: Vec<u16> = body
        .chunks_exact(2)
        .map(|pair| {
            let pair = [pair[0], pair[1]];
            if big_endian {
                u16::from_be_bytes(pair)
            } else {
                u16::from_le_bytes(pair)
            }
        })
        .collect();
    String::from_utf16(&units)
        .map_err(|_| Error::corrupt("UTF-16 payload has an unpaired surrogate"))
}
