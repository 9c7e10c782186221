use crate::desc::{
    AEKeyword, DescType, Descriptor, KnownRecordTypes, OSType, PayloadLen, RecordDetector,
    FORMAT_DLE2, TYPE_AE_LIST, TYPE_AE_RECORD,
};
use crate::error::{Error, Result};
use tracing::debug;

/// Decodes a self-contained flattened stream: the `dle2` magic, a 4-byte
/// alignment field, then one descriptor spanning the rest of the buffer.
///
/// Only `typeAEList` and `typeAERecord` decode as containers here; a record
/// flattened under an application-defined tag comes back as an opaque
/// `Scalar`. Pass a policy to [`unflatten_with`] to recover those.
pub fn unflatten(buf: &[u8]) -> Result<Descriptor> {
    unflatten_with(buf, &KnownRecordTypes::default())
}

/// Same as [`unflatten`], with an explicit [`RecordDetector`] deciding which
/// non-`reco` type tags hold record-shaped payloads.
pub fn unflatten_with(buf: &[u8], detector: &impl RecordDetector) -> Result<Descriptor> {
    /* magic and align */
    if buf.len() < 8 {
        return Err(Error::corrupt(format!(
            "flattened stream is {} bytes, the header alone needs 8",
            buf.len()
        )));
    }
    let magic = OSType::new([buf[0], buf[1], buf[2], buf[3]]);
    if magic != FORMAT_DLE2 {
        debug!(%magic, "rejecting flattened stream");
        return Err(Error::corrupt(format!(
            "bad magic '{magic}', expected '{FORMAT_DLE2}'"
        )));
    }

    /* descriptor */
    let (r_len, desc) = read_descriptor(&buf[8..], detector)?;
    if 8 + r_len != buf.len() {
        return Err(Error::corrupt(format!(
            "{} trailing bytes after the top-level descriptor",
            buf.len() - 8 - r_len
        )));
    }

    Ok(desc)
}

/// Reads the `type_tag | payload_len | payload` envelope at the head of
/// `buf`; returns the consumed byte count and the decoded descriptor.
///
/// Container payloads recurse on sub-slices, so a member's length field can
/// never reach past its container.
fn read_descriptor(buf: &[u8], detector: &impl RecordDetector) -> Result<(usize, Descriptor)> {
    let (dtype, payload) = next_envelope(buf)?;
    let r_len = 4 + 4 + payload.len();

    let desc = if dtype == TYPE_AE_LIST {
        read_list_payload(payload, detector)?
    } else if dtype == TYPE_AE_RECORD || detector.is_record(dtype, payload) {
        read_record_payload(dtype, payload, detector)?
    } else {
        Descriptor::Scalar {
            dtype,
            data: payload.to_vec(),
        }
    };
    Ok((r_len, desc))
}

/// Splits the leading envelope off `buf` without interpreting the payload.
fn next_envelope(buf: &[u8]) -> Result<(DescType, &[u8])> {
    if buf.len() < 8 {
        return Err(Error::corrupt(format!(
            "truncated envelope: {} bytes where a type tag and length need 8",
            buf.len()
        )));
    }
    let dtype = OSType::new([buf[0], buf[1], buf[2], buf[3]]);
    let payload_len = PayloadLen::from_be_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let payload_len = *payload_len as usize;

    let rest = &buf[8..];
    if payload_len > rest.len() {
        return Err(Error::corrupt(format!(
            "length field of '{dtype}' claims {payload_len} bytes, {} remain",
            rest.len()
        )));
    }
    Ok((dtype, &rest[..payload_len]))
}

fn read_list_payload(payload: &[u8], detector: &impl RecordDetector) -> Result<Descriptor> {
    let mut items = vec![];
    let mut rest = payload;
    while !rest.is_empty() {
        let (r_len, item) = read_descriptor(rest, detector)?;
        items.push(item);
        rest = &rest[r_len..];
    }
    Ok(Descriptor::List { items })
}

fn read_record_payload(
    dtype: DescType,
    payload: &[u8],
    detector: &impl RecordDetector,
) -> Result<Descriptor> {
    let mut fields: Vec<(AEKeyword, Descriptor)> = vec![];
    let mut rest = payload;
    while !rest.is_empty() {
        /* key */
        if rest.len() < 4 {
            return Err(Error::corrupt(format!(
                "truncated record key: {} bytes remain",
                rest.len()
            )));
        }
        let key = OSType::new([rest[0], rest[1], rest[2], rest[3]]);
        if fields.iter().any(|(existing, _)| *existing == key) {
            return Err(Error::corrupt(format!("duplicate record key '{key}'")));
        }

        /* value */
        let (r_len, value) = read_descriptor(&rest[4..], detector)?;
        fields.push((key, value));
        rest = &rest[4 + r_len..];
    }
    Ok(Descriptor::Record { dtype, fields })
}
