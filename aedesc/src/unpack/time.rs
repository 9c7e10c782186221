use crate::desc::{Descriptor, TYPE_LONG_DATE_TIME};
use crate::error::{Error, Result};
use crate::unpack::fixed_payload;
use chrono::{DateTime, Utc};

/// Seconds from the classic Mac epoch (1904-01-01T00:00:00Z) to the Unix
/// epoch.
const MAC_TO_UNIX_EPOCH_SECS: i64 = 2_082_844_800;

/// Coerces a `typeLongDateTime` scalar, a signed second count since the 1904
/// epoch, to a UTC timestamp. No other tag converts; in the legacy protocol
/// dates travel under this one type.
pub fn unpack_as_date(desc: &Descriptor) -> Result<DateTime<Utc>> {
    let unsupported = || Error::UnsupportedCoercion {
        dtype: desc.type_tag(),
        target: "date",
    };

    match desc {
        Descriptor::Scalar { dtype, data } if *dtype == TYPE_LONG_DATE_TIME => {
            let mac_secs = i64::from_be_bytes(fixed_payload(*dtype, data)?);
            mac_secs
                .checked_sub(MAC_TO_UNIX_EPOCH_SECS)
                .and_then(|unix_secs| DateTime::from_timestamp(unix_secs, 0))
                .ok_or_else(unsupported)
        }
        _ => Err(unsupported()),
    }
}
