use crate::desc::DescType;
use std::collections::HashSet;
use tracing::trace;

/// Decides whether a type tag other than `typeAEList`/`typeAERecord` marks a
/// record-shaped payload. The flattened format gives application-defined
/// record tags no structural marker, so the caller has to bring the policy.
pub trait RecordDetector {
    fn is_record(&self, dtype: DescType, payload: &[u8]) -> bool;
}

/// Registry policy: the tags registered here decode as records, everything
/// else stays scalar. The default, empty registry is the conservative choice
/// and what [`unflatten`](crate::desc::unflatten) uses.
#[derive(Default)]
pub struct KnownRecordTypes {
    types: HashSet<DescType>,
}

impl KnownRecordTypes {
    pub fn new<I: IntoIterator<Item = DescType>>(types: I) -> Self {
        Self {
            types: types.into_iter().collect(),
        }
    }
}

impl RecordDetector for KnownRecordTypes {
    fn is_record(&self, dtype: DescType, _payload: &[u8]) -> bool {
        self.types.contains(&dtype)
    }
}

/// Structural policy: walks the payload as `key | type_tag | payload_len |
/// payload` entries and reports whether it parses cleanly to the end.
///
/// A heuristic. Opaque scalar bytes can match by coincidence. An empty
/// payload is ambiguous between an empty scalar and an empty record and
/// stays scalar, which keeps the `null`/`true`/`fals` sentinels intact;
/// decoding an empty application-typed record takes a [`KnownRecordTypes`]
/// registration instead.
pub struct PayloadProbe;

impl RecordDetector for PayloadProbe {
    fn is_record(&self, dtype: DescType, payload: &[u8]) -> bool {
        if payload.is_empty() {
            return false;
        }
        let mut rest = payload;
        while !rest.is_empty() {
            /* key + type_tag + payload_len */
            if rest.len() < 12 {
                return false;
            }
            let claimed = u32::from_be_bytes([rest[8], rest[9], rest[10], rest[11]]) as usize;
            if claimed > rest.len() - 12 {
                return false;
            }
            rest = &rest[12 + claimed..];
        }
        trace!(%dtype, "payload probed as record-shaped");
        true
    }
}
