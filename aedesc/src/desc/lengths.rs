use crate::error::{Error, Result};
use derive_more::Deref;

/// The `u32` byte count that precedes every descriptor payload on the wire.
#[derive(Deref, Clone, Copy)]
pub struct PayloadLen(u32);
impl PayloadLen {
    pub fn from_payload(len: usize) -> Result<Self> {
        let int = u32::try_from(len)
            .map_err(|_| Error::corrupt(format!("payload length {len} exceeds u32 range")))?;
        Ok(Self(int))
    }
    pub fn from_be_bytes(buf: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(buf))
    }
    pub fn to_be_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}
