use crate::desc::{Descriptor, PayloadLen, FORMAT_DLE2};
use crate::error::Result;

impl Descriptor {
    /// Encodes `self` as a self-contained flattened stream: the `dle2` magic,
    /// a zeroed alignment field, then the descriptor.
    pub fn flatten(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(8 + self.encoded_len());

        /* magic and align */
        out.extend_from_slice(&FORMAT_DLE2.to_bytes());
        out.extend_from_slice(&[0u8; 4]);

        /* descriptor */
        self.append_to(&mut out)?;

        Ok(out)
    }

    /// Writes the `type_tag | payload_len | payload` encoding of `self` into
    /// `out`. This is the headerless form a container embeds for each of its
    /// members.
    pub fn append_to(&self, out: &mut Vec<u8>) -> Result<()> {
        /* type_tag */
        out.extend_from_slice(&self.type_tag().to_bytes());

        /* payload_len */
        let payload_len = PayloadLen::from_payload(self.payload_len())?;
        out.extend_from_slice(&payload_len.to_be_bytes());

        /* payload */
        match self {
            Self::Scalar { data, .. } => out.extend_from_slice(data),
            Self::List { items } => {
                for item in items {
                    item.append_to(out)?;
                }
            }
            Self::Record { fields, .. } => {
                for (key, value) in fields {
                    out.extend_from_slice(&key.to_bytes());
                    value.append_to(out)?;
                }
            }
        }

        Ok(())
    }

    /// Byte count of the payload alone.
    fn payload_len(&self) -> usize {
        match self {
            Self::Scalar { data, .. } => data.len(),
            Self::List { items } => items.iter().map(|item| item.encoded_len()).sum(),
            Self::Record { fields, .. } => fields
                .iter()
                .map(|(_key, value)| 4 + value.encoded_len())
                .sum(),
        }
    }

    /// Byte count of the full `type_tag | payload_len | payload` encoding.
    fn encoded_len(&self) -> usize {
        4 + 4 + self.payload_len()
    }
}
