use crate::desc::DescType;
use crate::error::{Error, Result};

/// Extracts a scalar payload whose tag implies exactly `N` bytes. A
/// wrong-size payload violates the format, so it reports corrupt data rather
/// than a failed coercion.
pub(crate) fn fixed_payload<const N: usize>(dtype: DescType, data: &[u8]) -> Result<[u8; N]> {
    <[u8; N]>::try_from(data).map_err(|_| {
        Error::corrupt(format!(
            "'{dtype}' payload is {} bytes, expected {N}",
            data.len()
        ))
    })
}
