use crate::desc::{
    Descriptor, TYPE_FILE_URL, TYPE_UNICODE_TEXT, TYPE_UTF16_EXTERNAL_REPRESENTATION,
    TYPE_UTF8_TEXT,
};
use crate::error::{Error, Result};
use crate::unpack::unpack_as_string;
use std::path::PathBuf;
use std::str;
use url::Url;

/// Coerces to a filesystem path.
///
/// A `typeFileURL` payload is URL text that must parse as a `file:` URL;
/// anything else under that tag is corrupt, the tag promises a file. Plain
/// text coerces only when it is already an absolute path.
pub fn unpack_as_file_path(desc: &Descriptor) -> Result<PathBuf> {
    let unsupported = || Error::UnsupportedCoercion {
        dtype: desc.type_tag(),
        target: "file path",
    };

    match desc {
        Descriptor::Scalar { dtype, data } => match *dtype {
            TYPE_FILE_URL => {
                let text = str::from_utf8(data)
                    .map_err(|_| Error::corrupt("file URL payload is not valid UTF-8"))?;
                let url = Url::parse(text)
                    .map_err(|_| Error::corrupt(format!("unparsable file URL '{text}'")))?;
                url.to_file_path()
                    .map_err(|_| Error::corrupt(format!("'{url}' does not name a local file")))
            }
            TYPE_UTF8_TEXT | TYPE_UTF16_EXTERNAL_REPRESENTATION | TYPE_UNICODE_TEXT => {
                let path = unpack_as_string(desc)?;
                if path.starts_with('/') {
                    Ok(PathBuf::from(path))
                } else {
                    Err(unsupported())
                }
            }
            _ => Err(unsupported()),
        },
        _ => Err(unsupported()),
    }
}
