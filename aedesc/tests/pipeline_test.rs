//! Integration tests for aedesc.
//!
//! Round-trips whole reply descriptors through flatten, unflatten, and the
//! unpack functions, the way an event client would consume them.

use aedesc::{
    unflatten, unflatten_with, unpack_as_array, unpack_as_boolean, unpack_as_date,
    unpack_as_file_path, unpack_as_i32, unpack_as_mapping, unpack_as_option, unpack_as_string,
    Descriptor, Error, KnownRecordTypes, OSType, PayloadProbe, TYPE_AE_RECORD, TYPE_FILE_URL,
    TYPE_LONG_DATE_TIME, TYPE_SINT32, TYPE_UTF16_EXTERNAL_REPRESENTATION, TYPE_UTF8_TEXT,
};
use anyhow::Result;
use chrono::{TimeZone, Utc};
use std::path::PathBuf;

fn scalar(dtype: OSType, data: &[u8]) -> Descriptor {
    Descriptor::Scalar {
        dtype,
        data: data.to_vec(),
    }
}

/// A reply an application might send for "which documents are open": the
/// document names, their backing files, a cursor position, and a save date.
fn build_open_documents_reply() -> Descriptor {
    let names = Descriptor::List {
        items: vec![
            scalar(TYPE_UTF8_TEXT, "notes.txt".as_bytes()),
            /* UTF-16, little-endian mark, "draft". */
            scalar(
                TYPE_UTF16_EXTERNAL_REPRESENTATION,
                &[
                    0xFF, 0xFE, // byte order mark
                    0x64, 0x00, // d
                    0x72, 0x00, // r
                    0x61, 0x00, // a
                    0x66, 0x00, // f
                    0x74, 0x00, // t
                ],
            ),
        ],
    };
    let files = Descriptor::List {
        items: vec![
            scalar(TYPE_FILE_URL, b"file:///tmp/notes.txt"),
            scalar(TYPE_FILE_URL, b"file:///tmp/draft.txt"),
        ],
    };

    /* 2001-01-01T00:00:00Z in seconds since the 1904 epoch. */
    let saved_at = 3_061_152_000i64;

    Descriptor::Record {
        dtype: TYPE_AE_RECORD,
        fields: vec![
            (OSType::new(*b"pnam"), names),
            (OSType::new(*b"kfil"), files),
            (OSType::new(*b"pidx"), scalar(TYPE_SINT32, &7i32.to_be_bytes())),
            (
                OSType::new(*b"modd"),
                scalar(TYPE_LONG_DATE_TIME, &saved_at.to_be_bytes()),
            ),
            (OSType::new(*b"cmnt"), Descriptor::missing_value()),
            (OSType::new(*b"isun"), Descriptor::boolean(false)),
        ],
    }
}

#[test]
fn unpack_a_flattened_reply() -> Result<()> {
    let reply = build_open_documents_reply();
    let unflattened = unflatten(&reply.flatten()?)?;
    assert_eq!(reply, unflattened);

    let fields = unpack_as_mapping(&unflattened, |value| Ok(value.clone()))?;

    let names = unpack_as_array(&fields[&OSType::new(*b"pnam")], unpack_as_string)?;
    assert_eq!(names, vec!["notes.txt", "draft"]);

    let files = unpack_as_array(&fields[&OSType::new(*b"kfil")], unpack_as_file_path)?;
    assert_eq!(
        files,
        vec![
            PathBuf::from("/tmp/notes.txt"),
            PathBuf::from("/tmp/draft.txt"),
        ]
    );

    assert_eq!(unpack_as_i32(&fields[&OSType::new(*b"pidx")])?, 7);
    assert_eq!(
        unpack_as_date(&fields[&OSType::new(*b"modd")])?,
        Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(
        unpack_as_option(&fields[&OSType::new(*b"cmnt")], unpack_as_string)?,
        None
    );
    assert_eq!(unpack_as_boolean(&fields[&OSType::new(*b"isun")])?, false);

    Ok(())
}

#[test]
fn application_typed_record_needs_a_policy() -> Result<()> {
    let record = Descriptor::Record {
        dtype: OSType::new(*b"adoc"),
        fields: vec![
            (OSType::new(*b"pnam"), scalar(TYPE_UTF8_TEXT, b"draft")),
            (
                OSType::new(*b"pidx"),
                scalar(TYPE_SINT32, &1i32.to_be_bytes()),
            ),
        ],
    };
    let flattened = record.flatten()?;

    /* Without a policy the tag is opaque. */
    assert!(matches!(
        unflatten(&flattened)?,
        Descriptor::Scalar { .. }
    ));

    /* A registry of known tags recovers the fields. */
    let registry = KnownRecordTypes::new([OSType::new(*b"adoc")]);
    let unflattened = unflatten_with(&flattened, &registry)?;
    assert_eq!(record, unflattened);
    let fields = unpack_as_mapping(&unflattened, |value| Ok(value.clone()))?;
    assert_eq!(
        unpack_as_string(&fields[&OSType::new(*b"pnam")])?,
        "draft"
    );

    /* So does the structural probe. */
    assert_eq!(record, unflatten_with(&flattened, &PayloadProbe)?);

    Ok(())
}

#[test]
fn damaged_streams_surface_as_corrupt_data() -> Result<()> {
    let mut flattened = build_open_documents_reply().flatten()?;

    /* Severed mid-member. */
    let severed = &flattened[..flattened.len() - 3];
    assert!(matches!(
        unflatten(severed),
        Err(Error::CorruptData { .. })
    ));

    /* Magic from some other protocol. */
    flattened[0] = b'x';
    assert!(matches!(
        unflatten(&flattened),
        Err(Error::CorruptData { .. })
    ));

    Ok(())
}

#[test]
fn coercion_failures_name_the_offending_tag() -> Result<()> {
    let reply = build_open_documents_reply();
    let fields = unpack_as_mapping(&reply, |value| Ok(value.clone()))?;

    let err = unpack_as_date(&fields[&OSType::new(*b"pidx")]).unwrap_err();
    assert_eq!(err.to_string(), "cannot coerce 'long' to date");
    match err {
        Error::UnsupportedCoercion { dtype, target } => {
            assert_eq!(dtype, TYPE_SINT32);
            assert_eq!(target, "date");
        }
        other => panic!("expected a coercion failure, got {other:?}"),
    }

    Ok(())
}
