//! # Flattened descriptor format (`dle2`)
//!
//! The de/serializable type is [`Descriptor`].
//!
//! The below pseudocode depicts the flattened representation. All integers,
//! type tags, and keys are big-endian. A self-contained stream begins with
//! the `dle2` magic and a 4-byte alignment field, then one descriptor.
//!
//! Every descriptor starts with a `type_tag` (a four-character code) and a
//! `payload_len` in `u32`. Readers may skip the payload.
//!
//! A `Descriptor::List` or `Descriptor::Record` nests other `Descriptor`s,
//! including possibly other containers. Their payloads carry no member count;
//! members are read until the payload is exhausted.
//!
//! ```text
//! struct FlattenedStream {
//!     magic:          [u8; 4],    // "dle2"
//!     align:          [u8; 4],    // zero
//!     descriptor:     Descriptor::*,
//! }
//!
//! struct Descriptor::Scalar {
//!     type_tag:       [u8; 4],
//!     payload_len:    u32,
//!     payload:        [u8; payload_len],
//! }
//!
//! struct Descriptor::List {
//!     type_tag:       [u8; 4],    // "list"
//!     payload_len:    u32,
//!     payload:        {
//!         item_0:         Descriptor::*,
//!         item_1:         Descriptor::*,
//!         ...
//!     }
//! }
//!
//! struct Descriptor::Record {
//!     type_tag:       [u8; 4],    // "reco", or an application-defined tag
//!     payload_len:    u32,
//!     payload:        {
//!         key_0:          [u8; 4],
//!         value_0:        Descriptor::*,
//!         key_1:          [u8; 4],
//!         value_1:        Descriptor::*,
//!         ...
//!     }
//! }
//! ```
//!
//! An application-defined record tag is byte-indistinguishable from a scalar
//! of the same tag; [`unflatten_with`] takes a [`RecordDetector`] policy for
//! exactly that call.

mod desc_type;
mod descriptor;
mod lengths;
mod record_detect;

pub use desc_type::*;
pub use descriptor::*;
use lengths::*;
pub use record_detect::*;
