//! # Unpack functions
//!
//! Type-directed coercion from a [`Descriptor`](crate::desc::Descriptor) to
//! a native value. Each function accepts the source type tags below and
//! returns [`UnsupportedCoercion`](crate::error::Error::UnsupportedCoercion)
//! for every other tag. A payload that contradicts its own tag (wrong size
//! for a fixed-width type, undecodable text) is
//! [`CorruptData`](crate::error::Error::CorruptData) instead.
//!
//! ```text
//! bool        <- true | fals | bool | shor long comp ushr magn ucom (0/1 only)
//!                | utf8 ut16 utxt ("true"/"yes"/"false"/"no", case-insensitive)
//! integers    <- shor long comp ushr magn ucom (range-checked)
//!                | true fals bool (1/0) | sing doub (integral values only)
//!                | utf8 ut16 utxt (base-10)
//! f64         <- doub | sing | shor long comp ushr magn ucom | utf8 ut16 utxt
//! String      <- utf8 | ut16 utxt (optional BOM) | shor long comp ushr magn ucom
//! date        <- ldt  (seconds since 1904-01-01T00:00:00Z)
//! file path   <- furl (file: URL) | utf8 ut16 utxt (absolute path only)
//! type code   <- type | prop | keyw
//! enum code   <- enum | abso
//! Vec         <- list (per-item) | any other descriptor as a single item
//! record      <- Record descriptors only (per-value)
//! ```
//!
//! List and Record coercions take the per-item function as a closure, and
//! fail on the first failing member.

mod boolean;
mod file_url;
mod fixed;
mod float;
mod integer;
mod os_type;
mod seq;
mod text;
mod time;

pub use boolean::*;
pub use file_url::*;
use fixed::*;
pub use float::*;
pub use integer::*;
pub use os_type::*;
pub use seq::*;
pub use text::*;
pub use time::*;
