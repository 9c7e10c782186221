mod desc;
mod error;
mod unpack;

pub use desc::*;
pub use error::*;
pub use unpack::*;
