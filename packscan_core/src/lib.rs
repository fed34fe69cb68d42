pub mod codec;
pub mod error;
pub mod report;

pub use codec::{Codec, CodecId};
pub use error::{Error, Result};
pub use report::ScanReport;
