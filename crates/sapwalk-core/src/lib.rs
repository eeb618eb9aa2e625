pub mod convert;
pub mod error;

pub mod sap;
pub mod walk;

pub use crate::convert::{convert, ConvertStats};
pub use crate::sap::line::SapRecord;
pub use crate::walk::record::WalkRecord;
