#![warn(clippy::pedantic)]

pub mod error;
pub mod reader;
pub mod source;

pub use error::DecodeError;
pub use reader::BigEndianReader;
pub use source::ByteSource;
