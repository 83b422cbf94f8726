#![warn(clippy::pedantic)]

pub mod copy;
pub mod shuffle;
pub mod url;

pub use copy::{CopyInto, copy_from_iter};
pub use shuffle::Shuffle;
pub use url::UrlBuilder;
