#![warn(clippy::pedantic)]

pub mod addr;

pub use addr::{IPV4_ADDR_BYTES, IPV6_ADDR_BYTES, IpAddrExt};
