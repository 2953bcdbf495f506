//! Subcommand implementations.

pub mod cpu;
pub mod demo;
pub mod hostname;
pub mod ips;
pub mod unzip;
pub mod zip;
