//! Host introspection queries.
//!
//! Every function here reads the operating system state fresh on each call.
//! Nothing is cached between calls.

pub mod cpu;
pub mod hostname;
pub mod net;

pub use cpu::physical_core_count;
pub use hostname::hostname;
pub use net::InterfaceAddress;
pub use net::first_ipv4;
pub use net::interface_addresses;
pub use net::ipv4_addresses;
pub use net::select_ipv4;
