//! Local network interface address enumeration.
//!
//! Only the local interface configuration is read; no packets are sent.

use std::net::IpAddr;
use std::net::Ipv4Addr;

use if_addrs::IfAddr;

use crate::HostkitError;
use crate::Result;
use crate::error::SystemQuery;

/// One address bound to a local network interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddress {
    /// Interface name as reported by the OS (e.g. `eth0`).
    pub name: String,

    /// The bound address.
    pub ip: IpAddr,

    /// Network prefix length, if the OS reported a subnet for this address.
    pub prefix_len: Option<u8>,

    /// Whether the address belongs to a loopback interface.
    pub is_loopback: bool,
}

impl InterfaceAddress {
    /// Returns the IPv4 form of this address, if it has one.
    ///
    /// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) are unwrapped.
    #[must_use]
    pub fn to_ipv4(&self) -> Option<Ipv4Addr> {
        match self.ip {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(v6) => v6.to_ipv4_mapped(),
        }
    }
}

impl From<if_addrs::Interface> for InterfaceAddress {
    fn from(iface: if_addrs::Interface) -> Self {
        let is_loopback = iface.is_loopback();
        let prefix_len = match &iface.addr {
            IfAddr::V4(v4) => prefix_from_mask(u32::from(v4.netmask).count_ones()),
            IfAddr::V6(v6) => prefix_from_mask(u128::from(v6.netmask).count_ones()),
        };

        Self {
            ip: iface.ip(),
            name: iface.name,
            prefix_len,
            is_loopback,
        }
    }
}

// Always `Some` for if-addrs records; `None` only comes from hand-built ones.
fn prefix_from_mask(ones: u32) -> Option<u8> {
    u8::try_from(ones).ok()
}

/// Lists every address configured on the host's network interfaces.
///
/// Order follows the OS enumeration order.
///
/// # Errors
///
/// Returns `HostkitError::SystemQuery` if the interface list cannot be read.
pub fn interface_addresses() -> Result<Vec<InterfaceAddress>> {
    let interfaces = if_addrs::get_if_addrs()
        .map_err(|e| HostkitError::system_query(SystemQuery::Interfaces, e))?;

    Ok(interfaces.into_iter().map(InterfaceAddress::from).collect())
}

/// Filters interface records down to usable IPv4 addresses.
///
/// A record is kept when it carries prefix information, is not loopback and
/// is representable as IPv4. Input order is preserved.
///
/// # Errors
///
/// Returns `HostkitError::NoAddressesFound` when no record survives the
/// filter, so callers can tell an IPv6-only or disconnected host apart from
/// a broken query.
///
/// # Examples
///
/// ```
/// use hostkit_core::HostkitError;
/// use hostkit_core::host::InterfaceAddress;
/// use hostkit_core::host::select_ipv4;
/// use std::net::IpAddr;
/// use std::net::Ipv6Addr;
///
/// let records = vec![InterfaceAddress {
///     name: "lo".into(),
///     ip: IpAddr::V6(Ipv6Addr::LOCALHOST),
///     prefix_len: Some(128),
///     is_loopback: true,
/// }];
/// assert!(matches!(select_ipv4(&records), Err(HostkitError::NoAddressesFound)));
/// ```
pub fn select_ipv4(records: &[InterfaceAddress]) -> Result<Vec<Ipv4Addr>> {
    let addresses: Vec<Ipv4Addr> = records
        .iter()
        .filter(|record| record.prefix_len.is_some())
        .filter(|record| !record.is_loopback && !record.ip.is_loopback())
        .filter_map(InterfaceAddress::to_ipv4)
        .filter(|ip| !ip.is_loopback())
        .collect();

    if addresses.is_empty() {
        return Err(HostkitError::NoAddressesFound);
    }

    Ok(addresses)
}

/// Returns all non-loopback IPv4 addresses of the host.
///
/// # Errors
///
/// - `HostkitError::SystemQuery` if the interface list cannot be read
/// - `HostkitError::NoAddressesFound` if no usable IPv4 address exists
///
/// # Examples
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// for ip in hostkit_core::host::ipv4_addresses()? {
///     println!("- {ip}");
/// }
/// # Ok(())
/// # }
/// ```
pub fn ipv4_addresses() -> Result<Vec<Ipv4Addr>> {
    let records = interface_addresses()?;
    tracing::debug!(count = records.len(), "enumerated interface addresses");

    select_ipv4(&records)
}

/// Returns the first non-loopback IPv4 address of the host.
///
/// # Errors
///
/// Same as [`ipv4_addresses`].
pub fn first_ipv4() -> Result<Ipv4Addr> {
    ipv4_addresses()?
        .into_iter()
        .next()
        .ok_or(HostkitError::NoAddressesFound)
}
