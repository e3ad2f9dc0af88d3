//! IPv4 address and CIDR notation utilities.
//!
//! Provides the [`Ipv4`] block type (base address plus prefix length) and the
//! range arithmetic the classification and rendering passes are built on:
//! address counts, ordered enumeration and offsets from a base address.

use crate::error::MapError;
use serde::de;
use serde::{Deserialize, Deserializer};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use vpc_ip_map::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, MapError> {
    if len > MAX_LENGTH {
        Err(MapError::InvalidPrefix(len))
    } else {
        Ok(netmask(len))
    }
}

/// Mask for a prefix already known to be <= 32.
fn netmask(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, MapError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Address `n` steps after `base`.
///
/// Wraps at 255.255.255.255; callers stay inside their block so this never
/// matters in practice.
pub fn offset_addr(base: Ipv4Addr, n: u64) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(base).wrapping_add(n as u32))
}

/// IPv4 address block in CIDR notation.
///
/// The address is always the canonical network address: host bits are
/// cleared on construction, so `10.0.0.7/24` becomes `10.0.0.0/24`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    addr: Ipv4Addr,
    mask: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, MapError> {
        let addr_cidr = addr_cidr.trim();
        let invalid = |reason: &str| MapError::InvalidCidr {
            input: addr_cidr.to_string(),
            reason: reason.to_string(),
        };
        if addr_cidr.is_empty() {
            return Err(invalid("empty string"));
        }
        let (addr, mask) = addr_cidr
            .split_once('/')
            .ok_or_else(|| invalid("expected address/mask"))?;
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| invalid(&format!("invalid address {addr}")))?;
        let mask: u8 = mask
            .parse()
            .map_err(|_| invalid(&format!("invalid subnet mask {mask}")))?;
        Ipv4::from_parts(addr, mask)
    }

    /// Build a block from an address and prefix, clearing host bits.
    pub fn from_parts(addr: Ipv4Addr, mask: u8) -> Result<Ipv4, MapError> {
        let addr = cut_addr(addr, mask)?;
        Ok(Ipv4 { addr, mask })
    }

    /// The network (base) address.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length (0-32).
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Get the highest (broadcast) address in the block.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !netmask(self.mask))
    }

    /// Number of addresses in the block: `2^(32 - mask)`.
    ///
    /// ```
    /// use vpc_ip_map::models::Ipv4;
    /// assert_eq!(Ipv4::new("10.0.1.0/24").unwrap().address_count(), 256);
    /// assert_eq!(Ipv4::new("0.0.0.0/0").unwrap().address_count(), 1 << 32);
    /// ```
    pub fn address_count(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask)
    }

    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        u32::from(ip) & netmask(self.mask) == u32::from(self.addr)
    }

    /// True when `other` lies entirely inside this block.
    pub fn contains_block(&self, other: &Ipv4) -> bool {
        other.mask >= self.mask && self.contains(other.addr)
    }

    /// Address `n` steps after the network address.
    pub fn nth(&self, n: u64) -> Ipv4Addr {
        offset_addr(self.addr, n)
    }

    /// Every address of the block in ascending order, tagged with its offset
    /// from the network address. Each call starts a fresh walk.
    pub fn addresses(&self) -> Addresses {
        Addresses {
            base: self.addr,
            next: 0,
            count: self.address_count(),
        }
    }
}

/// Iterator returned by [`Ipv4::addresses`].
#[derive(Debug, Clone)]
pub struct Addresses {
    base: Ipv4Addr,
    next: u64,
    count: u64,
}

impl Iterator for Addresses {
    type Item = (u64, Ipv4Addr);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let i = self.next;
        self.next += 1;
        Some((i, offset_addr(self.base, i)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Addresses {}

impl FromStr for Ipv4 {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
