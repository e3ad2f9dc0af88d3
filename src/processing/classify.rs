//! Address classification for VPCs and subnets.
//!
//! [`CidrBlockInfo`] is the capability set shared by [`Vpc`] and [`Subnet`].
//! A VPC answers by delegating to the first subnet (in declared order) that
//! contains the address; a subnet answers from its own reserved positions and
//! used-address list.

use crate::models::{Ipv4, Subnet, Vpc};
use std::fmt;
use std::net::Ipv4Addr;

/// Display category of one address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IpStatus {
    #[default]
    Unallocated,
    Allocated,
    Reserved,
    InUse,
}

impl fmt::Display for IpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IpStatus::Unallocated => "unallocated",
            IpStatus::Allocated => "allocated",
            IpStatus::Reserved => "reserved",
            IpStatus::InUse => "in-use",
        };
        f.write_str(s)
    }
}

/// The five addresses the cloud provider holds back in every subnet.
///
/// Offsets 0-3 from the network address plus the broadcast address. For
/// blocks of four addresses or fewer the positions overlap, and for a /32
/// offsets 1-3 fall outside the block; both are left as computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedAddrs {
    pub network: Ipv4Addr,
    pub gateway: Ipv4Addr,
    pub dns: Ipv4Addr,
    pub platform: Ipv4Addr,
    pub broadcast: Ipv4Addr,
}

impl ReservedAddrs {
    pub fn for_block(cidr: &Ipv4) -> ReservedAddrs {
        ReservedAddrs {
            network: cidr.nth(0),
            gateway: cidr.nth(1),
            dns: cidr.nth(2),
            platform: cidr.nth(3),
            broadcast: cidr.hi(),
        }
    }

    /// The five positions in fixed order: network, gateway, dns, platform, broadcast.
    pub fn to_array(&self) -> [Ipv4Addr; 5] {
        [
            self.network,
            self.gateway,
            self.dns,
            self.platform,
            self.broadcast,
        ]
    }

    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.to_array().contains(&ip)
    }
}

/// Capability set shared by VPCs and subnets.
pub trait CidrBlockInfo {
    /// The block this entity spans.
    fn cidr(&self) -> Ipv4;

    fn ip_allocated(&self, ip: Ipv4Addr) -> bool;
    fn ip_reserved(&self, ip: Ipv4Addr) -> bool;
    fn ip_in_use(&self, ip: Ipv4Addr) -> bool;

    fn contains(&self, ip: Ipv4Addr) -> bool {
        self.cidr().contains(ip)
    }

    /// Call `callback(index, ip)` for every address of the entity's own block.
    fn for_each_ip(&self, callback: &mut dyn FnMut(u64, Ipv4Addr)) {
        for (i, ip) in self.cidr().addresses() {
            callback(i, ip);
        }
    }

    /// Pick the display category. Order matters: an address can be both
    /// reserved and in use, and in use wins.
    fn classify(&self, ip: Ipv4Addr) -> IpStatus {
        if self.ip_in_use(ip) {
            IpStatus::InUse
        } else if self.ip_reserved(ip) {
            IpStatus::Reserved
        } else if self.ip_allocated(ip) {
            IpStatus::Allocated
        } else {
            IpStatus::Unallocated
        }
    }
}

impl CidrBlockInfo for Subnet {
    fn cidr(&self) -> Ipv4 {
        self.cidr
    }

    fn ip_allocated(&self, _ip: Ipv4Addr) -> bool {
        true
    }

    fn ip_reserved(&self, ip: Ipv4Addr) -> bool {
        ReservedAddrs::for_block(&self.cidr).contains(ip)
    }

    fn ip_in_use(&self, ip: Ipv4Addr) -> bool {
        self.used_ips.iter().any(|used| *used == ip)
    }
}

impl CidrBlockInfo for Vpc {
    fn cidr(&self) -> Ipv4 {
        self.cidr
    }

    fn ip_allocated(&self, ip: Ipv4Addr) -> bool {
        self.owning_subnet(ip).map_or(false, |s| s.ip_allocated(ip))
    }

    fn ip_reserved(&self, ip: Ipv4Addr) -> bool {
        self.owning_subnet(ip).map_or(false, |s| s.ip_reserved(ip))
    }

    fn ip_in_use(&self, ip: Ipv4Addr) -> bool {
        self.owning_subnet(ip).map_or(false, |s| s.ip_in_use(ip))
    }

    // Resolve the owning subnet once instead of once per predicate.
    fn classify(&self, ip: Ipv4Addr) -> IpStatus {
        match self.owning_subnet(ip) {
            Some(s) => s.classify(ip),
            None => IpStatus::Unallocated,
        }
    }
}
