//! VPC data model.

use super::{null_as_default, Ipv4, Subnet};
use serde::Deserialize;
use std::fmt;
use std::net::Ipv4Addr;

/// A VPC record: the top-level block under analysis and its subnets.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Vpc {
    /// VPC identifier.
    #[serde(default, alias = "vpc")]
    pub vpc: String,
    /// Display name, also used to name the rendered image.
    #[serde(default, alias = "name")]
    pub name: String,
    /// CIDR block of the VPC.
    #[serde(alias = "cidr")]
    pub cidr: Ipv4,
    /// Subnets in declared order; order decides ownership under overlap.
    #[serde(default, deserialize_with = "null_as_default", alias = "subnets")]
    pub subnets: Vec<Subnet>,
}

impl Vpc {
    pub fn new(vpc: &str, name: &str, cidr: Ipv4) -> Vpc {
        Vpc {
            vpc: vpc.to_string(),
            name: name.to_string(),
            cidr,
            subnets: vec![],
        }
    }

    /// Add a subnet after the existing ones.
    pub fn add_subnet(&mut self, subnet: Subnet) {
        self.subnets.push(subnet);
    }

    /// First subnet, in declared order, whose block holds `ip`.
    pub fn owning_subnet(&self, ip: Ipv4Addr) -> Option<&Subnet> {
        self.subnets.iter().find(|s| s.cidr.contains(ip))
    }

    /// Log subnets and used addresses that sit outside their parent block.
    ///
    /// Purely diagnostic: classification treats such addresses as not found.
    pub fn log_containment_warnings(&self) {
        for s in &self.subnets {
            if !self.cidr.contains_block(&s.cidr) {
                log::warn!(
                    "subnet '{}' {} is outside vpc '{}' {}",
                    s.name,
                    s.cidr,
                    self.vpc,
                    self.cidr
                );
            }
            for ip in s.used_ips.iter().filter(|ip| !s.cidr.contains(**ip)) {
                log::warn!("used ip {ip} is outside subnet '{}' {}", s.name, s.cidr);
            }
        }
    }
}

impl fmt::Display for Vpc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' [{}] ({} subnets)",
            self.vpc,
            self.name,
            self.cidr,
            self.subnets.len()
        )
    }
}
