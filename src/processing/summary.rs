//! Address usage totals for the text report.
//!
//! Counts come from walking a block once and classifying every address, so
//! the totals always agree with what the rendered image shows.

use super::classify::{CidrBlockInfo, IpStatus, ReservedAddrs};
use crate::models::{Ipv4, Subnet, Vpc};

/// Per-category address counts for one block.
///
/// `allocated` counts every address owned by a subnet, including the ones
/// that are also counted as reserved or in use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: u64,
    pub allocated: u64,
    pub reserved: u64,
    pub in_use: u64,
}

impl StatusCounts {
    pub fn add(&mut self, status: IpStatus) {
        self.total += 1;
        match status {
            IpStatus::Unallocated => {}
            IpStatus::Allocated => self.allocated += 1,
            IpStatus::Reserved => {
                self.allocated += 1;
                self.reserved += 1;
            }
            IpStatus::InUse => {
                self.allocated += 1;
                self.in_use += 1;
            }
        }
    }

    pub fn unallocated(&self) -> u64 {
        self.total - self.allocated
    }

    /// Allocated addresses that are neither reserved nor in use.
    pub fn available(&self) -> u64 {
        self.allocated - (self.reserved + self.in_use)
    }
}

/// Walk every address of `info` once and count its categories.
pub fn tally(info: &dyn CidrBlockInfo) -> StatusCounts {
    let mut counts = StatusCounts::default();
    info.for_each_ip(&mut |_, ip| counts.add(info.classify(ip)));
    counts
}

/// Report line for a single subnet.
#[derive(Debug, Clone, PartialEq)]
pub struct SubnetSummary {
    pub name: String,
    pub cidr: Ipv4,
    pub az: String,
    pub counts: StatusCounts,
    pub reserved: ReservedAddrs,
}

impl SubnetSummary {
    pub fn from_subnet(subnet: &Subnet) -> SubnetSummary {
        SubnetSummary {
            name: subnet.name.clone(),
            cidr: subnet.cidr,
            az: subnet.az.clone(),
            counts: tally(subnet),
            reserved: ReservedAddrs::for_block(&subnet.cidr),
        }
    }

    pub fn capacity(&self) -> u64 {
        self.counts.total
    }
}

/// Report for a VPC and each of its subnets.
#[derive(Debug, Clone, PartialEq)]
pub struct VpcSummary {
    pub vpc: String,
    pub name: String,
    pub cidr: Ipv4,
    pub counts: StatusCounts,
    pub subnets: Vec<SubnetSummary>,
}

/// Build the report for `vpc` without touching the model.
pub fn summarize(vpc: &Vpc) -> VpcSummary {
    let counts = tally(vpc);
    log::debug!(
        "summarize({}) total={} allocated={} reserved={} in_use={}",
        vpc.cidr,
        counts.total,
        counts.allocated,
        counts.reserved,
        counts.in_use
    );
    VpcSummary {
        vpc: vpc.vpc.clone(),
        name: vpc.name.clone(),
        cidr: vpc.cidr,
        counts,
        subnets: vpc.subnets.iter().map(SubnetSummary::from_subnet).collect(),
    }
}
