//! Domain models for the VPC address map.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4`] - CIDR block with range arithmetic
//! - [`Subnet`] - subnet record with its used addresses
//! - [`Vpc`] - VPC record owning its subnets

mod ipv4;
mod subnet;
mod vpc;

use serde::{Deserialize, Deserializer};

// Re-export public types
pub use ipv4::{cut_addr, get_cidr_mask, offset_addr, Addresses, Ipv4, MAX_LENGTH};
pub use subnet::Subnet;
pub use vpc::Vpc;

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
