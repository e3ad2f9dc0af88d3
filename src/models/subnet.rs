//! Subnet data model.

use super::{null_as_default, Ipv4};
use serde::Deserialize;
use std::net::Ipv4Addr;

/// A subnet record nested inside a VPC record.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Subnet {
    /// CIDR block of the subnet.
    #[serde(alias = "cidr")]
    pub cidr: Ipv4,
    /// Identifier of the VPC the subnet record belongs to.
    #[serde(default, alias = "vpc")]
    pub vpc: String,
    /// Display name of the subnet.
    #[serde(default, alias = "name")]
    pub name: String,
    /// Availability zone label.
    #[serde(default, alias = "az")]
    pub az: String,
    /// Addresses recorded as assigned to a resource.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        alias = "used_ips",
        alias = "usedIps"
    )]
    pub used_ips: Vec<Ipv4Addr>,
}

impl Subnet {
    pub fn new(cidr: Ipv4, name: &str) -> Subnet {
        Subnet {
            cidr,
            vpc: String::new(),
            name: name.to_string(),
            az: String::new(),
            used_ips: vec![],
        }
    }

    /// Builder-style helper used when assembling subnets by hand.
    pub fn with_used_ips(mut self, used_ips: Vec<Ipv4Addr>) -> Subnet {
        self.used_ips = used_ips;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_pascal_case() {
        let json = r#"{"Cidr":"10.0.1.0/24","Vpc":"vpc-1","Name":"app-a","Az":"eu-west-1a","UsedIps":["10.0.1.10"]}"#;
        let s: Subnet = serde_json::from_str(json).unwrap();
        assert_eq!(s.cidr, Ipv4::new("10.0.1.0/24").unwrap());
        assert_eq!(s.vpc, "vpc-1");
        assert_eq!(s.name, "app-a");
        assert_eq!(s.az, "eu-west-1a");
        assert_eq!(s.used_ips, vec![Ipv4Addr::new(10, 0, 1, 10)]);
    }

    #[test]
    fn test_deserialize_lowercase_and_defaults() {
        let s: Subnet =
            serde_json::from_str(r#"{"cidr":"10.0.2.0/28","name":"db","used_ips":null}"#).unwrap();
        assert_eq!(s.name, "db");
        assert!(s.az.is_empty());
        assert!(s.used_ips.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_bad_used_ip() {
        let r = serde_json::from_str::<Subnet>(r#"{"Cidr":"10.0.2.0/28","UsedIps":["10.0.2"]}"#);
        assert!(r.is_err());
    }

    #[test]
    fn test_missing_cidr_is_error() {
        assert!(serde_json::from_str::<Subnet>(r#"{"Name":"no-cidr"}"#).is_err());
    }
}
