//! Text report for one VPC.

use crate::processing::{SubnetSummary, VpcSummary};
use colored::Colorize;
use itertools::Itertools;
use std::io::{self, Write};

/// Width of the label column in the report.
const LABEL_WIDTH: usize = 22;

/// Format a value as a right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:>width$}")
}

fn write_line<W: Write, T: ToString>(out: &mut W, label: &str, value: T) -> io::Result<()> {
    writeln!(out, "{label:<LABEL_WIDTH$} {}", value.to_string())
}

fn write_subnet<W: Write>(out: &mut W, s: &SubnetSummary) -> io::Result<()> {
    let label = match s.name.trim() {
        "" => s.cidr.to_string(),
        name => name.to_string(),
    };
    if s.az.is_empty() {
        writeln!(out, "{}", label.cyan())?;
    } else {
        writeln!(out, "{} ({})", label.cyan(), s.az)?;
    }
    write_line(out, "Cidr Block:", format_field(s.cidr, 18))?;
    write_line(out, "Capacity IPs:", s.capacity())?;
    write_line(out, "Available IPs:", s.counts.available())?;
    write_line(out, "Used IPs:", s.counts.in_use)?;
    write_line(
        out,
        "Reserved IPs:",
        s.reserved
            .to_array()
            .iter()
            .map(|ip| format_field(ip, 15))
            .join(", "),
    )
}

/// Write the report for `summary`: a header, one block per subnet, then totals.
pub fn write_summary<W: Write>(out: &mut W, summary: &VpcSummary) -> io::Result<()> {
    writeln!(out, "---------------------")?;
    writeln!(out, "{} {}", summary.vpc.bold(), summary.name)?;
    writeln!(out, "{}", summary.cidr)?;
    for s in &summary.subnets {
        write_subnet(out, s)?;
    }
    let c = &summary.counts;
    write_line(out, "Total IPs:", c.total)?;
    write_line(out, "Total Unallocated IPs:", c.unallocated())?;
    write_line(out, "Total Allocated IPs:", c.allocated)?;
    write_line(out, "Total Available IPs:", c.available())?;
    write_line(out, "Total Reserved IPs:", c.reserved)?;
    write_line(out, "Total Used IPs:", c.in_use)?;
    Ok(())
}
