/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains both inbound ports (driving ports - the voucher service API)
/// and outbound ports (driven ports - persistence and output interfaces).
pub mod inbound;
pub mod outbound;
