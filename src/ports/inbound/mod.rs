/// Inbound ports (Driving ports) - Service interfaces
///
/// These ports define the interface that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod voucher_service_port;

pub use voucher_service_port::VoucherServicePort;
