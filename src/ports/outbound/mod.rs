/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach persistence and output destinations.
pub mod formatter;
pub mod output_presenter;
pub mod voucher_repository;

pub use formatter::ResultFormatter;
pub use output_presenter::OutputPresenter;
pub use voucher_repository::VoucherRepository;
