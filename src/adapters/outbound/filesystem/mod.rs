/// Filesystem adapters: the JSON voucher store and output writers
mod file_writer;
mod json_voucher_store;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use json_voucher_store::JsonFileVoucherRepository;
