/// Data Transfer Objects for application layer
///
/// DTOs carry application-level choices between adapters without
/// leaking them into the domain layer.
mod output_format;

pub use output_format::OutputFormat;
