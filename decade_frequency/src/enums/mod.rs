pub mod decade_notice;
pub mod output_format;
