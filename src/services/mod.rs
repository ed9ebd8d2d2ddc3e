pub mod converter;
pub mod output_writer;

pub use converter::{load_image, ConvertService, ImageReport, RawReport};
pub use output_writer::{with_appended_extension, write_outputs, PendingOutput};
