//! Record store: CSV data files to and from [`DataFile`](catalog_model::DataFile).

mod reader;
mod writer;

pub use reader::{load_data_file, parse_data_file};
pub use writer::{encode_data_file, save_data_file};
