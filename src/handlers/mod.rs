mod index;
mod update_data;


pub use index::index_handler;
pub use update_data::update_data_handler;
