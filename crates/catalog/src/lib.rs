//! Product-catalog side of the admin dashboard core: the upload/edit wizard
//! built on the form engine, plus list search and price display helpers.

pub mod format;
pub mod search;
pub mod upload_form;

pub use format::format_price;
pub use search::{filter_list, Searchable};
pub use upload_form::{ProductForm, PayloadError};
