//! CLI command handlers. Each command is in its own file.

mod count;
mod index_url;
mod list;

pub use count::run_count;
pub use index_url::run_index_url;
pub use list::run_list;
