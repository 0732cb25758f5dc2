//! Link management commands

mod create;
mod helpers;
mod list;
mod show;

pub use create::create_link;
pub(crate) use helpers::print_json;
pub use list::list_links;
pub use show::show_link;
