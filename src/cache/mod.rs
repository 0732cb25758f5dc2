pub mod keys;
mod store;
mod view;

pub use store::{Snapshot, SwrCache};
pub use view::{IsEmpty, ViewState};
