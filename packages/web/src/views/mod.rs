mod entry;
pub use entry::Entry;

mod landing;
pub use landing::{English, French};
