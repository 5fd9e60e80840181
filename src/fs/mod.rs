//! FileSystem abstraction for testable detection

mod mock;
mod real;
mod r#trait;

pub use mock::MockFileSystem;
pub use r#trait::{DirEntry, EntryKind, FileSystem};
pub use real::RealFileSystem;
