//! Resource providers
//!
//! | Provider | Description |
//! |----------|-------------|
//! | [`FileSystemResourceProvider`] | Ordered list of directories on the local file system |

pub mod filesystem;

pub use filesystem::FileSystemResourceProvider;
