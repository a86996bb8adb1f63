//! Renders one filesystem directory as a browsable HTML index or as JSON.
//!
//! A typical use is an HTTP handler that exposes a server-side directory to
//! remote clients. The handler maps the request to a directory, checks that
//! the client may see it, and hands the directory together with the request
//! url to this crate.
//!
//! ```rust
//! # tokio_test::block_on(async {
//! use dirlist::build_listing;
//! use dirlist::render_html;
//! use dirlist::render_json;
//!
//! let listing = build_listing("./", "http://localhost/crate/", false)
//!     .await
//!     .unwrap();
//! assert!(listing.files.iter().any(|f| f.name == "Cargo.toml"));
//! assert!(listing.directories.iter().any(|d| d.url == "http://localhost/crate/src/"));
//!
//! let page = render_html(&listing, "crate");
//! assert!(page.contains("<h1>crate</h1>"));
//! println!("{}", render_json(&listing).unwrap());
//! # })
//! ```
//!
//! The JSON output might look like
//! ```json
//! {
//!   "parent": null,
//!   "directories": [
//!     {
//!       "name": "src/",
//!       "url": "http://localhost/crate/src/",
//!       "size": 4096,
//!       "lastModified": 1763599058153
//!     }
//!   ],
//!   "files": [
//!     {
//!       "name": "Cargo.toml",
//!       "url": "http://localhost/crate/Cargo.toml",
//!       "size": 1581,
//!       "lastModified": 1763599058153
//!     }
//!   ]
//! }
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod builder;
mod config;
mod entry;
mod errors;
mod html;
mod json;
pub mod utils;
#[cfg(not(target_arch = "wasm32"))]
mod writer;

#[cfg(not(target_arch = "wasm32"))]
pub use builder::build_listing;
pub use config::DEFAULT_CSS;
pub use config::SERVER_INFO;
pub use config::WriterConfig;
pub use entry::Entry;
pub use entry::Listing;
pub use entry::PARENT_NAME;
pub use errors::Error;
pub use html::render_html;
pub use html::render_html_with;
pub use json::render_json;
pub use utils::render_size;
#[cfg(not(target_arch = "wasm32"))]
pub use writer::DefaultDirectoryWriter;
#[cfg(not(target_arch = "wasm32"))]
pub use writer::DirectoryWriter;

#[cfg(feature = "test_utils")]
pub(crate) mod test_utils;
#[cfg(feature = "test_utils")]
pub use test_utils::TestRoot;
