//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`)
//! - [`route`]: Export file to URL route mapping (`html_file_to_route`)

pub mod fs;
pub mod route;

pub use fs::normalize_path;
pub use route::html_file_to_route;
