//! UI Components for the sales processor frontend.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - CSV file upload with drag & drop
//! - [`ProgressBar`] - Upload progress indicator
//! - [`StatusPanel`] - Background-processing panel and inline errors
//! - [`ResultPanel`] - Terminal result with metrics and download link

mod footer;
mod hero;
mod progress;
mod result;
mod status;
mod upload;

pub use footer::*;
pub use hero::*;
pub use progress::*;
pub use result::*;
pub use status::*;
pub use upload::*;
