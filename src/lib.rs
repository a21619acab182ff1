//! pwadev
//!
//! Developer toolkit for a Progressive Web App under test. It bundles the
//! two chores of a manual PWA test loop:
//!
//! - **Icon generation**: renders the app icon set procedurally and writes
//!   one PNG per size, plus an optional manifest `icons` fragment.
//! - **Dev server**: serves the app directory with cache-busting headers
//!   and exact content types, and opens the landing page in a browser.
//!
//! # Example
//!
//! ```no_run
//! use pwadev::icons::{self, IconConfig};
//!
//! # fn main() -> pwadev::Result<()> {
//! let config = IconConfig {
//!     sizes: vec![192, 512],
//!     ..Default::default()
//! };
//! let written = icons::generate(&config)?;
//! println!("wrote {} icons", written.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod icons;
pub mod server;

// Re-export the server types at the crate root for ergonomic use
pub use server::{DevServer, DevServerConfig};
