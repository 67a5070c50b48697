//! Effects showcase carousel: catalog, layout bookkeeping and the
//! drag/momentum/snap state machine, free of any platform API so the web
//! front-end and the native simulator share it.

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod physics;
pub mod sim;

pub use carousel::*;
pub use catalog::*;
pub use config::*;
pub use error::*;
pub use geometry::*;
pub use layout::*;
pub use physics::*;
