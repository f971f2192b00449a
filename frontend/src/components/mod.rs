pub mod auth;
pub mod charts;
pub mod common;
pub mod layout;
pub mod media;
pub mod navigation;

pub use auth::*;
pub use charts::*;
pub use common::*;
pub use media::*;
pub use navigation::*;
