//! Records supplied by the surrounding application.

pub mod event;
pub mod principal;

pub use event::Event;
pub use principal::Principal;
