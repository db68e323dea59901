//! Share management: create, list, update and delete shares on the server.

pub mod bus;
pub mod event;
pub mod manager;
pub mod negotiator;
pub mod parser;

pub use bus::EventBus;
pub use event::{ShareEvent, ShareOperation};
pub use manager::ShareManager;
