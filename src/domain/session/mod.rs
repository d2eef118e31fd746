pub mod model;
pub mod store;

pub use model::{Session, SessionResponse, SessionState, SessionStateName, Summary};
pub use store::SessionStore;
