mod responder;
mod session;

pub use responder::{Reply, Responder};
pub use session::Session;
