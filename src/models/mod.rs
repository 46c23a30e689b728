pub mod user;
pub mod event;
pub mod summary;
pub(crate) mod lenient;

pub use user::*;
pub use event::*;
pub use summary::*;
