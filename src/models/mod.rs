pub mod achievement;
pub mod error;
pub mod rank;
pub mod record;
pub mod user;

pub use achievement::*;
pub use error::*;
pub use rank::*;
pub use record::*;
pub use user::*;
