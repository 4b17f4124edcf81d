mod binding;
mod core;
mod flag;

pub use self::core::FlagParser;
pub use binding::{ConvertError, Destination};
pub use flag::{Flag, RegisterError};
