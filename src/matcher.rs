mod core;
mod model;

pub(crate) use self::core::TypedRegistry;
pub(crate) use model::{Capturable, CaptureError, FlagOption, OptionEntry};
