//! Presentation helpers: formatting, notifications, navigation state and
//! rate limiting. No rendering happens here.

mod format;
mod navigation;
mod notification;
mod rate_limit;

pub use format::*;
pub use navigation::*;
pub use notification::*;
pub use rate_limit::*;
