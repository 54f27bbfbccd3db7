mod billing;
mod booking;
mod booking_activity;
mod review;
mod room;
mod user;

pub use billing::*;
pub use booking::*;
pub use booking_activity::*;
pub use review::*;
pub use room::*;
pub use user::*;
