pub mod auth;
pub mod billing;
pub mod booking;
pub mod payment;
pub mod review;
pub mod room;
