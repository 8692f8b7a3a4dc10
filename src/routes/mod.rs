mod health_check;
mod helpers;
mod pages;
mod waitlist;

pub use health_check::health_check;
pub use helpers::{error_chain_fmt, json_error_handler};
pub use pages::{Templates, home, thank_you};
pub use waitlist::{WaitlistError, join_waitlist};
