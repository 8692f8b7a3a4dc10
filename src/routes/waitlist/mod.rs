mod errors;
mod types;
mod waitlist_handler;

pub use errors::WaitlistError;
pub use waitlist_handler::join_waitlist;
