pub mod admin;
pub mod buy_tickets;
pub mod close_round;
pub mod reject;

pub use admin::*;
pub use buy_tickets::*;
pub use close_round::*;
pub use reject::*;
