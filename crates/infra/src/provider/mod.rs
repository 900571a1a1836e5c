//! Identity provider adapters

mod gotrue;

pub use gotrue::GoTrueClient;
