pub mod collector;
pub mod droid;
pub mod scraper;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use collector::*;
pub use droid::*;
pub use scraper::*;
pub use session::*;
