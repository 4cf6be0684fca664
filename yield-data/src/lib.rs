pub mod brackets;
pub mod feed;

pub use brackets::{BracketTableLoader, BracketTableLoaderError};
pub use feed::{DEFAULT_FEED_URL, FundFeedClient, FundFeedError, load_funds};
