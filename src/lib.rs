pub mod error;
pub mod extract;
pub mod filter;

pub use error::FilterError;
pub use extract::{extract_pair, scan_tokens, InfoFields};
pub use filter::{run, FilterStats};
