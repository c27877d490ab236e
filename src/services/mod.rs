pub mod heuristic_extractor;
pub mod openai_client;
pub mod page_fetcher;
pub mod sanitizer;
pub mod signal_detector;

pub use heuristic_extractor::*;
pub use openai_client::*;
pub use page_fetcher::*;
pub use sanitizer::*;
pub use signal_detector::*;
