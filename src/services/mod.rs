pub mod content_fetcher;
pub mod credential_rotator;
pub mod droid;
pub mod enricher;
pub mod openai_client;
pub mod summarizer;
pub mod throttle;

#[cfg(test)]
pub mod testing;

pub use content_fetcher::*;
pub use credential_rotator::*;
pub use droid::*;
pub use enricher::*;
pub use openai_client::*;
pub use summarizer::*;
pub use throttle::*;
