pub mod domain_table;
pub mod enrichment;
pub mod page_text;
pub mod scraped_content;
pub mod text_cleaner;

pub use enrichment::*;
pub use scraped_content::*;
