mod object_urls;
mod style_sheet;

pub use object_urls::InMemoryObjectUrls;
pub use style_sheet::InMemoryStyleSheet;
