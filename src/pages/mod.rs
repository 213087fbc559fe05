pub mod doc_page;

pub use doc_page::{DocPage, Landing};
