pub mod docs_layout;

pub use docs_layout::DocsLayout;
