pub mod upstream_document;
