//! Browser-level tests against a locally started site.

pub mod browser;
pub mod test_server;
