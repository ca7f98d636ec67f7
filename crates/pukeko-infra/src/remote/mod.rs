//! Remote data gateway - HTTP clients for the document store and the
//! server-side functions.

mod http;

pub use http::{HttpDocumentStore, HttpFunctions};
