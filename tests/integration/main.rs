//! HTTP-level tests against the in-memory store.

mod helpers;

mod access_test;
mod customer_test;
mod error_test;
mod probe_test;
