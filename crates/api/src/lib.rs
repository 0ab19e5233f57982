//! `royalty-api` — HTTP surface over the royalty ledger.

pub mod app;
