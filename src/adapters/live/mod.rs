//! Live adapters that talk to real upstream APIs.

pub mod http;
