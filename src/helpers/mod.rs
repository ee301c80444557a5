//! Helper functions shared by the generator and commands

mod url;

pub use url::*;
