//! Resources served by the `2010-04-01` API version.

pub mod account;
