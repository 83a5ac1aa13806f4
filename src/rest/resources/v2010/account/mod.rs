//! Resources scoped under an account.

pub mod application;

pub use application::{
    ApplicationContext, ApplicationInstance, ApplicationProperties, ApplicationSolution,
    ApplicationUpdateParams,
};
