//! Churnprep: Telco Churn Cleaning Library
//!
//! A library for cleaning a telco customer churn dataset and deriving
//! flags, bands and aggregate features for BI consumption.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
