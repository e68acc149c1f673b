//! Pipeline module - the cleaning and feature stages, in run order:
//! load, trim, TotalCharges, flags, bands, aggregates, customerID, reorder, export

pub mod bands;
pub mod clean;
pub mod column;
pub mod error;
pub mod features;
pub mod flags;
pub mod loader;
pub mod reorder;
pub mod schema;

pub use bands::*;
pub use clean::*;
pub use error::{PipelineError, Result};
pub use features::*;
pub use flags::*;
pub use loader::*;
pub use reorder::*;
pub use schema::*;
