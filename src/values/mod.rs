//! The value model shared by every attribute
//!
//! A [`Value`] pairs one typed observation with the [`Status`] it was classified
//! as, a per-attribute sequence number, and the time it was recorded. The four
//! payload types (`f64`, `u64`, `f64` totals, and [`Quartiles`]) can be erased
//! into an [`Observation`] wherever values of different attributes have to live
//! side by side, such as in a store or a report.

mod attribute_name;
mod criticality;
mod observation;
mod quartiles;
mod status;
mod type_tag;
mod value;

pub use attribute_name::AttributeName;
pub use criticality::CriticalityLevel;
pub use observation::Observation;
pub use quartiles::{Quartiles, Statistic};
pub use status::Status;
pub use type_tag::TypeTag;
pub use value::{StoredValue, Value};
