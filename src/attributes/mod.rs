//! Attributes and their kinds
//!
//! An [`Attribute`] is generic over an [`AttributeKind`], which decides how
//! extracted text is parsed and how each input changes the attribute's value:
//!
//! | Kind | Value | Each record |
//! |---|---|---|
//! | [`Numeric`] | `f64` | replaces the value |
//! | [`Count`] | `u64` | adds the captured delta, or one |
//! | [`Accumulator`] | `f64` | adds to a running total |
//! | [`Complex`] | [`Quartiles`](crate::Quartiles) | joins a sample set summarized by quartiles |
//!
//! [`AnyAttribute`] erases the kind so attributes of all four kinds can live in
//! one [`Registry`](crate::Registry). [`attribute_from_record`] rebuilds an
//! attribute from an [`AttributeRecord`] and its persisted history.

mod accumulator;
mod any_attribute;
mod attribute;
mod complex;
mod count;
mod factory;
mod kind;
mod numeric;
mod record;

pub use accumulator::Accumulator;
pub use any_attribute::AnyAttribute;
pub use attribute::{
    AccumulatorAttribute, Attribute, ComplexAttribute, CountAttribute, DEFAULT_HISTORY_LIMIT, NumericAttribute,
};
pub use complex::Complex;
pub use count::Count;
pub use factory::attribute_from_record;
pub use kind::AttributeKind;
pub use numeric::Numeric;
pub use record::AttributeRecord;
