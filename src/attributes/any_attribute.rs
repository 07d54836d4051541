use super::{AccumulatorAttribute, AttributeRecord, ComplexAttribute, CountAttribute, NumericAttribute};
use crate::extract::{Pattern, RawMatch};
use crate::values::{AttributeName, CriticalityLevel, Status, StoredValue, TypeTag};
use crate::Result;

/// An attribute of any kind, as stored by the registry.
#[derive(Debug)]
pub enum AnyAttribute {
    Numeric(NumericAttribute),
    Count(CountAttribute),
    Accumulator(AccumulatorAttribute),
    Complex(ComplexAttribute),
}

macro_rules! dispatch {
    ($self:expr, $attr:ident => $body:expr) => {
        match $self {
            AnyAttribute::Numeric($attr) => $body,
            AnyAttribute::Count($attr) => $body,
            AnyAttribute::Accumulator($attr) => $body,
            AnyAttribute::Complex($attr) => $body,
        }
    };
}

macro_rules! accessors {
    ($variant:ident, $ty:ty, $as_ref:ident, $as_mut:ident) => {
        #[must_use]
        pub const fn $as_ref(&self) -> Option<&$ty> {
            match self {
                Self::$variant(attr) => Some(attr),
                _ => None,
            }
        }

        #[must_use]
        pub fn $as_mut(&mut self) -> Option<&mut $ty> {
            match self {
                Self::$variant(attr) => Some(attr),
                _ => None,
            }
        }
    };
}

impl AnyAttribute {
    accessors!(Numeric, NumericAttribute, as_numeric, as_numeric_mut);
    accessors!(Count, CountAttribute, as_count, as_count_mut);
    accessors!(Accumulator, AccumulatorAttribute, as_accumulator, as_accumulator_mut);
    accessors!(Complex, ComplexAttribute, as_complex, as_complex_mut);

    #[must_use]
    pub const fn name(&self) -> &AttributeName {
        dispatch!(self, a => a.name())
    }

    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        dispatch!(self, a => a.pattern())
    }

    #[must_use]
    pub const fn criticality(&self) -> CriticalityLevel {
        dispatch!(self, a => a.criticality())
    }

    #[must_use]
    pub const fn type_tag(&self) -> TypeTag {
        dispatch!(self, a => a.type_tag())
    }

    #[must_use]
    pub fn status(&self) -> Option<Status> {
        dispatch!(self, a => a.status())
    }

    pub fn record(&mut self, raw: &RawMatch) -> Result<Status> {
        dispatch!(self, a => a.record(raw))
    }

    pub fn reset_window(&mut self) {
        dispatch!(self, a => a.reset_window());
    }

    #[must_use]
    pub fn current(&self) -> Option<StoredValue> {
        dispatch!(self, a => a.current_stored())
    }

    /// Earlier values with their payload erased, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<StoredValue> {
        dispatch!(self, a => a.history_stored())
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        dispatch!(self, a => a.history_len())
    }

    #[must_use]
    pub fn pending(&self) -> Vec<StoredValue> {
        dispatch!(self, a => a.pending())
    }

    pub fn mark_saved(&mut self, sequence: u64) {
        dispatch!(self, a => a.mark_saved(sequence));
    }

    pub fn restore(&mut self, values: Vec<StoredValue>) -> Result<()> {
        dispatch!(self, a => a.restore(values))
    }

    #[must_use]
    pub fn to_record(&self) -> AttributeRecord {
        dispatch!(self, a => a.to_record())
    }
}

impl From<NumericAttribute> for AnyAttribute {
    fn from(attr: NumericAttribute) -> Self {
        Self::Numeric(attr)
    }
}

impl From<CountAttribute> for AnyAttribute {
    fn from(attr: CountAttribute) -> Self {
        Self::Count(attr)
    }
}

impl From<AccumulatorAttribute> for AnyAttribute {
    fn from(attr: AccumulatorAttribute) -> Self {
        Self::Accumulator(attr)
    }
}

impl From<ComplexAttribute> for AnyAttribute {
    fn from(attr: ComplexAttribute) -> Self {
        Self::Complex(attr)
    }
}
