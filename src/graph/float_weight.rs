//!
//! FloatWeight
//!
use crate::common::Dist;

/// Edge attribute that can be used as a real-valued edge weight
pub trait FloatWeight {
    fn float_weight(&self) -> Dist;
}

impl FloatWeight for f64 {
    fn float_weight(&self) -> Dist {
        *self
    }
}

impl FloatWeight for f32 {
    fn float_weight(&self) -> Dist {
        *self as Dist
    }
}

impl FloatWeight for i64 {
    fn float_weight(&self) -> Dist {
        *self as Dist
    }
}

impl FloatWeight for i32 {
    fn float_weight(&self) -> Dist {
        *self as Dist
    }
}

impl FloatWeight for u32 {
    fn float_weight(&self) -> Dist {
        *self as Dist
    }
}

impl FloatWeight for usize {
    fn float_weight(&self) -> Dist {
        *self as Dist
    }
}
