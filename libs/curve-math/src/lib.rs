#![no_std]

pub mod full_math;
pub mod pricing;
pub mod quote;

pub use full_math::*;
pub use pricing::*;
pub use quote::*;
