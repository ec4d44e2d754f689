//! `menagerie-core` — capability building blocks.
//!
//! This crate contains the **shared contract** every animal implements and the
//! line sink behaviours write into. It has no knowledge of concrete animals.

pub mod describable;
pub mod transcript;
pub mod value_object;

pub use describable::{Describable, run_polymorphic_animal_funcs};
pub use transcript::Transcript;
pub use value_object::ValueObject;
