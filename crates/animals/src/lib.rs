//! Animals domain module.
//!
//! Concrete animals implementing the `Describable` capability. Pure in-memory
//! values: no IO besides appending to a `Transcript`.

pub mod animal;
pub mod dog;

pub use animal::{Animal, AnimalName, UNKNOWN_ANIMAL_SOUND};
pub use dog::{CollarBrand, DOG_SOUND, Dog};
