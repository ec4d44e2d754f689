//! The two animals every scenario works with.

use menagerie_animals::{Animal, Dog};

pub const UNKNOWN_ANIMAL_NAME: &str = "Bob the unknown";
pub const DOG_NAME: &str = "Cozmo the dog";
pub const DOG_COLLAR_BRAND: &str = "Barky";

pub fn bob() -> Animal {
    Animal::new(UNKNOWN_ANIMAL_NAME)
}

pub fn cozmo() -> Dog {
    Dog::new(DOG_NAME, DOG_COLLAR_BRAND)
}
