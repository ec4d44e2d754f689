use serde::{Deserialize, Serialize};

use menagerie_core::{Describable, Transcript, ValueObject};

use crate::animal::{Animal, AnimalName};

/// A dog's own sound, replacing the generic one.
pub const DOG_SOUND: &str = "Woof!";

/// Brand printed on a dog's collar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollarBrand(String);

impl CollarBrand {
    pub fn new(brand: impl Into<String>) -> Self {
        Self(brand.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for CollarBrand {}

impl AsRef<str> for CollarBrand {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CollarBrand {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CollarBrand {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for CollarBrand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The "child" record: an [`Animal`] plus a collar brand.
///
/// `Dog` owns its `Animal` and re-exposes it explicitly. `print_name` is
/// forwarded to the embedded animal; `make_sound` is Dog's own.
///
/// Dog-only behaviour needs the concrete type. Through the capability it is
/// out of reach:
///
/// ```compile_fail
/// use menagerie_animals::Dog;
/// use menagerie_core::{Describable, Transcript};
///
/// let cozmo = Dog::new("Cozmo the dog", "Barky");
/// let capability: &dyn Describable = &cozmo;
/// let mut out = Transcript::new();
/// capability.mark_territory(&mut out);
/// ```
///
/// ```compile_fail
/// use menagerie_animals::Dog;
/// use menagerie_core::Describable;
///
/// let capability: &dyn Describable = &Dog::new("Cozmo the dog", "Barky");
/// let _ = capability.collar_brand();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    animal: Animal,
    collar_brand: CollarBrand,
}

impl Dog {
    pub fn new(name: impl Into<AnimalName>, collar_brand: impl Into<CollarBrand>) -> Self {
        Self {
            animal: Animal::new(name),
            collar_brand: collar_brand.into(),
        }
    }

    /// Builds a dog around an existing animal value.
    pub fn from_animal(animal: Animal, collar_brand: impl Into<CollarBrand>) -> Self {
        Self {
            animal,
            collar_brand: collar_brand.into(),
        }
    }

    pub fn animal(&self) -> &Animal {
        &self.animal
    }

    pub fn name(&self) -> &AnimalName {
        self.animal.name()
    }

    pub fn collar_brand(&self) -> &CollarBrand {
        &self.collar_brand
    }

    pub fn print_collar_brand(&self, out: &mut Transcript) {
        out.push(self.collar_brand.as_str());
    }

    pub fn mark_territory(&self, out: &mut Transcript) {
        out.push(format!("{} marks his territory!", self.name()));
    }
}

impl Describable for Dog {
    fn print_name(&self, out: &mut Transcript) {
        self.animal.print_name(out);
    }

    fn make_sound(&self, out: &mut Transcript) {
        out.push(DOG_SOUND);
    }
}
