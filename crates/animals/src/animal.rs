use serde::{Deserialize, Serialize};

use menagerie_core::{Describable, Transcript, ValueObject};

/// What an animal says when it has no more specific sound.
pub const UNKNOWN_ANIMAL_SOUND: &str = "I do not know what type of animal I am. :(";

/// Name of an animal. Any text is accepted, including the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimalName(String);

impl AnimalName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for AnimalName {}

impl AsRef<str> for AnimalName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AnimalName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AnimalName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for AnimalName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The "parent" record: a generic named animal.
///
/// Other animals reuse it by owning one, not by extending it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    name: AnimalName,
}

impl Animal {
    pub fn new(name: impl Into<AnimalName>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &AnimalName {
        &self.name
    }
}

impl Describable for Animal {
    fn print_name(&self, out: &mut Transcript) {
        out.push(self.name.as_str());
    }

    fn make_sound(&self, out: &mut Transcript) {
        out.push(UNKNOWN_ANIMAL_SOUND);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menagerie_core::run_polymorphic_animal_funcs;

    #[test]
    fn print_name_emits_exact_name() {
        let bob = Animal::new("Bob the unknown");
        let mut out = Transcript::new();
        bob.print_name(&mut out);
        assert_eq!(out.lines(), ["Bob the unknown"]);
    }

    #[test]
    fn make_sound_emits_generic_message() {
        let bob = Animal::new("Bob the unknown");
        let mut out = Transcript::new();
        bob.make_sound(&mut out);
        assert_eq!(out.lines(), [UNKNOWN_ANIMAL_SOUND]);
    }

    #[test]
    fn empty_name_is_emitted_as_empty_line() {
        let nameless = Animal::new("");
        let mut out = Transcript::new();
        run_polymorphic_animal_funcs(&nameless, &mut out);
        assert_eq!(out.lines(), ["", UNKNOWN_ANIMAL_SOUND]);
    }

    #[test]
    fn concrete_and_capability_calls_agree() {
        let bob = Animal::new("Bob the unknown");

        let mut direct = Transcript::new();
        bob.print_name(&mut direct);
        bob.make_sound(&mut direct);

        let mut dynamic = Transcript::new();
        let capability: &dyn Describable = &bob;
        capability.print_name(&mut dynamic);
        capability.make_sound(&mut dynamic);

        assert_eq!(direct, dynamic);
    }

    #[test]
    fn names_compare_by_value() {
        assert_eq!(AnimalName::from("Rex"), AnimalName::new(String::from("Rex")));
        assert_ne!(AnimalName::from("Rex"), AnimalName::from("rex"));
        assert_eq!(AnimalName::from("Rex").to_string(), "Rex");
    }

    #[test]
    fn animal_serializes_name_transparently() {
        let json = serde_json::to_value(Animal::new("Bob the unknown")).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Bob the unknown" }));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the name comes back verbatim, whatever it is.
            #[test]
            fn print_name_is_identity(name in ".*") {
                let mut out = Transcript::new();
                Animal::new(name.clone()).print_name(&mut out);
                prop_assert_eq!(out.into_lines(), vec![name]);
            }

            /// Property: the sound does not depend on the name.
            #[test]
            fn sound_is_independent_of_name(name in ".*") {
                let mut out = Transcript::new();
                Animal::new(name).make_sound(&mut out);
                prop_assert_eq!(out.into_lines(), vec![UNKNOWN_ANIMAL_SOUND.to_string()]);
            }
        }
    }
}
