//! Capability contract shared by every animal.

use crate::transcript::Transcript;

/// Behaviour an animal exposes to code that does not know its concrete type.
///
/// A `&dyn Describable` is strictly narrower than the concrete type behind it:
/// it carries exactly these two operations and nothing else. There is no
/// `Any` supertrait, so a caller holding the capability cannot recover the
/// concrete value.
///
/// Implementations append exactly one line per call and never fail.
pub trait Describable {
    /// Emits the animal's name.
    fn print_name(&self, out: &mut Transcript);

    /// Emits a description of the sound the animal makes.
    fn make_sound(&self, out: &mut Transcript);
}

/// Runs every capability operation against `animal`, in contract order.
///
/// Resolution is whatever the concrete type's `Describable` impl says: an
/// overriding impl wins, a forwarding impl reaches the embedded value.
pub fn run_polymorphic_animal_funcs(animal: &dyn Describable, out: &mut Transcript) {
    let before = out.len();
    animal.print_name(out);
    animal.make_sound(out);
    tracing::debug!(lines = out.len() - before, "dispatched through Describable");
}
