//! Ordered demonstration scenarios.
//!
//! Each scenario constructs its own animals, so scenarios never share state
//! and can run in any subset.

use menagerie_core::{Describable, Transcript, run_polymorphic_animal_funcs};

use crate::entities::{bob, cozmo};

pub const PROPER_WAY_HEADER: &str = "***Proper way***";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Concrete calls, then the same calls through a capability reference.
    Walkthrough,
    /// Polymorphism isolated in a function taking the capability.
    ProperWay,
    /// Capability calls first, then what only the concrete types can do.
    ConcreteActions,
}

impl Scenario {
    /// Every scenario, in output order.
    pub const ALL: [Scenario; 3] = [
        Scenario::Walkthrough,
        Scenario::ProperWay,
        Scenario::ConcreteActions,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::Walkthrough => "walkthrough",
            Scenario::ProperWay => "proper_way",
            Scenario::ConcreteActions => "concrete_actions",
        }
    }

    pub fn run(self, out: &mut Transcript) {
        let before = out.len();
        match self {
            Scenario::Walkthrough => walkthrough(out),
            Scenario::ProperWay => proper_way(out),
            Scenario::ConcreteActions => concrete_actions(out),
        }
        tracing::info!(scenario = self.name(), lines = out.len() - before, "scenario finished");
    }
}

/// Runs every scenario in order.
pub fn run_demo() -> Transcript {
    let mut out = Transcript::new();
    for scenario in Scenario::ALL {
        scenario.run(&mut out);
    }
    out
}

fn walkthrough(out: &mut Transcript) {
    let unknown_animal = bob();
    unknown_animal.print_name(out);
    unknown_animal.make_sound(out);

    // A `&Animal` slot cannot hold a dog; the capability can hold either.
    let mut polymorphic_animal: &dyn Describable = &unknown_animal;
    polymorphic_animal.print_name(out);
    polymorphic_animal.make_sound(out);

    let dog = cozmo();
    polymorphic_animal = &dog;
    polymorphic_animal.print_name(out);
    polymorphic_animal.make_sound(out);
}

fn proper_way(out: &mut Transcript) {
    out.blank();
    out.push(PROPER_WAY_HEADER);

    let unknown_animal = bob();
    run_polymorphic_animal_funcs(&unknown_animal, out);

    let polymorphic_dog = cozmo();
    run_polymorphic_animal_funcs(&polymorphic_dog, out);
    // Still a `Dog` here, so the brand is reachable.
    polymorphic_dog.print_collar_brand(out);
}

fn concrete_actions(out: &mut Transcript) {
    let unknown_animal = bob();
    let dog = cozmo();

    out.blank();
    run_polymorphic_animal_funcs(&unknown_animal, out);
    run_polymorphic_animal_funcs(&dog, out);

    out.blank();
    unknown_animal.print_name(out);
    dog.print_collar_brand(out);
    dog.mark_territory(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use menagerie_animals::{DOG_SOUND, UNKNOWN_ANIMAL_SOUND};

    fn run(scenario: Scenario) -> Vec<String> {
        let mut out = Transcript::new();
        scenario.run(&mut out);
        out.into_lines()
    }

    #[test]
    fn walkthrough_dispatches_base_then_override() {
        assert_eq!(
            run(Scenario::Walkthrough),
            [
                "Bob the unknown",
                UNKNOWN_ANIMAL_SOUND,
                "Bob the unknown",
                UNKNOWN_ANIMAL_SOUND,
                "Cozmo the dog",
                DOG_SOUND,
            ]
        );
    }

    #[test]
    fn proper_way_ends_with_collar_brand() {
        assert_eq!(
            run(Scenario::ProperWay),
            [
                "",
                PROPER_WAY_HEADER,
                "Bob the unknown",
                UNKNOWN_ANIMAL_SOUND,
                "Cozmo the dog",
                DOG_SOUND,
                "Barky",
            ]
        );
    }

    #[test]
    fn concrete_actions_follow_capability_calls() {
        assert_eq!(
            run(Scenario::ConcreteActions),
            [
                "",
                "Bob the unknown",
                UNKNOWN_ANIMAL_SOUND,
                "Cozmo the dog",
                DOG_SOUND,
                "",
                "Bob the unknown",
                "Barky",
                "Cozmo the dog marks his territory!",
            ]
        );
    }

    #[test]
    fn run_demo_concatenates_scenarios_in_order() {
        let expected: Vec<String> = Scenario::ALL.into_iter().flat_map(run).collect();
        assert_eq!(run_demo().into_lines(), expected);
    }

    #[test]
    fn scenario_names_are_distinct() {
        let names: Vec<_> = Scenario::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["walkthrough", "proper_way", "concrete_actions"]);
    }
}
