use crate::action::{Action, Target};
use crate::condition::Condition;
use crate::effect::SideEffect;
use crate::table::{StateDefinition, StateTable};

/// Where the built-in story begins.
pub const STARTING_STATE: &str = "kitchen";

/// Flag set by drinking the coffee.
pub const HAS_DRUNK_COFFEE: &str = "hasDrunkCoffee";

/// The kitchen story: make coffee, maybe drink it, read the book in the
/// bedroom and step outside to win.
pub fn kitchen_story() -> StateTable {
    StateTable::new()
        .with_state(
            "kitchen",
            StateDefinition::new("There is a kettle, a mug and a jar of coffee.")
                .at("Kitchen")
                .with_action(Action::go("Go south", "bedroom"))
                .with_action(Action::go("Make coffee", "makeCoffee")),
        )
        .with_state(
            "makeCoffee",
            StateDefinition::new("You have made a nice hot mug of coffee.")
                .with_action(Action::continue_on())
                .with_effect(SideEffect::add_to_bag(Action::go(
                    "Mug Of Coffee",
                    "drinkCoffee",
                ))),
        )
        .with_state(
            "drinkCoffee",
            StateDefinition::new("The Coffee is delicious.")
                .with_action(Action::continue_on())
                .with_effect(SideEffect::set_flag(HAS_DRUNK_COFFEE)),
        )
        .with_state(
            "bedroom",
            StateDefinition::new("There is a bed and a book")
                .at("Bedroom")
                .with_action(Action::go("Go north", "kitchen"))
                .with_action(Action::go("Go south", "outside"))
                .with_action(Action::new(
                    "Go to sleep",
                    Target::when(Condition::flag(HAS_DRUNK_COFFEE), "cantSleep", "sleeping"),
                ))
                .with_action(Action::go("Read book", "readBook")),
        )
        .with_state(
            "cantSleep",
            StateDefinition::new("The coffee you drank earlier is making it hard to drop off...")
                .with_action(Action::continue_on()),
        )
        .with_state(
            "sleeping",
            StateDefinition::new("zzzzz...").with_action(Action::continue_on()),
        )
        .with_state(
            "readBook",
            StateDefinition::new("The book tells you that you must go outside to win.")
                .with_action(Action::continue_on()),
        )
        .with_state(
            "outside",
            StateDefinition::new("You are outside. YOU WIN!! CONGRATULATIONS!!")
                .at("Outside")
                .with_action(Action::start_again()),
        )
}
