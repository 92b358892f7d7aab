//! Random play-throughs of the built-in story.

use kp_core::story::kitchen_story;
use kp_core::{Engine, EngineConfig, Screen, Selection, Target};
use proptest::prelude::*;

/// A raw pick: which menu, and a number folded into its entry count.
fn pick() -> impl Strategy<Value = (bool, usize)> {
    (any::<bool>(), 0usize..16)
}

proptest! {
    #[test]
    fn invariants_hold_on_every_path(picks in prop::collection::vec(pick(), 0..64)) {
        let table = kitchen_story();
        let mut engine = Engine::start(table.clone(), EngineConfig::default(), Screen::new()).unwrap();

        for (use_bag, n) in picks {
            let bag_len = engine.session().bag().len();
            let selection = if use_bag && bag_len > 0 {
                Selection::Bag(n % bag_len)
            } else {
                Selection::Action(n % engine.actions().len())
            };

            let location_before = engine.session().current_location().clone();
            let bag_before = engine.session().bag().len();
            let entered = engine.select(selection).unwrap();
            let def = table.get(entered.as_str()).unwrap();

            prop_assert_eq!(engine.session().current_state(), &entered);

            if def.location.is_some() {
                prop_assert_eq!(engine.session().current_location(), &entered);
                prop_assert_eq!(engine.renderer().location.as_ref(), def.location.as_ref());
            } else {
                prop_assert_eq!(engine.session().current_location(), &location_before);
            }

            let bag = engine.session().bag();
            prop_assert!(bag.len() >= bag_before);
            if let Some(placeholder) = bag.placeholder() {
                prop_assert_eq!(&placeholder.target, &Target::Fixed(entered.clone()));
                prop_assert_eq!(bag.selected(), Some(0));
                prop_assert_eq!(engine.renderer().bag.len(), bag.len());
            }

            prop_assert_eq!(engine.actions().len(), def.player_actions.len() + 1);
            prop_assert_eq!(&engine.renderer().description, &def.description);
        }
    }
}
