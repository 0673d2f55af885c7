//! Compute the choices offered to the player.
//!
//! Everything here is a pure function of [`GameState`]. An entity action is
//! offered exactly when its transition's `pre_validate` accepts it, so the
//! menu and the executor can never disagree about a gate.

use crate::state::{Capabilities, GameState, ItemState, NpcState};

use super::{
    ActionKind, ActionTransition, CollectAction, MenuEntry, ObserveAction,
    SpecialObserveAction, SpecialTalkAction, TalkAction, Target, TurnAction,
};

/// Commands appended to every top-level menu, in order.
pub const COMMANDS: [ActionKind; 4] = [
    ActionKind::ChangeRoom,
    ActionKind::ReadMemo,
    ActionKind::Help,
    ActionKind::None,
];

/// Top-level menu of the current turn.
///
/// Items come before characters, both in declaration order. Clue items are
/// always listed; a weapon is listed only while it can be taken. A scheduled
/// character stays hidden until their arrival.
pub fn turn_menu(state: &GameState) -> Vec<MenuEntry> {
    let room = state.current_room();
    let items = state
        .entities
        .items_in(room)
        .filter(|item| !item.is_weapon() || can_collect(state, item))
        .map(|item| MenuEntry::Inspect(Target::Item(item.id)));
    let npcs = state
        .visible_npcs()
        .map(|npc| MenuEntry::Inspect(Target::Npc(npc.id)));

    items
        .chain(npcs)
        .chain(COMMANDS.into_iter().map(MenuEntry::Command))
        .collect()
}

/// Sub-menu for one entity. Always ends with [`ActionKind::None`].
pub fn entity_actions(state: &GameState, target: Target) -> Vec<TurnAction> {
    let mut actions = match target {
        Target::Item(id) => state
            .entities
            .item(id)
            .map(|item| item_actions(state, item))
            .unwrap_or_default(),
        Target::Npc(id) => state
            .entities
            .npc(id)
            .map(|npc| npc_actions(state, npc))
            .unwrap_or_default(),
    };
    actions.push(TurnAction::command(ActionKind::None));
    actions
}

/// Flat list of every legal action this turn, in menu order.
pub fn legal_actions(state: &GameState) -> Vec<TurnAction> {
    turn_menu(state)
        .into_iter()
        .flat_map(|entry| match entry {
            MenuEntry::Inspect(target) => {
                let mut actions = entity_actions(state, target);
                actions.pop();
                actions
            }
            MenuEntry::Command(kind) => vec![TurnAction::command(kind)],
        })
        .collect()
}

fn item_actions(state: &GameState, item: &ItemState) -> Vec<TurnAction> {
    let target = Target::Item(item.id);
    let caps = item.capabilities();
    let mut actions = Vec::new();

    if caps.contains(Capabilities::OBSERVABLE) && ObserveAction::new(target).pre_validate(state).is_ok() {
        actions.push(TurnAction::on(ActionKind::Observe, target));
    }
    if caps.contains(Capabilities::SPECIAL_OBSERVABLE)
        && SpecialObserveAction::new(item.id).pre_validate(state).is_ok()
    {
        actions.push(TurnAction::on(ActionKind::SpecialObserve, target));
    }
    if caps.contains(Capabilities::COLLECTIBLE) && can_collect(state, item) {
        actions.push(TurnAction::on(ActionKind::Collect, target));
    }
    actions
}

fn npc_actions(state: &GameState, npc: &NpcState) -> Vec<TurnAction> {
    let target = Target::Npc(npc.id);
    let caps = npc.capabilities();
    let mut actions = Vec::new();

    if caps.contains(Capabilities::ACCUSER) {
        if state.is_visible(npc) && npc.room == state.current_room() {
            actions.push(TurnAction::on(ActionKind::Accuse, target));
        }
        return actions;
    }
    if caps.contains(Capabilities::OBSERVABLE) && ObserveAction::new(target).pre_validate(state).is_ok() {
        actions.push(TurnAction::on(ActionKind::Observe, target));
    }
    if caps.contains(Capabilities::TALKABLE) && TalkAction::new(npc.id).pre_validate(state).is_ok() {
        actions.push(TurnAction::on(ActionKind::Talk, target));
    }
    if caps.contains(Capabilities::SPECIAL_TALKABLE)
        && SpecialTalkAction::new(npc.id).pre_validate(state).is_ok()
    {
        actions.push(TurnAction::on(ActionKind::SpecialTalk, target));
    }
    actions
}

fn can_collect(state: &GameState, item: &ItemState) -> bool {
    CollectAction::new(item.id).pre_validate(state).is_ok()
}

/// Every suspect and every weapon in the world, for the accusation prompts.
pub fn accusation_candidates(state: &GameState) -> (Vec<&NpcState>, Vec<&ItemState>) {
    let suspects = state.entities.suspects().collect();
    let weapons = state.entities.weapons().collect();
    (suspects, weapons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameEngine;
    use crate::action::Action;
    use crate::scenario::fixtures::manor_state;
    use crate::state::{GameState, ItemId, NpcId, RoomId};

    fn item(state: &GameState, name: &str) -> ItemId {
        state.entities.item_by_name(name).unwrap()
    }

    fn npc(state: &GameState, name: &str) -> NpcId {
        state.entities.npc_by_name(name).unwrap()
    }

    fn room(state: &GameState, name: &str) -> RoomId {
        state.world.room_by_name(name).unwrap()
    }

    fn goto(state: &mut GameState, name: &str) {
        state.progress.current_room = room(state, name);
    }

    fn run(state: &mut GameState, action: Action) {
        GameEngine::new(state).execute(&action).unwrap();
    }

    #[test]
    fn hall_menu_lists_items_then_characters_then_commands() {
        let state = manor_state();
        let menu = turn_menu(&state);
        assert_eq!(
            menu,
            vec![
                MenuEntry::Inspect(Target::Item(item(&state, "Coat rack"))),
                MenuEntry::Inspect(Target::Npc(npc(&state, "Inspector"))),
                MenuEntry::Command(ActionKind::ChangeRoom),
                MenuEntry::Command(ActionKind::ReadMemo),
                MenuEntry::Command(ActionKind::Help),
                MenuEntry::Command(ActionKind::None),
            ]
        );
    }

    #[test]
    fn menu_is_stable_across_queries() {
        let state = manor_state();
        assert_eq!(turn_menu(&state), turn_menu(&state));
        assert_eq!(legal_actions(&state), legal_actions(&state));
    }

    #[test]
    fn officer_only_offers_accusation() {
        let state = manor_state();
        let inspector = Target::Npc(npc(&state, "Inspector"));
        assert_eq!(
            entity_actions(&state, inspector),
            vec![
                TurnAction::on(ActionKind::Accuse, inspector),
                TurnAction::command(ActionKind::None),
            ]
        );
    }

    #[test]
    fn gated_weapon_is_offered_only_after_its_requirement() {
        let mut state = manor_state();
        goto(&mut state, "Study");
        let desk = item(&state, "Desk");
        let opener = Target::Item(item(&state, "Letter opener"));

        assert!(!turn_menu(&state).contains(&MenuEntry::Inspect(opener)));
        assert!(!legal_actions(&state).contains(&TurnAction::on(ActionKind::Collect, opener)));

        run(&mut state, Action::Observe(ObserveAction::new(Target::Item(desk))));

        assert!(turn_menu(&state).contains(&MenuEntry::Inspect(opener)));
        assert_eq!(
            entity_actions(&state, opener),
            vec![
                TurnAction::on(ActionKind::Collect, opener),
                TurnAction::command(ActionKind::None),
            ]
        );
    }

    #[test]
    fn collected_weapon_is_never_offered_again() {
        let mut state = manor_state();
        goto(&mut state, "Kitchen");
        let rope = item(&state, "Rope");
        assert!(legal_actions(&state).contains(&TurnAction::on(ActionKind::Collect, Target::Item(rope))));

        run(&mut state, Action::Collect(CollectAction::new(rope)));

        assert!(state.inventory.contains(rope));
        assert!(!turn_menu(&state).contains(&MenuEntry::Inspect(Target::Item(rope))));
        assert!(
            legal_actions(&state)
                .iter()
                .all(|action| action.target != Some(Target::Item(rope)))
        );
    }

    #[test]
    fn observe_is_offered_once() {
        let mut state = manor_state();
        let rack = Target::Item(item(&state, "Coat rack"));
        assert_eq!(entity_actions(&state, rack)[0], TurnAction::on(ActionKind::Observe, rack));

        run(&mut state, Action::Observe(ObserveAction::new(rack)));

        // Clue stays listed, with only the terminal option left.
        assert!(turn_menu(&state).contains(&MenuEntry::Inspect(rack)));
        assert_eq!(
            entity_actions(&state, rack),
            vec![TurnAction::command(ActionKind::None)]
        );
    }

    #[test]
    fn special_talk_needs_the_object_in_inventory() {
        let mut state = manor_state();
        let butler = npc(&state, "Butler");
        let special = TurnAction::on(ActionKind::SpecialTalk, Target::Npc(butler));

        goto(&mut state, "Study");
        assert!(!entity_actions(&state, Target::Npc(butler)).contains(&special));

        goto(&mut state, "Kitchen");
        let rope = item(&state, "Rope");
        run(&mut state, Action::Collect(CollectAction::new(rope)));

        goto(&mut state, "Study");
        assert!(entity_actions(&state, Target::Npc(butler)).contains(&special));

        run(&mut state, Action::SpecialTalk(SpecialTalkAction::new(butler)));
        assert!(!entity_actions(&state, Target::Npc(butler)).contains(&special));
    }

    #[test]
    fn suspect_sub_menu_order() {
        let mut state = manor_state();
        goto(&mut state, "Study");
        let butler = Target::Npc(npc(&state, "Butler"));
        assert_eq!(
            entity_actions(&state, butler),
            vec![
                TurnAction::on(ActionKind::Observe, butler),
                TurnAction::on(ActionKind::Talk, butler),
                TurnAction::command(ActionKind::None),
            ]
        );
    }

    #[test]
    fn special_observe_unlocks_after_confidence() {
        let mut state = manor_state();
        let portrait = Target::Item(item(&state, "Portrait"));
        let butler = npc(&state, "Butler");
        let special = TurnAction::on(ActionKind::SpecialObserve, portrait);

        goto(&mut state, "Study");
        assert!(!entity_actions(&state, portrait).contains(&special));

        let rope = item(&state, "Rope");
        goto(&mut state, "Kitchen");
        run(&mut state, Action::Collect(CollectAction::new(rope)));
        goto(&mut state, "Study");
        run(&mut state, Action::SpecialTalk(SpecialTalkAction::new(butler)));

        assert!(entity_actions(&state, portrait).contains(&special));
        let portrait_id = item(&state, "Portrait");
        run(
            &mut state,
            Action::SpecialObserve(SpecialObserveAction::new(portrait_id)),
        );
        assert!(!entity_actions(&state, portrait).contains(&special));
    }

    #[test]
    fn scheduled_character_is_hidden_until_arrival() {
        let mut state = manor_state();
        goto(&mut state, "Kitchen");
        let daughter = MenuEntry::Inspect(Target::Npc(npc(&state, "Daughter")));
        assert!(!turn_menu(&state).contains(&daughter));

        state.clock.advance(4 * 60);
        assert!(state.clock.check_triggers().arrival);
        assert!(turn_menu(&state).contains(&daughter));
    }

    #[test]
    fn entities_elsewhere_only_offer_none() {
        let state = manor_state();
        let butler = Target::Npc(npc(&state, "Butler"));
        assert_eq!(
            entity_actions(&state, butler),
            vec![TurnAction::command(ActionKind::None)]
        );
    }

    #[test]
    fn accusation_candidates_span_the_world() {
        let state = manor_state();
        let (suspects, weapons) = accusation_candidates(&state);
        let suspects: Vec<_> = suspects.iter().map(|npc| npc.name.as_str()).collect();
        let weapons: Vec<_> = weapons.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(suspects, vec!["Butler", "Cook"]);
        assert_eq!(weapons, vec!["Letter opener", "Rope", "Knife"]);
    }

    #[test]
    fn legal_actions_end_with_commands() {
        let state = manor_state();
        let actions = legal_actions(&state);
        let tail: Vec<_> = actions[actions.len() - 4..].iter().map(|a| a.kind).collect();
        assert_eq!(tail, COMMANDS.to_vec());
    }
}
