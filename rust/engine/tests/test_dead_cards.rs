use sequence_engine::board::{BoardType, Coord};
use sequence_engine::deck::Seed;
use sequence_engine::errors::ExchangeDeadCardError;
use sequence_engine::game::{GameEvent, GameInit, GameState};
use sequence_engine::player::{Player, PlayerId};
use sequence_engine::rules::exchange_dead_card;

fn table() -> GameState {
    let players = vec![Player::new(1, "a"), Player::new(2, "b"), Player::new(3, "c")];
    let init = GameInit::new(players, PlayerId(1), Seed(9), BoardType::Sequence, 2).unwrap();
    GameState::new(&init).unwrap()
}

/// Chip for seat 1's team on `coord`, turn back to seat 0.
fn occupy(state: &GameState, coord: Coord) -> GameState {
    let event = GameEvent {
        by_player_id: state.player_ids()[1],
        card_used: *state.hand(1).iter().next().unwrap(),
        card_drawn: state.deck().peek(),
        chip: Some(state.teams()[1]),
        coord,
        index: state.version() + 1,
        next_player_id: Some(state.player_ids()[0]),
        sequences: vec![],
        winner: None,
    };
    state.apply(&event)
}

#[test]
fn card_with_both_cells_taken_is_dead_and_exchangeable() {
    let mut state = table();
    let card = *state
        .hand(0)
        .iter()
        .find(|c| !c.is_one_eyed_jack() && !c.is_two_eyed_jack())
        .unwrap();
    let pair = *state.board().coords_for(&card.tile()).unwrap();

    state = occupy(&state, pair[0]);
    assert!(!state.dead_cards().contains(&card));
    state = occupy(&state, pair[1]);
    assert!(state.dead_cards().contains(&card));

    let view = state.player_view(&"a".into()).unwrap();
    assert!(view.dead_cards.contains(&card));
    assert!(view.can_exchange_dead_card);

    let before = state.current_player_id();
    let hand_size = state.hand(0).len();
    let event = exchange_dead_card(&state, &"a".into(), card).expect("exchange ok");
    assert_eq!(event.coord, Coord::NONE);
    assert_eq!(event.next_player_id, before);

    let state = state.apply(&event);
    assert_eq!(state.current_player_id(), before);
    assert_eq!(state.hand(0).len(), hand_size);
    assert!(!state.hand(0).contains(&card));
    assert_eq!(state.discards().last(), Some(&card));
    assert!(!state.player_view(&"a".into()).unwrap().can_exchange_dead_card);
}

#[test]
fn exchange_requires_a_seated_player_and_a_held_card() {
    let state = table();
    let card = *state.hand(0).iter().next().unwrap();
    assert_eq!(
        exchange_dead_card(&state, &"zed".into(), card),
        Err(ExchangeDeadCardError::PlayerIsNotInGame)
    );
    let theirs = *state.hand(2).iter().next().unwrap();
    assert_eq!(
        exchange_dead_card(&state, &"a".into(), theirs),
        Err(ExchangeDeadCardError::PlayerDoesNotHaveCard)
    );
}
