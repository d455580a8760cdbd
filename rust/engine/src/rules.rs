use crate::board::Coord;
use crate::cards::Card;
use crate::errors::{ExchangeDeadCardError, PlayCardError};
use crate::game::{GameEvent, GameState};
use crate::player::PlayerRef;

/// Validates a card play and builds the event it produces.
///
/// The acting player must be seated, be the current player and hold `card`.
/// A one-eyed jack removes an opponent chip that is not locked in a sequence;
/// any other card places a chip on an empty cell whose tile matches (two-eyed
/// jacks match every non-corner cell). Nothing is mutated: the returned event
/// still has to be persisted and applied with [`GameState::apply`].
///
/// # Errors
///
/// Returns the first [`PlayCardError`] that applies, checked in this order:
/// player resolution, turn, card ownership, then the removal or placement rules.
///
/// # Examples
///
/// ```
/// use sequence_engine::board::{BoardType, Coord};
/// use sequence_engine::deck::Seed;
/// use sequence_engine::errors::PlayCardError;
/// use sequence_engine::game::{GameInit, GameState};
/// use sequence_engine::player::{Player, PlayerId};
/// use sequence_engine::rules::play_card;
///
/// let players = vec![Player::new(1, "alice"), Player::new(2, "bob")];
/// let init = GameInit::new(players, PlayerId(1), Seed(42), BoardType::Sequence, 2).unwrap();
/// let state = GameState::new(&init).unwrap();
///
/// // bob may not move on alice's turn
/// let card = *state.hand(1).iter().next().unwrap();
/// let result = play_card(&state, &"bob".into(), card, Coord::new(4, 4));
/// assert_eq!(result, Err(PlayCardError::PlayerIsNotCurrentPlayer));
/// ```
pub fn play_card(
    state: &GameState,
    player: &PlayerRef,
    card: Card,
    coord: Coord,
) -> Result<GameEvent, PlayCardError> {
    let seat = state
        .player_index(player)
        .ok_or(PlayCardError::PlayerIsNotInGame)?;
    let player_id = state.player_ids()[seat];
    if state.current_player_id() != Some(player_id) {
        return Err(PlayCardError::PlayerIsNotCurrentPlayer);
    }
    if !state.hand(seat).contains(&card) {
        return Err(PlayCardError::PlayerDoesNotHaveCard);
    }

    let team = state.teams()[seat];
    let next_player_id = state.player_ids()[state.next_seat(seat)];
    let index = state.version() + 1;
    let card_drawn = state.deck().peek();

    if card.is_one_eyed_jack() {
        match state.chips().get(&coord) {
            None => return Err(PlayCardError::CoordIsEmpty),
            Some(owner) if *owner == team => return Err(PlayCardError::ChipBelongsToPlayerTeam),
            Some(_) => {}
        }
        if state.coords_in_sequence().contains(&coord) {
            return Err(PlayCardError::ChipIsPartOfSequence);
        }
        return Ok(GameEvent {
            by_player_id: player_id,
            card_used: card,
            card_drawn,
            chip: None,
            coord,
            index,
            next_player_id: Some(next_player_id),
            sequences: Vec::new(),
            winner: None,
        });
    }

    if state.chips().contains_key(&coord) {
        return Err(PlayCardError::CoordIsOccupied);
    }
    let board = state.board();
    if board.is_corner(coord) || !board.matches(coord, &card) {
        return Err(PlayCardError::CardDoesNotMatchCoord);
    }

    let mut chips = state.chips().clone();
    chips.insert(coord, team);
    let sequences = board.get_sequences(&chips, &state.team_sequence_coords(team), coord, team);
    let total = state.sequence_count(team) + sequences.len();
    let (winner, next_player_id) = if total >= usize::from(state.win_condition()) {
        (Some(team), None)
    } else {
        (None, Some(next_player_id))
    };

    Ok(GameEvent {
        by_player_id: player_id,
        card_used: card,
        card_drawn,
        chip: Some(team),
        coord,
        index,
        next_player_id,
        sequences,
        winner,
    })
}

/// Validates swapping a dead card for a fresh one.
///
/// The exchange keeps the turn with the same player, who must still play a
/// real card afterwards. Only one exchange is allowed per turn.
///
/// # Errors
///
/// Returns the first [`ExchangeDeadCardError`] that applies.
pub fn exchange_dead_card(
    state: &GameState,
    player: &PlayerRef,
    card: Card,
) -> Result<GameEvent, ExchangeDeadCardError> {
    let seat = state
        .player_index(player)
        .ok_or(ExchangeDeadCardError::PlayerIsNotInGame)?;
    let player_id = state.player_ids()[seat];
    if state.current_player_id() != Some(player_id) {
        return Err(ExchangeDeadCardError::PlayerIsNotCurrentPlayer);
    }
    if !state.hand(seat).contains(&card) {
        return Err(ExchangeDeadCardError::PlayerDoesNotHaveCard);
    }
    if !state.dead_cards().contains(&card) {
        return Err(ExchangeDeadCardError::CardIsNotDead);
    }
    if state.has_exchanged_dead_card() {
        return Err(ExchangeDeadCardError::PlayerHasAlreadyExchangedDeadCard);
    }

    Ok(GameEvent {
        by_player_id: player_id,
        card_used: card,
        card_drawn: state.deck().peek(),
        chip: None,
        coord: Coord::NONE,
        index: state.version() + 1,
        next_player_id: Some(player_id),
        sequences: Vec::new(),
        winner: None,
    })
}

/// Every coordinate where `player` could legally use `card` right now,
/// ignoring whose turn it is. Empty for players who are not seated.
pub fn legal_coords(state: &GameState, player: &PlayerRef, card: &Card) -> Vec<Coord> {
    let Some(seat) = state.player_index(player) else {
        return Vec::new();
    };
    let team = state.teams()[seat];
    if card.is_one_eyed_jack() {
        return state
            .chips()
            .iter()
            .filter(|(coord, owner)| {
                **owner != team && !state.coords_in_sequence().contains(*coord)
            })
            .map(|(coord, _)| *coord)
            .collect();
    }
    let board = state.board();
    board
        .cells()
        .filter(|(coord, tile)| {
            tile.is_some() && !state.chips().contains_key(coord) && board.matches(*coord, card)
        })
        .map(|(coord, _)| coord)
        .collect()
}
