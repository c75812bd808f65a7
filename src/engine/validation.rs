use crate::domain::{Chips, Player, SeatIndex};
use crate::engine::actions::PlayerAction;
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;

/// Проверка, может ли игрок на месте `seat` выполнить действие
/// при текущем состоянии ставок. Ничего не меняет.
pub fn validate_action(
    players: &[Player],
    seat: SeatIndex,
    action: &PlayerAction,
    betting: &BettingState,
) -> Result<(), EngineError> {
    let player = players.get(seat).ok_or(EngineError::NoActivePlayer)?;
    if !player.is_active() {
        return Err(EngineError::NoActivePlayer);
    }

    match action {
        PlayerAction::Fold => Ok(()),

        PlayerAction::Check => {
            if betting.last_bet.is_zero() {
                Ok(())
            } else {
                Err(EngineError::CannotCheck(betting.last_bet))
            }
        }

        PlayerAction::Call => {
            // Уравнивать можно, только если кто-то другой уже поставил.
            let someone_bet = players
                .iter()
                .enumerate()
                .any(|(idx, p)| idx != seat && p.is_active() && !p.current_bet.is_zero());
            if !someone_bet {
                return Err(EngineError::CannotCall);
            }
            let to_call = diff_to_call(player, betting);
            if player.cash < to_call {
                return Err(EngineError::NotEnoughCash {
                    needed: to_call,
                    available: player.cash,
                });
            }
            Ok(())
        }

        PlayerAction::Raise(total_bet) => {
            if *total_bet <= betting.last_bet {
                return Err(EngineError::RaiseTooSmall {
                    amount: *total_bet,
                    current: betting.last_bet,
                });
            }

            if player.max_total_bet() < *total_bet {
                return Err(EngineError::NotEnoughCash {
                    needed: total_bet.saturating_sub(player.current_bet),
                    available: player.cash,
                });
            }

            // Никого нельзя вынудить к ставке, которую он не может покрыть.
            if let Some(short) = players
                .iter()
                .enumerate()
                .find(|(idx, p)| *idx != seat && p.is_active() && p.max_total_bet() < *total_bet)
                .map(|(_, p)| p)
            {
                return Err(EngineError::RaiseExceedsPlayerCash {
                    player: short.name.clone(),
                    amount: *total_bet,
                    max: short.max_total_bet(),
                });
            }

            Ok(())
        }
    }
}

/// Сколько фишек нужно добавить игроку, чтобы уравнять текущую ставку.
pub fn diff_to_call(player: &Player, betting: &BettingState) -> Chips {
    betting.last_bet.saturating_sub(player.current_bet)
}
