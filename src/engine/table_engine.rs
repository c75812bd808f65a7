use core::fmt;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::TableState;
use crate::domain::player::Player;
use crate::domain::table::TableConfig;
use crate::domain::{Deck, PlayerId, SeatIndex};
use crate::engine::actions::PlayerAction;
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::positions::{
    active_count, active_seats_from, first_active_seat_from, next_active_seat,
};
use crate::engine::pot::Pot;
use crate::engine::validation::{diff_to_call, validate_action};
use crate::engine::{DeckFactory, DeckProvider};
use crate::eval::{EvaluatedHand, HandEvaluator, StandardEvaluator};
use crate::infra::{ShuffledDecks, SystemRng};

/// Всё изменяемое состояние стола.
///
/// Каждая мутирующая операция работает над копией и подменяет оригинал
/// только при успехе, так что отклонённое действие ничего не меняет.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TableData {
    pub state: TableState,
    /// Порядок посадки = порядок хода. После старта раздачи не меняется.
    pub players: Vec<Player>,
    pub community_cards: Vec<Card>,
    /// Чей сейчас ход. `None` до старта и после конца раздачи.
    pub current_player: Option<SeatIndex>,
    pub betting: BettingState,
    pub pot: Pot,
    pub winner: Option<SeatIndex>,
    /// Лучшие 5 карт победителя. Пусто, если все остальные сфолдили.
    pub winning_hand: Vec<Card>,
    pub hand_number: u64,
    pub history: HandHistory,
}

impl TableData {
    fn new() -> Self {
        Self {
            state: TableState::Open,
            players: Vec::new(),
            community_cards: Vec::with_capacity(5),
            current_player: None,
            betting: BettingState::default(),
            pot: Pot::new(),
            winner: None,
            winning_hand: Vec::new(),
            hand_number: 0,
            history: HandHistory::new(),
        }
    }

    fn seat_of(&self, player_id: &str) -> Option<SeatIndex> {
        self.players.iter().position(|p| p.id == player_id)
    }

    /// Улица закрыта: ставки в банк, следующее состояние, новые общие карты
    /// или шоудаун после ривера.
    fn close_street(
        &mut self,
        deck: &mut StagedDeck,
        evaluator: &dyn HandEvaluator,
    ) -> Result<(), EngineError> {
        let collected = self.pot.collect(self.players.iter_mut().map(Player::take_bet));
        self.state = self.state.next();
        self.history.push(HandEventKind::StreetChanged {
            state: self.state,
            collected,
            pot_after: self.pot.total,
        });
        log::info!(
            "street closed, {} collected, pot {}, now {}",
            collected,
            self.pot.total,
            self.state
        );

        if self.state == TableState::Ended {
            return self.showdown(evaluator);
        }

        let dealt = deck.take(self.state.community_cards_to_deal())?;
        self.community_cards.extend_from_slice(&dealt);
        self.history.push(HandEventKind::BoardDealt {
            state: self.state,
            cards: dealt,
        });

        self.betting = BettingState::new_street(active_seats_from(&self.players, 0));
        self.current_player =
            Some(first_active_seat_from(&self.players, 0).ok_or_else(no_active_player)?);
        Ok(())
    }

    /// Оценить руки всех активных игроков. При равенстве побеждает
    /// первый по порядку посадки.
    fn showdown(&mut self, evaluator: &dyn HandEvaluator) -> Result<(), EngineError> {
        let mut best: Option<(SeatIndex, EvaluatedHand)> = None;

        for seat in active_seats_from(&self.players, 0) {
            let player = &self.players[seat];
            let mut cards = player.hole_cards.clone();
            cards.extend_from_slice(&self.community_cards);

            let evaluated = evaluator
                .rank(&cards)
                .ok_or(EngineError::ShowdownFailed(cards.len()))?;
            self.history.push(HandEventKind::Showdown {
                seat,
                player_id: player.id.clone(),
                rank: evaluated.rank,
                best_five: evaluated.best_five.clone(),
            });

            if best.as_ref().map_or(true, |(_, b)| evaluated.rank > b.rank) {
                best = Some((seat, evaluated));
            }
        }

        let (seat, hand) = best.ok_or_else(no_active_player)?;
        self.winning_hand = hand.best_five;
        self.award(seat);
        Ok(())
    }

    /// Все, кроме одного, сфолдили: оставшийся забирает банк без вскрытия.
    fn finish_by_fold(&mut self) -> Result<(), EngineError> {
        let seat = first_active_seat_from(&self.players, 0).ok_or_else(no_active_player)?;
        self.pot.collect(self.players.iter_mut().map(Player::take_bet));
        self.state = TableState::Ended;
        self.winning_hand.clear();
        self.award(seat);
        Ok(())
    }

    fn award(&mut self, seat: SeatIndex) {
        let amount = self.pot.total;
        let winner = &mut self.players[seat];
        winner.add_cash(amount);
        log::info!("hand #{} won by {} ({})", self.hand_number, winner.name, amount);
        self.history.push(HandEventKind::PotAwarded {
            seat,
            player_id: winner.id.clone(),
            amount,
        });
        self.winner = Some(seat);
        self.current_player = None;
        self.betting = BettingState::default();
    }
}

fn no_active_player() -> EngineError {
    log::error!("turn rotation found no active player");
    EngineError::NoActivePlayer
}

/// Колода текущей раздачи. Карты, снятые во время действия, уходят из
/// колоды только при `commit`; после `rollback` они выйдут снова первыми.
struct StagedDeck {
    deck: Box<dyn DeckProvider>,
    lookahead: Vec<Card>,
    used: usize,
}

impl StagedDeck {
    fn new(deck: Box<dyn DeckProvider>) -> Self {
        Self {
            deck,
            lookahead: Vec::new(),
            used: 0,
        }
    }

    /// Снять ровно `count` карт или ни одной.
    fn take(&mut self, count: usize) -> Result<Vec<Card>, EngineError> {
        let need = self.used + count;
        while self.lookahead.len() < need {
            let card = self.deck.draw().ok_or(EngineError::DeckExhausted)?;
            self.lookahead.push(card);
        }
        let cards = self.lookahead[self.used..need].to_vec();
        self.used = need;
        Ok(cards)
    }

    fn commit(&mut self) {
        self.lookahead.drain(..self.used);
        self.used = 0;
    }

    fn rollback(&mut self) {
        self.used = 0;
    }
}

/// Стол Texas Hold'em: игроки, колода, общие карты, банк и машина состояний
/// улиц. Одна раздача за раз, доступ строго последовательный.
pub struct TableEngine {
    config: TableConfig,
    data: TableData,
    decks: Box<dyn DeckFactory>,
    deck: StagedDeck,
    evaluator: Box<dyn HandEvaluator>,
}

impl fmt::Debug for TableEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableEngine")
            .field("config", &self.config)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl Default for TableEngine {
    fn default() -> Self {
        Self::new(
            TableConfig::default(),
            ShuffledDecks::new(SystemRng),
            StandardEvaluator,
        )
    }
}

impl TableEngine {
    pub fn new(
        config: TableConfig,
        decks: impl DeckFactory + 'static,
        evaluator: impl HandEvaluator + 'static,
    ) -> Self {
        Self {
            config,
            data: TableData::new(),
            decks: Box::new(decks),
            deck: StagedDeck::new(Box::new(Deck { cards: Vec::new() })),
            evaluator: Box::new(evaluator),
        }
    }

    // ---------------------------------------------------------------
    // Запросы (только чтение)
    // ---------------------------------------------------------------

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Снимок всего состояния стола.
    pub fn data(&self) -> &TableData {
        &self.data
    }

    pub fn state(&self) -> TableState {
        self.data.state
    }

    pub fn players(&self) -> &[Player] {
        &self.data.players
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.data.players.iter().find(|p| p.id == player_id)
    }

    /// Карманные карты игрока; пусто для неизвестного id или до раздачи.
    pub fn player_cards(&self, player_id: &str) -> &[Card] {
        self.player(player_id)
            .map(|p| p.hole_cards.as_slice())
            .unwrap_or(&[])
    }

    pub fn community_cards(&self) -> &[Card] {
        &self.data.community_cards
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.data.current_player.map(|seat| &self.data.players[seat])
    }

    pub fn current_player_index(&self) -> Option<SeatIndex> {
        self.data.current_player
    }

    /// Ставки текущей улицы по игрокам. Производная от `Player::current_bet`,
    /// в выдачу попадают только ненулевые ставки.
    pub fn bets(&self) -> BTreeMap<PlayerId, Chips> {
        self.data
            .players
            .iter()
            .filter(|p| !p.current_bet.is_zero())
            .map(|p| (p.id.clone(), p.current_bet))
            .collect()
    }

    pub fn last_bet(&self) -> Chips {
        self.data.betting.last_bet
    }

    pub fn pot(&self) -> Chips {
        self.data.pot.total
    }

    pub fn winner(&self) -> Option<&Player> {
        self.data.winner.map(|seat| &self.data.players[seat])
    }

    pub fn winner_hand(&self) -> &[Card] {
        &self.data.winning_hand
    }

    pub fn history(&self) -> &HandHistory {
        &self.data.history
    }

    // ---------------------------------------------------------------
    // Команды
    // ---------------------------------------------------------------

    /// Посадить игрока. Повторный id молча игнорируется.
    pub fn add_player(&mut self, player_id: &str, name: &str) -> Result<(), EngineError> {
        if self.data.state.is_betting() {
            return Err(EngineError::HandInProgress(self.data.state));
        }
        if self.data.seat_of(player_id).is_some() {
            log::debug!("duplicate player {player_id} ignored");
            return Ok(());
        }
        if self.data.players.len() >= self.config.max_players {
            return Err(EngineError::TableFull(self.config.max_players));
        }

        self.data
            .players
            .push(Player::new(player_id, name, self.config.starting_cash));
        log::debug!("player {player_id} ({name}) seated");
        Ok(())
    }

    /// Начать раздачу: свежая колода, по две карты каждому игроку с фишками,
    /// ход у первого места.
    ///
    /// Если игроков с фишками меньше минимума — ничего не происходит.
    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.data.state.is_betting() {
            return Err(EngineError::HandInProgress(self.data.state));
        }
        let funded = self
            .data
            .players
            .iter()
            .filter(|p| !p.cash.is_zero())
            .count();
        if funded < self.config.min_players {
            log::debug!(
                "start ignored: {funded} funded players, need {}",
                self.config.min_players
            );
            return Ok(());
        }

        let mut next = self.data.clone();
        let mut deck = self.decks.new_deck();

        next.hand_number += 1;
        next.history.clear();
        next.history.push(HandEventKind::HandStarted {
            hand_number: next.hand_number,
            players: funded,
        });

        for (seat, player) in next.players.iter_mut().enumerate() {
            player.clear_hand();
            player.set_inactive();
            if player.cash.is_zero() {
                continue;
            }
            let first = deck.draw().ok_or(EngineError::DeckExhausted)?;
            let second = deck.draw().ok_or(EngineError::DeckExhausted)?;
            player.deal(first, second);
            player.set_active();
            next.history.push(HandEventKind::HoleCardsDealt {
                seat,
                cards: vec![first, second],
            });
        }

        next.state = TableState::PreFlop;
        next.community_cards.clear();
        next.pot.reset();
        next.winner = None;
        next.winning_hand.clear();
        next.betting = BettingState::new_street(active_seats_from(&next.players, 0));
        next.current_player =
            Some(first_active_seat_from(&next.players, 0).ok_or_else(no_active_player)?);

        self.data = next;
        self.deck = StagedDeck::new(deck);
        log::info!(
            "hand #{} started with {} players",
            self.data.hand_number,
            funded
        );
        Ok(())
    }

    /// Действие в том виде, в каком его присылает транспорт: имя и сумма.
    pub fn perform(&mut self, action: &str, amount: u64) -> Result<(), EngineError> {
        let action = PlayerAction::parse(action, amount)?;
        self.perform_action(action)
    }

    /// Применить действие текущего игрока. Либо действие проходит целиком
    /// и ход переходит дальше, либо возвращается ошибка и стол не меняется.
    pub fn perform_action(&mut self, action: PlayerAction) -> Result<(), EngineError> {
        if !self.data.state.is_betting() {
            return Err(EngineError::HandNotInProgress(self.data.state));
        }
        let seat = self.data.current_player.ok_or_else(no_active_player)?;

        if let Err(err) = validate_action(&self.data.players, seat, &action, &self.data.betting) {
            log::debug!(
                "{} rejected for {}: {}",
                action,
                self.data.players[seat].id,
                err
            );
            return Err(err);
        }

        let mut next = self.data.clone();
        if let Err(err) = self.apply(&mut next, seat, action) {
            self.deck.rollback();
            return Err(err);
        }

        self.data = next;
        self.deck.commit();
        log::debug!(
            "action performed: {}, state {}, pot {}",
            action,
            self.data.state,
            self.data.pot.total
        );
        Ok(())
    }

    fn apply(
        &mut self,
        next: &mut TableData,
        seat: SeatIndex,
        action: PlayerAction,
    ) -> Result<(), EngineError> {
        match action {
            PlayerAction::Check => next.betting.mark_acted(seat),
            PlayerAction::Call => {
                let to_call = diff_to_call(&next.players[seat], &next.betting);
                next.players[seat].bet(to_call)?;
                next.betting.mark_acted(seat);
            }
            PlayerAction::Raise(total) => {
                let increment = total.saturating_sub(next.players[seat].current_bet);
                next.players[seat].bet(increment)?;
                let n = next.players.len();
                let to_act = active_seats_from(&next.players, (seat + 1) % n)
                    .into_iter()
                    .filter(|&s| s != seat)
                    .collect();
                next.betting.on_raise(total, to_act);
            }
            PlayerAction::Fold => {
                next.players[seat].set_inactive();
                next.betting.mark_acted(seat);
            }
        }

        let player = &next.players[seat];
        next.history.push(HandEventKind::PlayerActed {
            player_id: player.id.clone(),
            seat,
            action,
            cash_after: player.cash,
        });

        if action == PlayerAction::Fold && active_count(&next.players) == 1 {
            return next.finish_by_fold();
        }
        if next.betting.is_round_complete() {
            return next.close_street(&mut self.deck, self.evaluator.as_ref());
        }

        next.current_player =
            Some(next_active_seat(&next.players, seat).ok_or_else(no_active_player)?);
        Ok(())
    }
}
