use crate::domain::card::{Card, Rank};
use crate::domain::hand::HandRank;

use super::hand_rank::HandCategory;
use super::lookup_tables::{detect_straight, rank_to_bit, RankMask};
use super::{EvaluatedHand, HandEvaluator};

/// Стандартный evaluator Texas Hold'em: лучшая 5-карточная рука из 5–7 карт.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardEvaluator;

impl HandEvaluator for StandardEvaluator {
    fn rank(&self, cards: &[Card]) -> Option<EvaluatedHand> {
        evaluate_best_hand(cards)
    }
}

/// Главная функция: вычислить лучшую 5-карточную руку.
///
/// Ожидается от 5 до 7 карт (hole + board); иначе `None`.
pub fn evaluate_best_hand(cards: &[Card]) -> Option<EvaluatedHand> {
    if !(5..=7).contains(&cards.len()) {
        return None;
    }

    let mut best: Option<(HandRank, [Card; 5])> = None;
    for_each_5card_combination(cards, |five| {
        let r = evaluate_5card_hand(&five);
        if best.map_or(true, |(best_r, _)| r > best_r) {
            best = Some((r, five));
        }
    });

    best.map(|(rank, mut five)| {
        five.sort_by(|a, b| b.rank.cmp(&a.rank).then(b.suit.cmp(&a.suit)));
        EvaluatedHand {
            rank,
            best_five: five.to_vec(),
        }
    })
}

/// Перебираем все комбинации 5 карт из N (N=5–7).
fn for_each_5card_combination(cards: &[Card], mut f: impl FnMut([Card; 5])) {
    let n = cards.len();
    for a in 0..n {
        for b in (a + 1)..n {
            for c in (b + 1)..n {
                for d in (c + 1)..n {
                    for e in (d + 1)..n {
                        f([cards[a], cards[b], cards[c], cards[d], cards[e]]);
                    }
                }
            }
        }
    }
}

/// Оценка строго 5-карточной комбинации.
pub fn evaluate_5card_hand(cards: &[Card; 5]) -> HandRank {
    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);

    let mut rank_counts = [0u8; 15]; // индексы 2..14
    let mut rank_mask: RankMask = 0;
    for card in cards {
        rank_counts[card.rank.value() as usize] += 1;
        rank_mask |= rank_to_bit(card.rank);
    }
    let straight_high = detect_straight(rank_mask);

    // (rank, count), отсортированные по количеству, затем по рангу (desc).
    let mut groups: Vec<(Rank, u8)> = Rank::ALL
        .iter()
        .rev()
        .filter(|r| rank_counts[r.value() as usize] > 0)
        .map(|r| (*r, rank_counts[r.value() as usize]))
        .collect();
    groups.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));

    let pattern: Vec<u8> = groups.iter().map(|g| g.1).collect();
    let ranks = padded_ranks(&groups);

    let category = match (is_flush, straight_high, pattern.as_slice()) {
        (true, Some(high), _) => {
            return HandRank::from_category_and_ranks(
                HandCategory::StraightFlush,
                straight_rank_array(high),
            )
        }
        (_, _, [4, 1]) => HandCategory::FourOfAKind,
        (_, _, [3, 2]) => HandCategory::FullHouse,
        (true, None, _) => HandCategory::Flush,
        (false, Some(high), _) => {
            return HandRank::from_category_and_ranks(
                HandCategory::Straight,
                straight_rank_array(high),
            )
        }
        (_, _, [3, 1, 1]) => HandCategory::ThreeOfAKind,
        (_, _, [2, 2, 1]) => HandCategory::TwoPair,
        (_, _, [2, 1, 1, 1]) => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };

    HandRank::from_category_and_ranks(category, ranks)
}

/// Ранги групп по значимости; хвост добиваем двойками (он не сравнивается).
fn padded_ranks(groups: &[(Rank, u8)]) -> [Rank; 5] {
    let mut ranks = [Rank::Two; 5];
    for (slot, (rank, _)) in ranks.iter_mut().zip(groups) {
        *slot = *rank;
    }
    ranks
}

/// Построить массив рангов [r0..r4] для стрита с заданной старшей картой.
fn straight_rank_array(high: Rank) -> [Rank; 5] {
    if high == Rank::Five {
        // wheel: A2345, туз считается младшим
        return [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Two];
    }
    let top = high.value();
    let mut ranks = [high; 5];
    for (i, slot) in ranks.iter_mut().enumerate() {
        *slot = Rank::from_value(top - i as u8).unwrap_or(Rank::Two);
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::parse_cards;

    fn rank_of(s: &str) -> HandRank {
        evaluate_best_hand(&parse_cards(s).unwrap()).unwrap().rank
    }

    #[test]
    fn categories_are_detected() {
        assert_eq!(rank_of("Ah Kh Qh Jh Th 2c 3d").category(), HandCategory::StraightFlush);
        assert_eq!(rank_of("9c 9d 9h 9s 2c 3d 4h").category(), HandCategory::FourOfAKind);
        assert_eq!(rank_of("9c 9d 9h 2s 2c 3d 4h").category(), HandCategory::FullHouse);
        assert_eq!(rank_of("Ac 9c 7c 4c 2c 3d 4h").category(), HandCategory::Flush);
        assert_eq!(rank_of("Ac 2d 3h 4s 5c 9d Kh").category(), HandCategory::Straight);
        assert_eq!(rank_of("9c 9d 9h 2s Kc 3d 7h").category(), HandCategory::ThreeOfAKind);
        assert_eq!(rank_of("9c 9d 2h 2s Kc 3d 7h").category(), HandCategory::TwoPair);
        assert_eq!(rank_of("9c 9d 2h 5s Kc 3d 7h").category(), HandCategory::OnePair);
        assert_eq!(rank_of("9c Jd 2h 5s Kc 3d 7h").category(), HandCategory::HighCard);
    }

    #[test]
    fn wheel_loses_to_six_high_straight() {
        assert!(rank_of("Ac 2d 3h 4s 5c") < rank_of("2d 3h 4s 5c 6d"));
    }

    #[test]
    fn kicker_decides_same_pair() {
        assert!(rank_of("Ac Ad Kh 7s 2c") > rank_of("Ac Ad Qh 7s 2c"));
    }

    #[test]
    fn best_five_comes_from_the_seven() {
        let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
        let best = evaluate_best_hand(&cards).unwrap();
        assert_eq!(best.best_five, parse_cards("Ah Kh Qh Jh Th").unwrap());
    }

    #[test]
    fn wrong_card_count_is_none() {
        assert!(evaluate_best_hand(&parse_cards("Ah Kh Qh Jh").unwrap()).is_none());
    }
}
