use crate::domain::{Player, SeatIndex};

/// Найти следующее активное место по кругу после `start` (не включая его).
///
/// Поиск ограничен одним кругом: если активных нет, возвращает `None`
/// вместо бесконечного цикла.
pub fn next_active_seat(players: &[Player], start: SeatIndex) -> Option<SeatIndex> {
    let n = players.len();
    (1..=n)
        .map(|offset| (start + offset) % n)
        .find(|&idx| players[idx].is_active())
}

/// Первое активное место, начиная с `start` включительно.
pub fn first_active_seat_from(players: &[Player], start: SeatIndex) -> Option<SeatIndex> {
    let n = players.len();
    (0..n)
        .map(|offset| (start + offset) % n)
        .find(|&idx| players[idx].is_active())
}

/// Все активные места по кругу, начиная со `start` включительно.
pub fn active_seats_from(players: &[Player], start: SeatIndex) -> Vec<SeatIndex> {
    let n = players.len();
    (0..n)
        .map(|offset| (start + offset) % n)
        .filter(|&idx| players[idx].is_active())
        .collect()
}

pub fn active_count(players: &[Player]) -> usize {
    players.iter().filter(|p| p.is_active()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Chips;

    fn seats(active: &[bool]) -> Vec<Player> {
        active
            .iter()
            .enumerate()
            .map(|(i, &a)| {
                let mut p = Player::new(i.to_string(), format!("p{i}"), Chips(100));
                if a {
                    p.set_active();
                }
                p
            })
            .collect()
    }

    #[test]
    fn next_active_skips_inactive_and_wraps() {
        let players = seats(&[true, false, true, false]);
        assert_eq!(next_active_seat(&players, 0), Some(2));
        assert_eq!(next_active_seat(&players, 2), Some(0));
        assert_eq!(next_active_seat(&players, 1), Some(2));
    }

    #[test]
    fn lone_active_seat_finds_itself() {
        let players = seats(&[false, true, false]);
        assert_eq!(next_active_seat(&players, 1), Some(1));
    }

    #[test]
    fn no_active_seat_is_none() {
        let players = seats(&[false, false]);
        assert_eq!(next_active_seat(&players, 0), None);
        assert_eq!(first_active_seat_from(&players, 0), None);
        assert_eq!(next_active_seat(&[], 0), None);
    }

    #[test]
    fn active_seats_rotate_from_start() {
        let players = seats(&[true, true, false, true]);
        assert_eq!(active_seats_from(&players, 1), vec![1, 3, 0]);
        assert_eq!(active_count(&players), 3);
    }
}
