use porrinha_core::{GameView, Guess, Seat, TableSnapshot};

/// Minimal host-side view built directly on the trait.
struct FixedTable {
    available: Vec<u32>,
    floor: u32,
}

impl GameView for FixedTable {
    fn player_count(&self) -> usize {
        self.available.len()
    }

    fn seat_of(&self, name: &str) -> Option<Seat> {
        name.strip_prefix('p')
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|idx| *idx < self.available.len())
            .map(Seat::new)
    }

    fn revealed_guess(&self, _seat: Seat) -> Guess {
        Guess::Pending
    }

    fn available_items(&self, seat: Seat) -> u32 {
        self.available[seat.index()]
    }

    fn is_valid_guess(&self, candidate: u32) -> bool {
        candidate >= self.floor && candidate <= self.total_capacity()
    }
}

#[test]
fn provided_capacity_sums_every_seat() {
    let view = FixedTable {
        available: vec![3, 0, 2, 5],
        floor: 0,
    };
    assert_eq!(view.total_capacity(), 10);
}

#[test]
fn capacity_saturates_instead_of_overflowing() {
    let view = FixedTable {
        available: vec![u32::MAX, 7, u32::MAX],
        floor: 0,
    };
    assert_eq!(view.total_capacity(), u32::MAX);
}

#[test]
fn trait_objects_are_usable() {
    let views: Vec<Box<dyn GameView>> = vec![
        Box::new(FixedTable {
            available: vec![1, 1],
            floor: 1,
        }),
        Box::new(TableSnapshot::new().with_seat("p0", 1).with_seat("p1", 1)),
    ];
    for view in &views {
        assert_eq!(view.seat_of("p1"), Some(Seat::new(1)));
        assert!(view.is_valid_guess(2));
        assert!(!view.is_valid_guess(3));
    }
    assert!(!views[0].is_valid_guess(0));
    assert!(views[1].is_valid_guess(0));
}
