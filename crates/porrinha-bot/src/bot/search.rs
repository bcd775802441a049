use porrinha_core::PlayerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    /// Offsets `0, 1, -2, 3, -4, ...`
    Leading,
    /// Offsets `-1, 2, -3, 4, ...`, the ones the leading pass steps over.
    Filling,
}

/// Guess candidates fanning out from a center point inside `[lower, upper]`.
///
/// Yields `center`, then `center + shift` with `shift` running
/// `1, -2, 3, -4, ...` until both sides leave the window, then sweeps the
/// skipped offsets `-1, 2, -3, 4, ...`. Every integer of the window is
/// yielded exactly once, capped at `limit` candidates.
#[derive(Debug, Clone)]
pub struct OutwardCandidates {
    center: i64,
    lower: i64,
    upper: i64,
    span: i64,
    step: i64,
    pass: Pass,
    remaining: usize,
}

impl OutwardCandidates {
    pub fn new(center: i64, lower: i64, upper: i64, limit: usize) -> Self {
        let span = (center - lower).max(upper - center).max(0);
        Self {
            center,
            lower,
            upper,
            span,
            step: 0,
            pass: Pass::Leading,
            remaining: if lower > upper { 0 } else { limit },
        }
    }

    fn offset(&self) -> i64 {
        let odd = self.step % 2 == 1;
        match (self.pass, odd) {
            (Pass::Leading, true) | (Pass::Filling, false) => self.step,
            (Pass::Leading, false) | (Pass::Filling, true) => -self.step,
        }
    }
}

impl Iterator for OutwardCandidates {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        while self.remaining > 0 {
            if self.step > self.span {
                match self.pass {
                    Pass::Leading => {
                        self.pass = Pass::Filling;
                        self.step = 1;
                        continue;
                    }
                    Pass::Filling => return None,
                }
            }
            let candidate = self.center + self.offset();
            self.step += 1;
            if (self.lower..=self.upper).contains(&candidate) {
                self.remaining -= 1;
                return Some(candidate);
            }
        }
        None
    }
}

/// Achievable totals from our seat: everyone else could commit nothing or everything.
pub fn total_range(hand: u32, available: u32, total_capacity: u32) -> (i64, i64) {
    let min_total = i64::from(hand);
    let max_total = i64::from(total_capacity) - i64::from(available) + i64::from(hand);
    (min_total, max_total)
}

/// Midpoint of the achievable totals, rounded toward negative infinity.
pub fn center_of(min_total: i64, max_total: i64) -> i64 {
    (min_total + max_total).div_euclid(2)
}

/// First candidate around the center that `accept` takes.
///
/// Only totals in `[0, total_capacity]` are offered. Exhaustion means every
/// one of them was rejected, or `limit` candidates were.
pub fn search_guess<F>(
    hand: u32,
    available: u32,
    total_capacity: u32,
    limit: usize,
    mut accept: F,
) -> Result<u32, PlayerError>
where
    F: FnMut(u32) -> bool,
{
    let (min_total, max_total) = total_range(hand, available, total_capacity);
    let center = center_of(min_total, max_total);
    let mut attempts = 0;
    OutwardCandidates::new(center, 0, i64::from(total_capacity), limit)
        .filter_map(|candidate| u32::try_from(candidate).ok())
        .find(|candidate| {
            attempts += 1;
            accept(*candidate)
        })
        .ok_or(PlayerError::GuessSearchExhausted { center, attempts })
}
