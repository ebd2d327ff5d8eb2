use super::constants::SIGN_FADE_FRACTION;

/// Scroll-progress interval during which one sign is (at least partly) visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub index: usize,
    pub start: f32,
    pub end: f32,
    pub fade: f32,
    pub is_first: bool,
}

impl Band {
    #[inline]
    pub fn len(&self) -> f32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() <= 0.0
    }

    /// Progress at which the fade-out begins.
    #[inline]
    pub fn fade_out_start(&self) -> f32 {
        self.end - self.fade
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    #[error("sign budget must be finite and non-negative, got {0}")]
    InvalidBudget(f32),
    #[error("last sign bonus must be finite and non-negative, got {0}")]
    InvalidBonus(f32),
    #[error("budget {budget} plus bonus {bonus} exceeds the scroll range")]
    BudgetExceedsRange { budget: f32, bonus: f32 },
}

/// Contiguous bands for every sign, laid out from progress 0.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BandSchedule {
    bands: Vec<Band>,
}

impl BandSchedule {
    /// Lay out one band per entry of `lengths`.
    ///
    /// Each sign's share of `budget` is proportional to its text length; the
    /// final sign additionally receives `bonus`. When every length is zero
    /// the budget is split evenly instead of dividing by zero.
    pub fn new(lengths: &[usize], budget: f32, bonus: f32) -> Result<Self, ScheduleError> {
        if !budget.is_finite() || budget < 0.0 {
            return Err(ScheduleError::InvalidBudget(budget));
        }
        if !bonus.is_finite() || bonus < 0.0 {
            return Err(ScheduleError::InvalidBonus(bonus));
        }
        if budget + bonus > 1.0 {
            return Err(ScheduleError::BudgetExceedsRange { budget, bonus });
        }

        let count = lengths.len();
        let total: usize = lengths.iter().sum();
        let mut cursor = 0.0_f32;
        let mut bands = Vec::with_capacity(count);
        for (i, &len) in lengths.iter().enumerate() {
            let weight = if total > 0 {
                len as f32 / total as f32
            } else {
                1.0 / count as f32
            };
            let mut slot = budget * weight;
            if i + 1 == count {
                slot += bonus;
            }
            let start = cursor;
            // The last band lands exactly on budget + bonus, absorbing rounding.
            let end = if i + 1 == count {
                budget + bonus
            } else {
                cursor + slot
            };
            bands.push(Band {
                index: i,
                start,
                end,
                fade: (end - start).max(0.0) * SIGN_FADE_FRACTION,
                is_first: i == 0,
            });
            cursor = end;
        }
        Ok(Self { bands })
    }

    #[inline]
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    #[inline]
    pub fn last(&self) -> Option<&Band> {
        self.bands.last()
    }

    /// Progress at which the last sign has fully faded out.
    pub fn end(&self) -> f32 {
        self.bands.last().map_or(0.0, |b| b.end)
    }

    /// Where autoplay slows down: the start of the final sign.
    pub fn target_stop(&self) -> f32 {
        self.bands.last().map_or(0.0, |b| b.start)
    }
}
