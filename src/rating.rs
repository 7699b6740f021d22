//! Committed-rating model behind the star widget.
//!
//! Keeps the numeric rating and its per-star visual projection separate from
//! the DOM layer so the display rules stay unit-testable. A rating may carry
//! a half step (`3.5`); halves only ever arrive as seed values, interaction
//! commits whole positions.

/// Stars shown when a widget does not configure its own maximum.
pub const DEFAULT_MAX_RATING: u32 = 5;

/// Visual state of a single star position.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StarFill {
    Empty,
    Full,
    Half,
}

impl StarFill {
    /// Presentation class for this fill state.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Empty => "star star--empty",
            Self::Full => "star star--full",
            Self::Half => "star star--half",
        }
    }
}

/// Whether the rating carries a displayable half step.
#[must_use]
pub fn has_half_step(rating: f32) -> bool {
    (rating.fract() - 0.5).abs() < f32::EPSILON
}

/// Fill state for the star at `position` (1-based) under a committed rating.
///
/// Positions up to the whole part render full, the position directly after a
/// half step renders half, everything beyond renders empty.
#[must_use]
pub fn fill_for(position: u32, rating: f32) -> StarFill {
    let rating = rating.max(0.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = rating.floor() as u32;
    if position <= whole {
        StarFill::Full
    } else if has_half_step(rating) && position == whole + 1 {
        StarFill::Half
    } else {
        StarFill::Empty
    }
}

/// Label shown next to the stars: `"3.5/5"`, or empty while unrated.
#[must_use]
pub fn label_text(rating: f32, max: u32) -> String {
    if rating <= 0.0 {
        return String::new();
    }
    format!("{}/{max}", fmt_rating(rating))
}

fn fmt_rating(rating: f32) -> String {
    if rating.fract() == 0.0 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let whole = rating as u32;
        whole.to_string()
    } else {
        format!("{rating:.1}")
    }
}

/// Committed rating plus the scale it lives on.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RatingState {
    current: f32,
    max: u32,
}

impl RatingState {
    /// Build a state on a `max`-star scale, clamping the seed value into
    /// `[0, max]`. A non-positive `max` is a caller error; it is coerced to
    /// a single star rather than handled.
    #[must_use]
    pub fn new(initial: f32, max: u32) -> Self {
        let max = max.max(1);
        #[allow(clippy::cast_precision_loss)]
        let upper = max as f32;
        Self {
            current: initial.clamp(0.0, upper),
            max,
        }
    }

    /// Commit a whole-star rating picked by interaction.
    pub fn set(&mut self, position: u32) {
        #[allow(clippy::cast_precision_loss)]
        let committed = position.min(self.max) as f32;
        self.current = committed;
    }

    /// The committed rating. Never fails.
    #[must_use]
    pub const fn get(&self) -> f32 {
        self.current
    }

    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Fill state for one star position under the committed rating.
    #[must_use]
    pub fn fill_at(&self, position: u32) -> StarFill {
        fill_for(position, self.current)
    }

    /// Committed fill states, left to right.
    pub fn fills(&self) -> impl Iterator<Item = StarFill> + '_ {
        (1..=self.max).map(|position| self.fill_at(position))
    }

    /// Transient hover projection: everything up to the hovered position is
    /// full, the rest empty. Half steps are deliberately not previewed; they
    /// are seed-only values and interaction can only commit whole stars.
    pub fn preview_fills(&self, hovered: u32) -> impl Iterator<Item = StarFill> + '_ {
        (1..=self.max).map(move |position| {
            if position <= hovered {
                StarFill::Full
            } else {
                StarFill::Empty
            }
        })
    }

    /// Label text for the committed rating.
    #[must_use]
    pub fn label(&self) -> String {
        label_text(self.current, self.max)
    }

    /// The committed rating formatted for display (`"3.5"`, `"4"`).
    #[must_use]
    pub fn display_value(&self) -> String {
        fmt_rating(self.current)
    }
}
