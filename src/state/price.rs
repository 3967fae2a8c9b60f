/// Price range filter and the two-thumb slider controller
///
/// The slider keeps a minimum gap between its endpoints. When a drag would
/// squeeze the range below that gap, the thumb being dragged wins and the
/// other endpoint is pushed along, bounded by the slider's limits.
use tracing::debug;

/// Inclusive price interval used by the filter engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub low: f64,
    pub high: f64,
}

impl PriceRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// True when `price` lies within `[low, high]`
    pub fn contains(&self, price: f64) -> bool {
        price >= self.low && price <= self.high
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

/// Which endpoint of the range is being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thumb {
    Low,
    High,
}

/// Limits of the slider track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderBounds {
    /// Leftmost value of the track
    pub min: f64,
    /// Rightmost value of the track
    pub max: f64,
    /// Minimum distance kept between the two endpoints
    pub min_gap: f64,
    /// Values snap to multiples of this step, measured from `min`
    pub step: f64,
}

impl Default for SliderBounds {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 200.0,
            min_gap: 10.0,
            step: 1.0,
        }
    }
}

impl SliderBounds {
    /// Bring any value onto the track. NaN lands on `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    /// Snap a value to the nearest step, then clamp it onto the track
    pub fn snap(&self, value: f64) -> f64 {
        if self.step <= 0.0 || !value.is_finite() {
            return self.clamp(value);
        }
        let steps = ((value - self.min) / self.step).round();
        self.clamp(self.min + steps * self.step)
    }

    /// The full track as a range
    pub fn full_range(&self) -> PriceRange {
        PriceRange::new(self.min, self.max)
    }
}

/// Controller owning the current slider range
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSlider {
    bounds: SliderBounds,
    range: PriceRange,
}

impl PriceSlider {
    /// Start with the whole track selected
    pub fn new(bounds: SliderBounds) -> Self {
        Self {
            range: bounds.full_range(),
            bounds,
        }
    }

    pub fn range(&self) -> PriceRange {
        self.range
    }

    pub fn bounds(&self) -> SliderBounds {
        self.bounds
    }

    /// Apply a proposed pair produced by dragging `thumb`.
    ///
    /// Returns the accepted range, which always satisfies
    /// `high - low >= min_gap` and lies within the bounds.
    pub fn propose(&mut self, thumb: Thumb, proposed: PriceRange) -> PriceRange {
        let b = self.bounds;
        let low = b.clamp(proposed.low);
        let high = b.clamp(proposed.high);

        self.range = if PriceRange::new(low, high).width() < b.min_gap {
            match thumb {
                Thumb::Low => {
                    let clamped = low.min(b.max - b.min_gap);
                    PriceRange::new(clamped, clamped + b.min_gap)
                }
                Thumb::High => {
                    let clamped = high.max(b.min + b.min_gap);
                    PriceRange::new(clamped - b.min_gap, clamped)
                }
            }
        } else {
            PriceRange::new(low, high)
        };

        debug!(?thumb, low = self.range.low, high = self.range.high, "price range changed");
        self.range
    }

    /// Move a single thumb to `value`, holding the other endpoint
    pub fn drag(&mut self, thumb: Thumb, value: f64) -> PriceRange {
        let value = self.bounds.snap(value);
        let proposed = match thumb {
            Thumb::Low => PriceRange::new(value, self.range.high),
            Thumb::High => PriceRange::new(self.range.low, value),
        };
        self.propose(thumb, proposed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariant(range: PriceRange) {
        assert!(range.width() >= 10.0, "gap violated: {:?}", range);
        assert!(range.low >= 0.0 && range.high <= 200.0, "out of bounds: {:?}", range);
        assert!(range.low <= range.high);
    }

    #[test]
    fn test_starts_at_full_range() {
        let slider = PriceSlider::new(SliderBounds::default());
        assert_eq!(slider.range(), PriceRange::new(0.0, 200.0));
    }

    #[test]
    fn test_low_thumb_near_top_clamps() {
        let mut slider = PriceSlider::new(SliderBounds::default());
        let range = slider.propose(Thumb::Low, PriceRange::new(195.0, 200.0));
        assert_eq!(range, PriceRange::new(190.0, 200.0));
    }

    #[test]
    fn test_low_thumb_pushes_high() {
        let mut slider = PriceSlider::new(SliderBounds::default());
        slider.propose(Thumb::High, PriceRange::new(0.0, 50.0));
        let range = slider.drag(Thumb::Low, 45.0);
        assert_eq!(range, PriceRange::new(45.0, 55.0));
    }

    #[test]
    fn test_high_thumb_near_bottom_clamps() {
        let mut slider = PriceSlider::new(SliderBounds::default());
        let range = slider.propose(Thumb::High, PriceRange::new(0.0, 3.0));
        assert_eq!(range, PriceRange::new(0.0, 10.0));
    }

    #[test]
    fn test_high_thumb_pushes_low() {
        let mut slider = PriceSlider::new(SliderBounds::default());
        slider.propose(Thumb::Low, PriceRange::new(100.0, 200.0));
        let range = slider.drag(Thumb::High, 104.0);
        assert_eq!(range, PriceRange::new(94.0, 104.0));
    }

    #[test]
    fn test_wide_proposal_accepted_verbatim() {
        let mut slider = PriceSlider::new(SliderBounds::default());
        let range = slider.propose(Thumb::Low, PriceRange::new(20.0, 150.0));
        assert_eq!(range, PriceRange::new(20.0, 150.0));
    }

    #[test]
    fn test_out_of_bounds_proposals_are_clamped() {
        let mut slider = PriceSlider::new(SliderBounds::default());
        assert_eq!(
            slider.propose(Thumb::High, PriceRange::new(-50.0, 900.0)),
            PriceRange::new(0.0, 200.0)
        );
        assert_eq!(
            slider.propose(Thumb::Low, PriceRange::new(f64::NAN, 120.0)),
            PriceRange::new(0.0, 120.0)
        );
    }

    #[test]
    fn test_gap_invariant_over_grid() {
        let values = [-20.0, 0.0, 3.0, 9.5, 10.0, 55.0, 100.0, 185.0, 195.0, 199.0, 200.0, 250.0];
        for thumb in [Thumb::Low, Thumb::High] {
            for &a in &values {
                for &b in &values {
                    let mut slider = PriceSlider::new(SliderBounds::default());
                    assert_invariant(slider.propose(thumb, PriceRange::new(a, b)));
                }
            }
        }
    }

    #[test]
    fn test_drag_snaps_to_step() {
        let mut slider = PriceSlider::new(SliderBounds::default());
        let range = slider.drag(Thumb::Low, 42.4);
        assert_eq!(range.low, 42.0);
    }

    #[test]
    fn test_range_contains_is_inclusive() {
        let range = PriceRange::new(10.0, 20.0);
        assert!(range.contains(10.0));
        assert!(range.contains(20.0));
        assert!(!range.contains(20.01));
        assert!(!range.contains(9.99));
    }
}
