// File: crates/iap-core/src/axis.rs
// Summary: Axis model with labels, data-driven extents, and nice-number rounding.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

/// Finalized axis domain handed to the rendering collaborator as plain data.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear }
    }

    pub fn new_log10(label: impl Into<String>, min: f64, max: f64) -> Self {
        // Log domains need a strictly positive floor.
        let lo = if min <= 0.0 { 0.1 } else { min };
        let hi = if max <= lo { lo * 10.0 } else { max };
        Self { label: label.into(), min: lo, max: hi, kind: ScaleKind::Log10 }
    }

    /// Round the domain outward to tick-friendly endpoints (multiples of
    /// 1/2/5 times a power of ten), d3 `.nice()` style. Two passes so the
    /// step settles after the first expansion.
    pub fn nice(mut self, tick_count: usize) -> Self {
        if !(self.min.is_finite() && self.max.is_finite()) || self.min >= self.max {
            return self;
        }
        for _ in 0..2 {
            let step = tick_step(self.min, self.max, tick_count);
            if step <= 0.0 {
                break;
            }
            self.min = (self.min / step).floor() * step;
            self.max = (self.max / step).ceil() * step;
        }
        self
    }
}

/// Tick step for a span and target count: power of ten scaled by 1, 2 or 5.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let count = count.max(1) as f64;
    let raw = (stop - start).abs() / count;
    if raw <= 0.0 || !raw.is_finite() {
        return 0.0;
    }
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;
    // thresholds are sqrt(50), sqrt(10), sqrt(2)
    let factor = if error >= 7.071 {
        10.0
    } else if error >= 3.162 {
        5.0
    } else if error >= 1.414 {
        2.0
    } else {
        1.0
    };
    factor * base
}

/// Min/max over a value iterator, ignoring non-finite entries.
/// Returns `None` when nothing finite was seen.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut any = false;
    for v in values {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
            any = true;
        }
    }
    if any { Some((min, max)) } else { None }
}
