// File: crates/plotline-core/src/scale.rs
// Summary: Linear, time, ordinal and sequential-color scales plus extent/nice/tick helpers.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::color::Rgba;
use crate::error::{ChartError, Result};

/// Default tick count used by `nice` and axes.
pub const DEFAULT_TICKS: usize = 10;

/// Continuous mapping from a data domain to a pixel range.
pub trait ContinuousScale {
    fn map(&self, v: f64) -> f64;
    fn invert(&self, px: f64) -> f64;
    fn domain(&self) -> (f64, f64);
    fn range(&self) -> (f64, f64);
    /// Tick positions in domain units.
    fn tick_values(&self, count: usize) -> Vec<f64>;
}

/// Min and max of `values`. Errors on an empty slice or a non-finite value.
pub fn extent(values: &[f64], field: &str) -> Result<(f64, f64)> {
    if values.is_empty() {
        return Err(ChartError::EmptyDataset { field: field.to_string() });
    }
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for (index, &v) in values.iter().enumerate() {
        if !v.is_finite() {
            return Err(ChartError::TypeMismatch {
                field: field.to_string(),
                index,
                expected: "finite number",
            });
        }
        lo = lo.min(v);
        hi = hi.max(v);
    }
    Ok((lo, hi))
}

/// Step between ticks for roughly `count` ticks over [start, stop].
///
/// Steps are 1, 2 or 5 times a power of ten. Sub-unit steps come back
/// negative and hold the inverse (-10 means 0.1) so that tick values can be
/// produced by division, which keeps them exact.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

/// Upper bound on the tick count a caller may ask for.
pub const MAX_TICK_COUNT: usize = 10_000;

/// Round, human-friendly values inside [start, stop].
///
/// Tick `k` is computed from its integer index, never by accumulation, so
/// domains far from zero (where `x + 1.0 == x`) still terminate.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !(start.is_finite() && stop.is_finite()) || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let count = count.min(MAX_TICK_COUNT);
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let inc = tick_increment(lo, hi, count);
    if inc == 0.0 {
        return Vec::new();
    }
    // The chosen step is never below step / sqrt(2), so 2 * count + 2 bounds n.
    let max_n = 2 * count + 2;
    let mut out: Vec<f64> = if inc > 0.0 {
        let mut i0 = (lo / inc).round();
        let mut i1 = (hi / inc).round();
        if i0 * inc < lo { i0 += 1.0; }
        if i1 * inc > hi { i1 -= 1.0; }
        let n = ((i1 - i0 + 1.0).max(0.0) as usize).min(max_n);
        (0..n).map(|k| (i0 + k as f64) * inc).collect()
    } else {
        let inv = -inc;
        let mut i0 = (lo * inv).round();
        let mut i1 = (hi * inv).round();
        if i0 / inv < lo { i0 += 1.0; }
        if i1 / inv > hi { i1 -= 1.0; }
        let n = ((i1 - i0 + 1.0).max(0.0) as usize).min(max_n);
        (0..n).map(|k| (i0 + k as f64) / inv).collect()
    };
    // Near the limits of f64 precision neighbouring indices can collapse.
    out.dedup();
    if reverse {
        out.reverse();
    }
    out
}

/// Extend [start, stop] outward to tick-step boundaries.
pub fn nice_domain(start: f64, stop: f64, count: usize) -> (f64, f64) {
    let reverse = stop < start;
    let (mut lo, mut hi) = if reverse { (stop, start) } else { (start, stop) };
    let mut prestep: Option<f64> = None;
    for _ in 0..10 {
        let step = tick_increment(lo, hi, count);
        if prestep == Some(step) || step == 0.0 {
            break;
        }
        if step > 0.0 {
            lo = (lo / step).floor() * step;
            hi = (hi / step).ceil() * step;
        } else {
            lo = (lo * -step).floor() / -step;
            hi = (hi * -step).ceil() / -step;
        }
        prestep = Some(step);
    }
    if reverse { (hi, lo) } else { (lo, hi) }
}

#[inline]
fn interpolate(a: f64, b: f64, t: f64) -> f64 {
    // a*(1-t) + b*t hits both ends exactly at t = 0 and t = 1.
    a * (1.0 - t) + b * t
}

/// Linear map from `domain` to `range`. Either may be reversed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f64,
    pub r1: f64,
    pub clamp: bool,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1, clamp: false }
    }

    /// Domain from the extent of `values`.
    pub fn from_values(values: &[f64], field: &str, range: (f64, f64)) -> Result<Self> {
        Ok(Self::new(extent(values, field)?, range))
    }

    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn with_domain(mut self, domain: (f64, f64)) -> Self {
        self.d0 = domain.0;
        self.d1 = domain.1;
        self
    }

    /// Round the domain outward so the end points land on ticks. Only the
    /// domain moves; the range stays the bounded size it was built with.
    pub fn nice(mut self, count: usize) -> Self {
        if self.d0 != self.d1 {
            let (a, b) = nice_domain(self.d0, self.d1, count);
            self.d0 = a;
            self.d1 = b;
        }
        self
    }

    fn normalize(&self, v: f64) -> f64 {
        if self.d1 == self.d0 {
            return 0.5;
        }
        let t = (v - self.d0) / (self.d1 - self.d0);
        if self.clamp { t.clamp(0.0, 1.0) } else { t }
    }
}

impl ContinuousScale for LinearScale {
    #[inline]
    fn map(&self, v: f64) -> f64 {
        interpolate(self.r0, self.r1, self.normalize(v))
    }

    fn invert(&self, px: f64) -> f64 {
        if self.r1 == self.r0 {
            return interpolate(self.d0, self.d1, 0.5);
        }
        let mut t = (px - self.r0) / (self.r1 - self.r0);
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        interpolate(self.d0, self.d1, t)
    }

    fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }
    fn range(&self) -> (f64, f64) { (self.r0, self.r1) }

    fn tick_values(&self, count: usize) -> Vec<f64> {
        ticks(self.d0, self.d1, count)
    }
}

// ---- time ------------------------------------------------------------------

const SECOND: i64 = 1_000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
/// 1970-01-01 was a Thursday; weeks start on Sunday the 4th.
const FIRST_SUNDAY: i64 = 3 * DAY;

/// Calendar stepping used for time ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeInterval {
    Fixed(i64),
    Weeks(i64),
    Months(i32),
    Years(i32),
}

impl TimeInterval {
    fn approx_ms(&self) -> f64 {
        match *self {
            TimeInterval::Fixed(ms) => ms as f64,
            TimeInterval::Weeks(n) => (n * WEEK) as f64,
            TimeInterval::Months(n) => n as f64 * 30.0 * DAY as f64,
            TimeInterval::Years(n) => n as f64 * 365.0 * DAY as f64,
        }
    }

    /// Largest boundary <= `ms`.
    pub fn floor(&self, ms: i64) -> i64 {
        match *self {
            TimeInterval::Fixed(step) => ms.div_euclid(step) * step,
            TimeInterval::Weeks(n) => {
                let step = n * WEEK;
                (ms - FIRST_SUNDAY).div_euclid(step) * step + FIRST_SUNDAY
            }
            TimeInterval::Months(n) => {
                let d = to_datetime(ms).date();
                let idx = d.year() * 12 + d.month0() as i32;
                month_start(idx.div_euclid(n) * n)
            }
            TimeInterval::Years(n) => {
                let y = to_datetime(ms).date().year();
                month_start(y.div_euclid(n) * n * 12)
            }
        }
    }

    /// Smallest boundary >= `ms`.
    pub fn ceil(&self, ms: i64) -> i64 {
        let f = self.floor(ms);
        if f == ms { f } else { self.next(f) }
    }

    /// Boundary one step after the boundary `ms`.
    pub fn next(&self, ms: i64) -> i64 {
        match *self {
            TimeInterval::Fixed(step) => ms + step,
            TimeInterval::Weeks(n) => ms + n * WEEK,
            TimeInterval::Months(n) => {
                let d = to_datetime(ms).date();
                month_start(d.year() * 12 + d.month0() as i32 + n)
            }
            TimeInterval::Years(n) => {
                let d = to_datetime(ms).date();
                month_start((d.year() + n) * 12 + d.month0() as i32)
            }
        }
    }
}

const TIME_INTERVALS: &[TimeInterval] = &[
    TimeInterval::Fixed(SECOND),
    TimeInterval::Fixed(5 * SECOND),
    TimeInterval::Fixed(15 * SECOND),
    TimeInterval::Fixed(30 * SECOND),
    TimeInterval::Fixed(MINUTE),
    TimeInterval::Fixed(5 * MINUTE),
    TimeInterval::Fixed(15 * MINUTE),
    TimeInterval::Fixed(30 * MINUTE),
    TimeInterval::Fixed(HOUR),
    TimeInterval::Fixed(3 * HOUR),
    TimeInterval::Fixed(6 * HOUR),
    TimeInterval::Fixed(12 * HOUR),
    TimeInterval::Fixed(DAY),
    TimeInterval::Fixed(2 * DAY),
    TimeInterval::Weeks(1),
    TimeInterval::Months(1),
    TimeInterval::Months(3),
    TimeInterval::Years(1),
];

/// Pick the calendar interval whose length is closest to span / count.
pub fn time_interval(start_ms: f64, stop_ms: f64, count: usize) -> TimeInterval {
    let target = (stop_ms - start_ms).abs() / count.max(1) as f64;
    let year = 365.0 * DAY as f64;
    if target > year {
        let step = tick_increment(0.0, target / year * count.max(1) as f64, count).max(1.0);
        return TimeInterval::Years(step as i32);
    }
    for w in TIME_INTERVALS.windows(2) {
        let (a, b) = (w[0].approx_ms(), w[1].approx_ms());
        if target <= b {
            return if target / a < b / target { w[0] } else { w[1] };
        }
    }
    TimeInterval::Years(1)
}

pub fn to_datetime(ms: i64) -> NaiveDateTime {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|d| d.naive_utc())
        .unwrap_or_default()
}

pub fn to_millis(t: &NaiveDateTime) -> f64 {
    t.and_utc().timestamp_millis() as f64
}

fn month_start(month_index: i32) -> i64 {
    let y = month_index.div_euclid(12);
    let m = month_index.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(y, m, 1)
        .map(|d| d.and_time(NaiveTime::MIN).and_utc().timestamp_millis())
        .unwrap_or(0)
}

/// Linear scale over epoch milliseconds with calendar-aware ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub inner: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (NaiveDateTime, NaiveDateTime), range: (f64, f64)) -> Self {
        Self::from_millis((to_millis(&domain.0), to_millis(&domain.1)), range)
    }

    pub fn from_millis(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { inner: LinearScale::new(domain, range) }
    }

    pub fn from_values(values_ms: &[f64], field: &str, range: (f64, f64)) -> Result<Self> {
        Ok(Self::from_millis(extent(values_ms, field)?, range))
    }

    pub fn map_time(&self, t: &NaiveDateTime) -> f64 {
        self.inner.map(to_millis(t))
    }

    pub fn invert_time(&self, px: f64) -> NaiveDateTime {
        to_datetime(self.inner.invert(px).round() as i64)
    }

    /// Round the domain outward to the tick interval for `count`.
    pub fn nice(mut self, count: usize) -> Self {
        let (d0, d1) = (self.inner.d0, self.inner.d1);
        if d0 == d1 {
            return self;
        }
        let (lo, hi) = if d0 < d1 { (d0, d1) } else { (d1, d0) };
        let iv = time_interval(lo, hi, count);
        let nlo = iv.floor(lo.floor() as i64) as f64;
        let nhi = iv.ceil(hi.ceil() as i64) as f64;
        self.inner = if d0 < d1 {
            self.inner.with_domain((nlo, nhi))
        } else {
            self.inner.with_domain((nhi, nlo))
        };
        self
    }

    pub fn ticks_time(&self, count: usize) -> Vec<NaiveDateTime> {
        self.tick_values(count).into_iter().map(|ms| to_datetime(ms as i64)).collect()
    }
}

impl ContinuousScale for TimeScale {
    fn map(&self, v: f64) -> f64 { self.inner.map(v) }
    fn invert(&self, px: f64) -> f64 { self.inner.invert(px) }
    fn domain(&self) -> (f64, f64) { self.inner.domain() }
    fn range(&self) -> (f64, f64) { self.inner.range() }

    fn tick_values(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.inner.domain();
        let (lo, hi) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
        if lo == hi || count == 0 {
            return vec![lo];
        }
        let iv = time_interval(lo, hi, count);
        let mut out = Vec::new();
        let mut t = iv.ceil(lo.ceil() as i64);
        while (t as f64) <= hi {
            out.push(t as f64);
            let n = iv.next(t);
            if n <= t { break; }
            t = n;
        }
        out
    }
}

/// Either kind of positional scale; line charts use time, the rest linear.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PositionScale {
    Linear(LinearScale),
    Time(TimeScale),
}

impl PositionScale {
    pub fn is_time(&self) -> bool {
        matches!(self, PositionScale::Time(_))
    }
}

impl ContinuousScale for PositionScale {
    fn map(&self, v: f64) -> f64 {
        match self { PositionScale::Linear(s) => s.map(v), PositionScale::Time(s) => s.map(v) }
    }
    fn invert(&self, px: f64) -> f64 {
        match self { PositionScale::Linear(s) => s.invert(px), PositionScale::Time(s) => s.invert(px) }
    }
    fn domain(&self) -> (f64, f64) {
        match self { PositionScale::Linear(s) => s.domain(), PositionScale::Time(s) => s.domain() }
    }
    fn range(&self) -> (f64, f64) {
        match self { PositionScale::Linear(s) => s.range(), PositionScale::Time(s) => s.range() }
    }
    fn tick_values(&self, count: usize) -> Vec<f64> {
        match self {
            PositionScale::Linear(s) => s.tick_values(count),
            PositionScale::Time(s) => s.tick_values(count),
        }
    }
}

// ---- categorical -------------------------------------------------------------

/// What an ordinal scale does with a value outside its vocabulary.
#[derive(Clone, Debug, PartialEq)]
pub enum Unknown<T> {
    Fail,
    Fallback(T),
}

/// Discrete lookup from a category vocabulary to outputs. Outputs cycle
/// when there are fewer outputs than categories.
#[derive(Clone, Debug, PartialEq)]
pub struct OrdinalScale<T> {
    domain: Vec<String>,
    range: Vec<T>,
    unknown: Unknown<T>,
}

impl<T: Clone> OrdinalScale<T> {
    pub fn new<S: AsRef<str>>(domain: &[S], range: Vec<T>) -> Result<Self> {
        if range.is_empty() {
            return Err(ChartError::EmptyDataset { field: "ordinal range".into() });
        }
        let mut vocab: Vec<String> = Vec::with_capacity(domain.len());
        for d in domain {
            let d = d.as_ref();
            if !vocab.iter().any(|v| v == d) {
                vocab.push(d.to_string());
            }
        }
        Ok(Self { domain: vocab, range, unknown: Unknown::Fail })
    }

    pub fn with_unknown(mut self, unknown: Unknown<T>) -> Self {
        self.unknown = unknown;
        self
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn map(&self, value: &str) -> Result<T> {
        match self.domain.iter().position(|d| d == value) {
            Some(i) => Ok(self.range[i % self.range.len()].clone()),
            None => match &self.unknown {
                Unknown::Fallback(t) => {
                    log::warn!("category '{}' not in scale vocabulary, using fallback", value);
                    Ok(t.clone())
                }
                Unknown::Fail => Err(ChartError::OutOfVocabulary { value: value.to_string() }),
            },
        }
    }
}

/// Numeric domain -> color ramp between two end colors. Clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequentialColorScale {
    unit: LinearScale,
    from: Rgba,
    to: Rgba,
}

impl SequentialColorScale {
    pub fn new(domain: (f64, f64), from: Rgba, to: Rgba) -> Self {
        Self { unit: LinearScale::new(domain, (0.0, 1.0)).with_clamp(true), from, to }
    }

    pub fn map(&self, v: f64) -> Rgba {
        self.from.lerp(self.to, self.unit.map(v))
    }
}
