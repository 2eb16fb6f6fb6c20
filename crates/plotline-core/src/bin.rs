// File: crates/plotline-core/src/bin.rs
// Summary: Histogram bucketing over a numeric domain with nice thresholds.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::scale::ticks;

/// Default target bucket count.
pub const DEFAULT_THRESHOLDS: usize = 10;

/// One bucket: `[x0, x1)`, except the last bucket which is `[x0, x1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Bin<'a, T> {
    pub x0: f64,
    pub x1: f64,
    pub members: Vec<&'a T>,
}

impl<T> Bin<'_, T> {
    pub fn len(&self) -> usize { self.members.len() }
    pub fn is_empty(&self) -> bool { self.members.is_empty() }
}

/// Policy for values outside the generator's domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutOfDomain {
    /// Abort with [`ChartError::OutOfDomain`].
    #[default]
    Fail,
    /// Put the value in the first or last bin.
    Clamp,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BinGenerator {
    pub lo: f64,
    pub hi: f64,
    /// Target bucket count; the actual count follows the nice tick step.
    pub thresholds: usize,
    pub out_of_domain: OutOfDomain,
}

impl BinGenerator {
    pub fn new(domain: (f64, f64)) -> Self {
        Self {
            lo: domain.0,
            hi: domain.1,
            thresholds: DEFAULT_THRESHOLDS,
            out_of_domain: OutOfDomain::Fail,
        }
    }

    pub fn thresholds(mut self, count: usize) -> Self {
        self.thresholds = count;
        self
    }

    pub fn out_of_domain(mut self, policy: OutOfDomain) -> Self {
        self.out_of_domain = policy;
        self
    }

    /// Bucket edges `[lo, t1, ..., tn, hi]`.
    pub fn edges(&self) -> Result<Vec<f64>> {
        if !(self.lo.is_finite() && self.hi.is_finite()) || self.lo > self.hi {
            return Err(ChartError::InvalidDomain { lo: self.lo, hi: self.hi });
        }
        let mut edges = vec![self.lo];
        if self.lo < self.hi {
            edges.extend(
                ticks(self.lo, self.hi, self.thresholds.max(1))
                    .into_iter()
                    .filter(|t| *t > self.lo && *t < self.hi),
            );
        }
        edges.push(self.hi);
        Ok(edges)
    }

    /// Partition `items` by `value` into contiguous buckets.
    pub fn bin<'a, T, F>(&self, items: &'a [T], value: F) -> Result<Vec<Bin<'a, T>>>
    where
        F: Fn(&T) -> Result<f64>,
    {
        let edges = self.edges()?;
        let mut bins: Vec<Bin<'a, T>> = edges
            .windows(2)
            .map(|w| Bin { x0: w[0], x1: w[1], members: Vec::new() })
            .collect();
        let last = bins.len() - 1;

        for (i, item) in items.iter().enumerate() {
            let v = value(item).map_err(|e| e.at_index(i))?;
            let slot = if v < self.lo || v > self.hi || v.is_nan() {
                match self.out_of_domain {
                    OutOfDomain::Fail => {
                        return Err(ChartError::OutOfDomain { value: v, lo: self.lo, hi: self.hi })
                    }
                    OutOfDomain::Clamp if v < self.lo => 0,
                    OutOfDomain::Clamp if v > self.hi => last,
                    OutOfDomain::Clamp => {
                        return Err(ChartError::OutOfDomain { value: v, lo: self.lo, hi: self.hi })
                    }
                }
            } else {
                // Right-most bin whose lower edge is <= v; hi itself lands in the last bin.
                edges[1..edges.len() - 1].partition_point(|e| *e <= v)
            };
            if v < self.lo || v > self.hi {
                warn!("value {} clamped into bin {} of [{}, {}]", v, slot, self.lo, self.hi);
            }
            bins[slot].members.push(item);
        }
        debug!("binned {} items into {} bins over [{}, {}]", items.len(), bins.len(), self.lo, self.hi);
        Ok(bins)
    }
}
