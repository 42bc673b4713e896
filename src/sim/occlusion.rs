//! Occlusion analysis: which spans of the ring sit behind moons
//!
//! Each moon hides `(position - alpha, position + alpha)` of the ring, where
//! `alpha = asin(radius / ring_radius)`. Moons whose spans overlap (directly
//! or through a chain of neighbours) are merged into one group, and each group
//! hides the bounding interval of its members. The bounding interval can be
//! wider than the true union when a chain of three or more moons is not
//! mutually overlapping; that over-coverage is kept as-is.
//!
//! Interval bounds are never rewritten, so a start may be negative and an end
//! may exceed 2π. Only the sort key is normalized.

use serde::{Deserialize, Serialize};
use super::state::Moon;
use crate::{angular_distance, wrap_angle};

/// Angular span of the ring hidden by a moon or a merged group of moons
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleInterval {
    pub start: f32,
    pub end: f32,
}

impl AngleInterval {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Raw occlusion interval of a single moon
    pub fn for_moon(moon: &Moon, ring_radius: f32) -> Self {
        let alpha = moon.half_width(ring_radius);
        Self::new(moon.position - alpha, moon.position + alpha)
    }

    /// Angular width of the interval
    #[cfg(test)]
    pub(crate) fn width(&self) -> f32 {
        self.end - self.start
    }

    /// Start angle with negative values lifted into [0, 2π), used for ordering
    #[inline]
    pub fn sort_key(&self) -> f32 {
        if self.start < 0.0 {
            wrap_angle(self.start)
        } else {
            self.start
        }
    }
}

/// Disjoint-set forest over moon indices
#[derive(Debug, Clone)]
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            // Path halving
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
    }
}

/// Check whether two moons hide overlapping spans of the ring
///
/// Exact tangency does not count as an overlap.
#[inline]
pub fn moons_overlap(a: &Moon, b: &Moon, ring_radius: f32) -> bool {
    let dist = angular_distance(a.position, b.position);
    dist < a.half_width(ring_radius) + b.half_width(ring_radius)
}

/// All unordered index pairs `(i, j)` with `i < j` whose moons overlap
pub fn overlapping_pairs(moons: &[Moon], ring_radius: f32) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..moons.len() {
        for j in (i + 1)..moons.len() {
            if moons_overlap(&moons[i], &moons[j], ring_radius) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Connected components (size >= 2) of the overlap graph
///
/// Each group lists its moon indices ascending; groups are ordered by their
/// lowest index. Moons without an overlapping partner are not included.
pub fn overlap_groups(moon_count: usize, pairs: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let mut sets = DisjointSet::new(moon_count);
    for &(i, j) in pairs {
        sets.union(i, j);
    }

    // Bucket by root, keeping first-seen order (lowest member index)
    let mut root_slot: Vec<Option<usize>> = vec![None; moon_count];
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for i in 0..moon_count {
        let root = sets.find(i);
        match root_slot[root] {
            Some(slot) => groups[slot].push(i),
            None => {
                root_slot[root] = Some(groups.len());
                groups.push(vec![i]);
            }
        }
    }

    groups.retain(|g| g.len() >= 2);
    groups
}

/// Compute the sorted, merged occlusion intervals for a frame
pub fn occlusion_intervals(moons: &[Moon], ring_radius: f32) -> Vec<AngleInterval> {
    let pairs = overlapping_pairs(moons, ring_radius);
    let groups = overlap_groups(moons.len(), &pairs);

    let mut grouped = vec![false; moons.len()];
    for &i in groups.iter().flatten() {
        grouped[i] = true;
    }

    let mut intervals = Vec::with_capacity(moons.len());

    // Singletons keep their raw interval
    for (moon, _) in moons.iter().zip(&grouped).filter(|(_, g)| !**g) {
        intervals.push(AngleInterval::for_moon(moon, ring_radius));
    }

    // Groups hide the bounding interval of their members
    for group in &groups {
        let mut start = f32::INFINITY;
        let mut end = f32::NEG_INFINITY;
        for &i in group {
            let raw = AngleInterval::for_moon(&moons[i], ring_radius);
            start = start.min(raw.start);
            end = end.max(raw.end);
        }
        intervals.push(AngleInterval::new(start, end));
    }

    sort_intervals(&mut intervals);
    intervals
}

/// Stable sort by normalized start angle
pub fn sort_intervals(intervals: &mut [AngleInterval]) {
    intervals.sort_by(|a, b| a.sort_key().total_cmp(&b.sort_key()));
}
