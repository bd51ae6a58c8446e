//! Lattice polymer representation, the straight-chain generator and the
//! self-avoidance / connectivity check.

use std::collections::HashSet;
use std::ops::Index;

use nalgebra::Vector2;

use crate::error::{Result, SimulationError};

/// A site on the 2D square lattice.
pub type Site = Vector2<i32>;

/// Chains up to this length are checked for duplicate sites with a plain
/// pairwise scan; longer chains go through a hash set.
const PAIRWISE_UNIQUENESS_LIMIT: usize = 32;

/// An ordered chain of monomers. Position in the sequence is bond order.
///
/// Nothing about the coordinates is assumed on construction; use
/// [`Polymer::is_intact`] to check the self-avoidance and connectivity
/// invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polymer {
    monomers: Vec<Site>,
}

impl Polymer {
    pub fn from_sites(monomers: Vec<Site>) -> Self {
        Self { monomers }
    }

    pub fn from_coords(coords: &[[i32; 2]]) -> Self {
        Self {
            monomers: coords.iter().map(|c| Site::new(c[0], c[1])).collect(),
        }
    }

    /// Straight chain centred on the origin.
    pub fn straight(length: usize) -> Result<Self> {
        generate_initial(length, Site::zeros())
    }

    pub fn len(&self) -> usize {
        self.monomers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monomers.is_empty()
    }

    pub fn monomers(&self) -> &[Site] {
        &self.monomers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Site> {
        self.monomers.iter()
    }

    pub fn is_intact(&self, length: usize) -> bool {
        is_intact(self, length)
    }

    /// Largest Euclidean distance between any two monomers.
    pub fn diameter(&self) -> f64 {
        let mut max_sq = 0i64;
        for (i, a) in self.monomers.iter().enumerate() {
            for b in &self.monomers[i + 1..] {
                max_sq = max_sq.max(squared_distance(a, b));
            }
        }
        (max_sq as f64).sqrt()
    }

    /// Copy of the chain shifted by `offset`.
    pub fn translated(&self, offset: &Site) -> Self {
        Self {
            monomers: self.monomers.iter().map(|m| m + offset).collect(),
        }
    }

    /// Lower-left and upper-right corners of the bounding box.
    pub fn bounds(&self) -> Option<(Site, Site)> {
        let first = *self.monomers.first()?;
        Some(self.monomers.iter().fold((first, first), |(lo, hi), m| {
            (
                Site::new(lo.x.min(m.x), lo.y.min(m.y)),
                Site::new(hi.x.max(m.x), hi.y.max(m.y)),
            )
        }))
    }
}

impl Index<usize> for Polymer {
    type Output = Site;

    fn index(&self, index: usize) -> &Site {
        &self.monomers[index]
    }
}

impl From<Vec<Site>> for Polymer {
    fn from(monomers: Vec<Site>) -> Self {
        Self::from_sites(monomers)
    }
}

#[inline]
pub(crate) fn squared_distance(a: &Site, b: &Site) -> i64 {
    let dx = a.x as i64 - b.x as i64;
    let dy = a.y as i64 - b.y as i64;
    dx * dx + dy * dy
}

/// Horizontal chain of `length` monomers centred on `origin.x` at height
/// `origin.y`.
///
/// # Arguments
/// * `length` - Number of monomers, at least 1
/// * `origin` - Site the chain is centred on
pub fn generate_initial(length: usize, origin: Site) -> Result<Polymer> {
    if length < 1 {
        return Err(SimulationError::Configuration(
            "polymer length must be at least 1".to_string(),
        ));
    }
    let n = i32::try_from(length).map_err(|_| {
        SimulationError::Configuration(format!("polymer length {} is too large", length))
    })?;
    let start = origin
        .x
        .checked_sub(n / 2)
        .filter(|start| start.checked_add(n - 1).is_some())
        .ok_or_else(|| {
            SimulationError::Configuration(format!(
                "a chain of {} monomers centred on ({}, {}) leaves the lattice",
                length, origin.x, origin.y
            ))
        })?;
    let monomers = (0..n).map(|i| Site::new(start + i, origin.y)).collect();
    Ok(Polymer { monomers })
}

/// Whether `polymer` has exactly `length` distinct monomers and every bond
/// has unit length.
pub fn is_intact(polymer: &Polymer, length: usize) -> bool {
    if polymer.len() != length || !all_sites_distinct(polymer.monomers()) {
        return false;
    }
    // Integer coordinates: any squared distance other than 1 is a broken bond.
    polymer
        .monomers()
        .windows(2)
        .all(|pair| squared_distance(&pair[0], &pair[1]) == 1)
}

fn all_sites_distinct(sites: &[Site]) -> bool {
    if sites.len() <= PAIRWISE_UNIQUENESS_LIMIT {
        return sites
            .iter()
            .enumerate()
            .all(|(i, a)| sites[..i].iter().all(|b| a != b));
    }
    let mut seen = HashSet::with_capacity(sites.len());
    sites.iter().all(|s| seen.insert(*s))
}
