//! Close-point search.
//!
//! Finds every pair of positions closer than a threshold using a uniform
//! spatial hash whose cell size equals the threshold. Any qualifying pair
//! lies in the same or an adjacent cell, so scanning the 26 neighbours
//! gives the same answer as an all-pairs test.

use std::collections::HashMap;

use surfmap_math::Vec3;
use surfmap_types::{SurfmapError, SurfmapResult};
use tracing::debug;

type CellKey = (i64, i64, i64);

/// Uniform grid binning point indices by cell.
struct SpatialHash {
    inv_cell_size: f64,
    grid: HashMap<CellKey, Vec<u32>>,
}

impl SpatialHash {
    fn new(cell_size: f64, positions: &[Vec3]) -> Self {
        let mut hash = Self {
            inv_cell_size: 1.0 / cell_size,
            grid: HashMap::new(),
        };
        for (i, &p) in positions.iter().enumerate() {
            let key = hash.cell_key(p);
            hash.grid.entry(key).or_default().push(i as u32);
        }
        hash
    }

    fn cell_key(&self, p: Vec3) -> CellKey {
        let c = (p * self.inv_cell_size).floor();
        (c.x as i64, c.y as i64, c.z as i64)
    }

    /// Candidate pairs from shared and adjacent cells, each pair once.
    fn candidate_pairs(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.grid.iter().flat_map(move |(&key, verts)| {
            let same = verts
                .iter()
                .enumerate()
                .flat_map(move |(i, &a)| verts[i + 1..].iter().map(move |&b| (a, b)));
            let neighbours = neighbour_keys(key)
                .filter(move |&nkey| nkey > key)
                .filter_map(move |nkey| self.grid.get(&nkey))
                .flat_map(move |others| {
                    verts
                        .iter()
                        .flat_map(move |&a| others.iter().map(move |&b| (a, b)))
                });
            same.chain(neighbours)
        })
    }
}

fn neighbour_keys((cx, cy, cz): CellKey) -> impl Iterator<Item = CellKey> {
    (-1..=1_i64).flat_map(move |dx| {
        (-1..=1_i64).flat_map(move |dy| {
            (-1..=1_i64).filter_map(move |dz| {
                if dx == 0 && dy == 0 && dz == 0 {
                    return None;
                }
                Some((cx.checked_add(dx)?, cy.checked_add(dy)?, cz.checked_add(dz)?))
            })
        })
    })
}

/// All index pairs `[i, j]`, `i < j`, with `|x_i - x_j| < threshold`,
/// sorted lexicographically.
pub fn find_close_points(positions: &[Vec3], threshold: f64) -> SurfmapResult<Vec<[u32; 2]>> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(SurfmapError::InvalidConfig(format!(
            "close-point threshold must be finite and positive, got {}",
            threshold
        )));
    }

    let hash = SpatialHash::new(threshold, positions);

    let mut pairs: Vec<[u32; 2]> = hash
        .candidate_pairs()
        .filter(|&(a, b)| positions[a as usize].distance(positions[b as usize]) < threshold)
        .map(|(a, b)| if a < b { [a, b] } else { [b, a] })
        .collect();
    pairs.sort_unstable();

    debug!(
        points = positions.len(),
        cells = hash.grid.len(),
        threshold,
        pairs = pairs.len(),
        "close-point search"
    );
    Ok(pairs)
}
