/*
 * Proximity Graph Module
 *
 * This module recomputes, every frame and from scratch, the set of sphere
 * pairs whose Euclidean distance is below the link threshold. The edge set is
 * a pure function of the current positions and the threshold; nothing is
 * carried over between frames.
 *
 * The default path is an exhaustive pairwise scan, which is the right tool at
 * the default point count (~15). A uniform 3D cell grid can be toggled on for
 * much larger clouds; it must produce exactly the same edge set as the scan,
 * since correctness is defined by the distance predicate alone.
 */

use nannou::prelude::*;

use crate::params::SimulationParams;
use crate::sphere::Sphere;

// An unordered pair of sphere indices, stored with a < b
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    pub fn new(i: usize, j: usize) -> Self {
        if i <= j {
            Self { a: i, b: j }
        } else {
            Self { a: j, b: i }
        }
    }
}

pub struct ProximityGraph {
    threshold: f32,
    use_grid: bool,
    edges: Vec<Edge>,
    grid: CellGrid,
}

impl ProximityGraph {
    pub fn new(params: &SimulationParams) -> Self {
        Self {
            threshold: params.link_threshold,
            use_grid: params.enable_spatial_grid,
            edges: Vec::new(),
            grid: CellGrid::new(params.link_threshold, params.bound),
        }
    }

    // Pick up parameter changes that affect linking
    pub fn configure(&mut self, params: &SimulationParams) {
        self.use_grid = params.enable_spatial_grid;
        if self.threshold != params.link_threshold || self.grid.half_extent != params.bound {
            self.threshold = params.link_threshold;
            self.grid = CellGrid::new(params.link_threshold, params.bound);
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    // Recompute the full edge set for the given spheres. The previous set is
    // discarded wholesale; no stale edges survive.
    pub fn rebuild(&mut self, spheres: &[Sphere]) -> &[Edge] {
        self.edges.clear();

        if self.use_grid {
            self.rebuild_with_grid(spheres);
        } else {
            self.rebuild_pairwise(spheres);
        }

        &self.edges
    }

    // Exhaustive O(n^2) scan over all unordered pairs
    fn rebuild_pairwise(&mut self, spheres: &[Sphere]) {
        for i in 0..spheres.len() {
            for j in (i + 1)..spheres.len() {
                let distance = spheres[i].position.distance(spheres[j].position);
                // Strictly below the threshold; exact ties are excluded
                if distance < self.threshold {
                    self.edges.push(Edge { a: i, b: j });
                }
            }
        }
    }

    // Grid-accelerated rebuild: cell size equals the threshold, so every
    // qualifying pair sits in the same or an adjacent cell
    fn rebuild_with_grid(&mut self, spheres: &[Sphere]) {
        self.grid.clear();
        for (i, sphere) in spheres.iter().enumerate() {
            self.grid.insert(i, sphere.position);
        }

        for (i, sphere) in spheres.iter().enumerate() {
            for &j in self.grid.nearby_indices(sphere.position) {
                // Each unordered pair is visited from both sides; keep one
                if j <= i {
                    continue;
                }
                let distance = sphere.position.distance(spheres[j].position);
                if distance < self.threshold {
                    self.edges.push(Edge { a: i, b: j });
                }
            }
        }

        // Match the pairwise scan's (a, b) ordering
        self.edges.sort_unstable();
    }
}

// A dense 3D grid of index buckets covering the bounding cube. Positions
// outside the cube clamp to the border cells, which keeps neighbor lookups
// correct for spheres that have overshot a wall.
struct CellGrid {
    cell_size: f32,
    grid_size: usize,
    half_extent: f32,
    cells: Vec<Vec<usize>>,
    nearby_cache: Vec<usize>,
}

// Upper bound on cells per dimension
const MAX_GRID_RESOLUTION: usize = 64;

impl CellGrid {
    fn new(cell_size: f32, half_extent: f32) -> Self {
        // Cells are at least as large as the threshold, so every qualifying
        // pair sits within one cell of each other; the resolution cap keeps a
        // small threshold from exploding the cell count
        let cell_size = cell_size
            .max(half_extent * 2.0 / MAX_GRID_RESOLUTION as f32)
            .max(f32::EPSILON);
        let grid_size = ((half_extent * 2.0 / cell_size).ceil() as usize).clamp(1, MAX_GRID_RESOLUTION);
        let cells = vec![Vec::new(); grid_size * grid_size * grid_size];

        Self {
            cell_size,
            grid_size,
            half_extent,
            cells,
            nearby_cache: Vec::new(),
        }
    }

    #[inline]
    fn cell_coord(&self, value: f32) -> usize {
        ((value + self.half_extent) / self.cell_size).clamp(0.0, self.grid_size as f32 - 1.0)
            as usize
    }

    #[inline]
    fn cell_index(&self, position: Vec3) -> usize {
        let x = self.cell_coord(position.x);
        let y = self.cell_coord(position.y);
        let z = self.cell_coord(position.z);
        (z * self.grid_size + y) * self.grid_size + x
    }

    fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    #[inline]
    fn insert(&mut self, index: usize, position: Vec3) {
        let cell = self.cell_index(position);
        self.cells[cell].push(index);
    }

    // Indices in the cell containing the position and the 26 cells around it
    fn nearby_indices(&mut self, position: Vec3) -> &[usize] {
        let grid_x = self.cell_coord(position.x) as isize;
        let grid_y = self.cell_coord(position.y) as isize;
        let grid_z = self.cell_coord(position.z) as isize;
        let grid_size = self.grid_size as isize;

        self.nearby_cache.clear();

        for z_offset in -1..=1 {
            let check_z = grid_z + z_offset;
            if check_z < 0 || check_z >= grid_size {
                continue;
            }

            for y_offset in -1..=1 {
                let check_y = grid_y + y_offset;
                if check_y < 0 || check_y >= grid_size {
                    continue;
                }

                let row = (check_z as usize * self.grid_size + check_y as usize) * self.grid_size;

                for x_offset in -1..=1 {
                    let check_x = grid_x + x_offset;
                    if check_x < 0 || check_x >= grid_size {
                        continue;
                    }

                    self.nearby_cache
                        .extend_from_slice(&self.cells[row + check_x as usize]);
                }
            }
        }

        &self.nearby_cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_orders_its_indices() {
        assert_eq!(Edge::new(4, 1), Edge { a: 1, b: 4 });
        assert_eq!(Edge::new(1, 4), Edge { a: 1, b: 4 });
    }

    #[test]
    fn cell_coord_clamps_outside_positions() {
        let grid = CellGrid::new(15.0, 20.0);
        assert_eq!(grid.cell_coord(-1000.0), 0);
        assert_eq!(grid.cell_coord(1000.0), grid.grid_size - 1);
    }
}
