//! Static spatial index for exact radius queries over 2D points.

use rstar::{AABB, RTree, primitives::GeomWithData};

type IndexedPoint = GeomWithData<[f64; 2], usize>;

/// R*-tree over a fixed set of points, each carrying an external id.
///
/// Built once per query batch via bulk load (O(n log n)) and never
/// mutated. Radius queries are exact closed-ball lookups: a point at
/// distance equal to the radius is included.
pub struct SpatialIndex {
    tree: RTree<IndexedPoint>,
}

impl SpatialIndex {
    /// Bulk-load an index from (position, id) pairs.
    pub fn build(points: &[([f64; 2], usize)]) -> Self {
        let entries = points
            .iter()
            .map(|&(position, id)| IndexedPoint::new(position, id))
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Ids of all indexed points with Euclidean distance <= `radius`
    /// from `center`.
    ///
    /// Queries the bounding box of the circle first, then filters by
    /// squared distance so the boundary stays inclusive.
    pub fn within_radius(&self, center: [f64; 2], radius: f64) -> Vec<usize> {
        let envelope = AABB::from_corners(
            [center[0] - radius, center[1] - radius],
            [center[0] + radius, center[1] + radius],
        );
        let radius_sq = radius * radius;

        self.tree
            .locate_in_envelope(&envelope)
            .filter(|point| {
                let [x, y] = *point.geom();
                let dx = x - center[0];
                let dy = y - center[1];
                dx * dx + dy * dy <= radius_sq
            })
            .map(|point| point.data)
            .collect()
    }
}
