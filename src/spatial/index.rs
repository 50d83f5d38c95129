//! R-tree over marker positions in normalized world coordinates.
//!
//! The index only narrows the candidate set for hit-testing. Exact
//! screen-space distances are computed afterwards against the projection.

use crate::{core::geo::Point, prelude::HashMap};

use rstar::{PointDistance, RTree, RTreeObject, AABB};

/// An indexed overlay position
#[derive(Debug, Clone, Copy)]
pub struct SpatialItem {
    pub id: u64,
    pub position: Point,
}

impl SpatialItem {
    pub fn new(id: u64, position: Point) -> Self {
        Self { id, position }
    }
}

impl PartialEq for SpatialItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SpatialItem {}

// --- rstar integration -------------------------------------------------------------------------

impl RTreeObject for SpatialItem {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.position.x, self.position.y])
    }
}

impl PointDistance for SpatialItem {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.position.x - point[0];
        let dy = self.position.y - point[1];
        dx * dx + dy * dy
    }
}

/// Point index keyed by overlay id
#[derive(Debug, Default)]
pub struct SpatialIndex {
    rtree: RTree<SpatialItem>,
    positions: HashMap<u64, Point>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or moves the item with `id`
    pub fn insert(&mut self, id: u64, position: Point) {
        self.remove(id);
        self.positions.insert(id, position);
        self.rtree.insert(SpatialItem::new(id, position));
    }

    pub fn remove(&mut self, id: u64) -> Option<Point> {
        let position = self.positions.remove(&id)?;
        self.rtree.remove(&SpatialItem::new(id, position));
        Some(position)
    }

    /// Ids of items within `radius` world units of `center`
    pub fn query_radius(&self, center: &Point, radius: f64) -> Vec<u64> {
        self.rtree
            .locate_within_distance([center.x, center.y], radius * radius)
            .map(|item| item.id)
            .collect()
    }

    /// Like [`SpatialIndex::query_radius`], but also searches the world copies
    /// to the east and west so queries near the antimeridian find items on
    /// the other side.
    pub fn query_radius_wrapped(&self, center: &Point, radius: f64) -> Vec<u64> {
        let mut ids: Vec<u64> = [-1.0, 0.0, 1.0]
            .iter()
            .flat_map(|shift| self.query_radius(&Point::new(center.x + shift, center.y), radius))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    pub fn get(&self, id: u64) -> Option<Point> {
        self.positions.get(&id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.rtree.size() == 0
    }

    pub fn len(&self) -> usize {
        self.rtree.size()
    }

    pub fn clear(&mut self) {
        self.rtree = RTree::new();
        self.positions.clear();
    }
}
