//! Survey area polygon
//!
//! Bounded vertex storage for the user-drawn survey area. The planner only
//! reads the polygon: it needs the vertex count to decide whether the area
//! is usable and the centroid to anchor the spiral's local tangent plane.
//! Editing, tracing, and map rendering live with the owning controller.

use heapless::Vec;

use super::types::Coordinate;

/// Maximum number of polygon vertices
pub const MAX_POLYGON_VERTICES: usize = 64;

/// User-drawn survey area polygon
#[derive(Clone, Debug, Default)]
pub struct SurveyPolygon {
    vertices: Vec<Coordinate, MAX_POLYGON_VERTICES>,
}

impl SurveyPolygon {
    /// Create a new empty polygon
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Build a polygon from a vertex slice.
    ///
    /// Returns Err if the slice exceeds the vertex capacity.
    pub fn from_vertices(vertices: &[Coordinate]) -> Result<Self, &'static str> {
        let mut polygon = Self::new();
        for vertex in vertices {
            polygon.add_vertex(*vertex)?;
        }
        Ok(polygon)
    }

    /// Append a vertex.
    ///
    /// Returns Err if the polygon is full.
    pub fn add_vertex(&mut self, vertex: Coordinate) -> Result<(), &'static str> {
        self.vertices
            .push(vertex)
            .map_err(|_| "polygon full (max 64 vertices)")
    }

    /// Remove all vertices
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// A polygon needs at least 3 vertices to enclose a survey area
    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= 3
    }

    /// All vertices as a slice
    pub fn vertices(&self) -> &[Coordinate] {
        &self.vertices
    }

    /// Vertex-average centroid, or None for an empty polygon
    pub fn centroid(&self) -> Option<Coordinate> {
        if self.vertices.is_empty() {
            return None;
        }

        let mut lat_sum = 0.0;
        let mut lon_sum = 0.0;
        for vertex in &self.vertices {
            lat_sum += vertex.latitude;
            lon_sum += vertex.longitude;
        }

        let count = self.vertices.len() as f64;
        Some(Coordinate::new(lat_sum / count, lon_sum / count))
    }
}
