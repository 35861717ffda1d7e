//! Circular layout - deterministic node placement.

use std::f64::consts::{FRAC_PI_2, TAU};

use concept_model::{Concept, RenderConfig};
use serde::{Deserialize, Serialize};

use super::{GraphSnapshot, RenderAdapter, RenderError, RenderResult};

/// Position of one concept in layout space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    pub concept: Concept,
    pub x: f64,
    pub y: f64,
}

/// Node positions in concept insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub positions: Vec<NodePosition>,
}

impl Layout {
    pub fn position_of(&self, label: &str) -> Option<&NodePosition> {
        self.positions.iter().find(|p| p.concept == label)
    }
}

/// Places concepts evenly on a circle, the first one at the top.
///
/// The same snapshot always yields the same layout. A single concept sits
/// at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularLayout {
    radius: f64,
}

impl CircularLayout {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.layout_radius)
    }
}

impl Default for CircularLayout {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}

impl RenderAdapter for CircularLayout {
    type Output = Layout;

    fn render(&self, snapshot: &GraphSnapshot) -> RenderResult<Layout> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(RenderError::InvalidRadius(self.radius));
        }

        let count = snapshot.concepts.len();
        let positions = snapshot
            .concepts
            .iter()
            .enumerate()
            .map(|(i, concept)| {
                let (x, y) = if count == 1 {
                    (0.0, 0.0)
                } else {
                    let angle = FRAC_PI_2 - TAU * i as f64 / count as f64;
                    (self.radius * angle.cos(), self.radius * angle.sin())
                };
                NodePosition {
                    concept: concept.clone(),
                    x,
                    y,
                }
            })
            .collect();

        Ok(Layout { positions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::sample_snapshot;

    #[test]
    fn test_places_every_concept() {
        let snapshot = sample_snapshot();
        let layout = CircularLayout::default().render(&snapshot).unwrap();

        assert_eq!(layout.positions.len(), snapshot.concepts.len());
        // Unconnected concepts are still placed.
        assert!(layout.position_of("Moon").is_some());
    }

    #[test]
    fn test_positions_on_circle() {
        let layout = CircularLayout::new(2.0).render(&sample_snapshot()).unwrap();

        for position in &layout.positions {
            let distance = (position.x * position.x + position.y * position.y).sqrt();
            assert!((distance - 2.0).abs() < 1e-9);
        }

        let first = &layout.positions[0];
        assert!(first.x.abs() < 1e-9);
        assert!((first.y - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let snapshot = sample_snapshot();
        let layout = CircularLayout::default();

        assert_eq!(layout.render(&snapshot).unwrap(), layout.render(&snapshot).unwrap());
    }

    #[test]
    fn test_degenerate_snapshots() {
        let layout = CircularLayout::default();

        let empty = layout.render(&GraphSnapshot::default()).unwrap();
        assert!(empty.positions.is_empty());

        let single = GraphSnapshot::new(vec![Concept::new("Alone")], Vec::new());
        let placed = layout.render(&single).unwrap();
        assert_eq!(placed.positions[0].x, 0.0);
        assert_eq!(placed.positions[0].y, 0.0);
    }

    #[test]
    fn test_rejects_bad_radius() {
        let result = CircularLayout::new(-1.0).render(&sample_snapshot());
        assert!(matches!(result, Err(RenderError::InvalidRadius(_))));
    }
}
