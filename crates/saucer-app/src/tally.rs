//! A draw sink that only counts what it is given, for headless runs.

use saucer_core::shapes::{DrawSink, Shape, ShapeKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShapeTally {
    pub rectangles: usize,
    pub circles: usize,
    pub wedges: usize,
    pub polygons: usize,
    pub hulls: usize,
}

impl ShapeTally {
    pub fn total(&self) -> usize {
        self.rectangles + self.circles + self.wedges + self.polygons + self.hulls
    }
}

impl DrawSink for ShapeTally {
    fn submit(&mut self, shape: Shape) {
        match shape.kind {
            ShapeKind::Rectangle { .. } => self.rectangles += 1,
            ShapeKind::Circle { .. } => self.circles += 1,
            ShapeKind::Wedge { .. } => self.wedges += 1,
            ShapeKind::Polygon { .. } => self.polygons += 1,
            ShapeKind::CubicHull { .. } => self.hulls += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saucer_core::commands::InputCommand;
    use saucer_core::config::WorldConfig;
    use saucer_core::types::Position;
    use saucer_sim::{ScriptedRandom, SimulationEngine};

    #[test]
    fn test_tally_counts_one_frame() {
        let config = WorldConfig {
            target_cows: 1,
            hover_jitter: 0.0,
            ..Default::default()
        };
        let mut engine = SimulationEngine::empty_field(config, Box::new(ScriptedRandom::new()));
        engine.place_cow(Position::new(300.0, 100.0), 2);

        let mut tally = ShapeTally::default();
        engine.draw(&mut tally);
        // sky + grass, cow body/legs/head/marks, no beam
        assert_eq!(tally.rectangles, 2 + 6);
        assert_eq!(tally.polygons, 0);
        assert_eq!(tally.wedges, 1);
        assert_eq!(tally.hulls, 2);
        assert_eq!(tally.circles, 10);

        engine.queue_command(InputCommand::ToggleBeam);
        engine.tick();
        let mut tally = ShapeTally::default();
        engine.draw(&mut tally);
        assert_eq!(tally.polygons, 1);
        assert_eq!(tally.total(), engine.shapes().count());
    }
}
