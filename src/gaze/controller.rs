//! Gaze-driven carousel controller.
//!
//! Once per frame the controller looks at the vertical component of the
//! gaze direction and moves between front/up/down. Entering `Up` turns the
//! ring counter-clockwise and entering `Down` turns it clockwise, each by
//! one slot. While a turn is still animating no transitions are evaluated.
//!
//! The dead zone is deliberately asymmetric: leaving `Up` for `Front` only
//! needs `y < T`, but from `Up` a reading below `-T` goes straight to
//! `Down` and turns the ring. `Down` mirrors this.

use glam::Vec3;
use tracing::{debug, info};

use super::mode::{GazeMode, RotationDirection};
use crate::animation::{Animation, AnimationDriver, AnimationHandle};
use crate::carousel::CarouselModel;
use crate::config::Config;

/// Tunables shared by the state machine and the animations it requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GazeSettings {
    /// Vertical look-at magnitude that counts as looking up/down
    pub threshold: f32,
    /// Seconds for the rotation and both scale animations
    pub duration: f32,
    /// Scale of the selected board; deselected boards go to its reciprocal
    pub selected_scale: f32,
}

impl Default for GazeSettings {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            duration: 0.3,
            selected_scale: 2.0,
        }
    }
}

impl From<&Config> for GazeSettings {
    fn from(config: &Config) -> Self {
        Self {
            threshold: config.gaze.threshold,
            duration: config.animation.duration_secs,
            selected_scale: config.carousel.selected_scale,
        }
    }
}

/// A turn of the ring issued during a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub direction: RotationDirection,
    /// Signed yaw in degrees
    pub angle_deg: f32,
    /// Previously selected board
    pub from: usize,
    /// Newly selected board
    pub to: usize,
    /// Handle of the ring rotation animation
    pub handle: AnimationHandle,
}

/// What happened during one call to [`GazeController::step`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepOutcome {
    /// False when a turn was still animating and the table was skipped
    pub evaluated: bool,
    /// Mode before and after, if it changed
    pub transition: Option<(GazeMode, GazeMode)>,
    pub rotation: Option<Rotation>,
}

#[derive(Debug)]
pub struct GazeController {
    carousel: CarouselModel,
    settings: GazeSettings,
    mode: GazeMode,
    /// Ring rotation still animating; at most one at a time
    rotation: Option<AnimationHandle>,
}

impl GazeController {
    pub fn new(carousel: CarouselModel, settings: GazeSettings) -> Self {
        Self {
            carousel,
            settings,
            mode: GazeMode::Front,
            rotation: None,
        }
    }

    pub fn mode(&self) -> GazeMode {
        self.mode
    }

    pub fn carousel(&self) -> &CarouselModel {
        &self.carousel
    }

    pub fn settings(&self) -> &GazeSettings {
        &self.settings
    }

    pub fn selected_index(&self) -> usize {
        self.carousel.selected_index()
    }

    pub fn rotation_in_flight(&self) -> Option<AnimationHandle> {
        self.rotation
    }

    /// Run one frame of the state machine against the gaze Y component.
    pub fn step<D: AnimationDriver>(&mut self, look_at_y: f32, driver: &mut D) -> StepOutcome {
        if let Some(handle) = self.rotation {
            if driver.is_finished(handle) {
                debug!("Carousel rotation {:?} finished", handle);
                self.rotation = None;
            }
        }

        let mut outcome = StepOutcome::default();
        if self.rotation.is_some() {
            return outcome;
        }
        outcome.evaluated = true;

        let t = self.settings.threshold;
        let before = self.mode;

        // Checked in sequence; each sees the mode left by the previous one.
        if self.mode == GazeMode::Front {
            if look_at_y > t {
                self.mode = GazeMode::Up;
                outcome.rotation = Some(self.rotate(RotationDirection::CounterClockwise, driver));
            } else if look_at_y < -t {
                self.mode = GazeMode::Down;
                outcome.rotation = Some(self.rotate(RotationDirection::Clockwise, driver));
            }
        }
        if self.mode == GazeMode::Up {
            if look_at_y < -t {
                self.mode = GazeMode::Down;
                outcome.rotation = Some(self.rotate(RotationDirection::Clockwise, driver));
            } else if look_at_y < t {
                self.mode = GazeMode::Front;
            }
        }
        if self.mode == GazeMode::Down {
            if look_at_y > t {
                self.mode = GazeMode::Up;
                outcome.rotation = Some(self.rotate(RotationDirection::CounterClockwise, driver));
            } else if look_at_y > -t {
                self.mode = GazeMode::Front;
            }
        }

        if self.mode != before {
            info!("Gaze mode: {} -> {} (y = {:.3})", before, self.mode, look_at_y);
            outcome.transition = Some((before, self.mode));
        }
        outcome
    }

    /// Turn the ring one slot and swap the highlighted board.
    fn rotate<D: AnimationDriver>(&mut self, direction: RotationDirection, driver: &mut D) -> Rotation {
        let duration = self.settings.duration;
        let scale = self.settings.selected_scale;
        let angle_deg = direction.sign() * self.carousel.step_degrees();

        let handle = driver.start(Animation::RotateByAxisWithPivot {
            target: self.carousel.parent(),
            duration,
            angle_deg,
            axis: Vec3::Y,
            pivot: Vec3::ZERO,
        });
        self.rotation = Some(handle);

        driver.start(Animation::Scale {
            target: self.carousel.selected_board().node,
            duration,
            to: Vec3::new(1.0 / scale, 1.0 / scale, 1.0),
        });

        let (from, to) = match direction {
            RotationDirection::CounterClockwise => self.carousel.select_previous(),
            RotationDirection::Clockwise => self.carousel.select_next(),
        };

        driver.start(Animation::Scale {
            target: self.carousel.selected_board().node,
            duration,
            to: Vec3::new(scale, scale, 1.0),
        });

        info!(
            "Carousel turned {} by {:.1} degrees: board {} -> {} ({})",
            direction,
            angle_deg,
            from,
            to,
            self.carousel.selected_board().content.asset()
        );

        Rotation {
            direction,
            angle_deg,
            from,
            to,
            handle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{Board, BoardContent};
    use crate::scene::{NodeId, SceneGraph};
    use std::collections::HashSet;

    /// Driver that records requests and finishes only when told to.
    #[derive(Default)]
    struct RecordingDriver {
        started: Vec<(AnimationHandle, Animation)>,
        finished: HashSet<AnimationHandle>,
    }

    impl RecordingDriver {
        fn finish_all(&mut self) {
            for (handle, _) in &self.started {
                self.finished.insert(*handle);
            }
        }

        fn rotations(&self) -> Vec<f32> {
            self.started
                .iter()
                .filter_map(|(_, a)| match a {
                    Animation::RotateByAxisWithPivot { angle_deg, .. } => Some(*angle_deg),
                    _ => None,
                })
                .collect()
        }

        fn scales(&self) -> Vec<(NodeId, Vec3)> {
            self.started
                .iter()
                .filter_map(|(_, a)| match a {
                    Animation::Scale { target, to, .. } => Some((*target, *to)),
                    _ => None,
                })
                .collect()
        }
    }

    impl AnimationDriver for RecordingDriver {
        fn start(&mut self, animation: Animation) -> AnimationHandle {
            let handle = AnimationHandle::new(self.started.len() as u64);
            self.started.push((handle, animation));
            handle
        }

        fn is_finished(&self, handle: AnimationHandle) -> bool {
            self.finished.contains(&handle)
        }
    }

    fn controller(count: usize) -> (GazeController, Vec<NodeId>) {
        let mut scene = SceneGraph::new();
        let parent = scene.add_node("parent");
        let mut nodes = Vec::new();
        let boards = (0..count)
            .map(|i| {
                let node = scene.add_node(format!("board_{}", i));
                nodes.push(node);
                let content = BoardContent::Photo {
                    texture: format!("photo_{}.jpg", i + 1),
                };
                Board::new(node, content, i, count)
            })
            .collect();
        let carousel = CarouselModel::new(parent, boards).unwrap();
        (GazeController::new(carousel, GazeSettings::default()), nodes)
    }

    #[test]
    fn test_look_up_turns_counter_clockwise_and_wraps() {
        let (mut gaze, nodes) = controller(10);
        let mut driver = RecordingDriver::default();

        let outcome = gaze.step(0.3, &mut driver);

        assert!(outcome.evaluated);
        assert_eq!(outcome.transition, Some((GazeMode::Front, GazeMode::Up)));
        let rotation = outcome.rotation.unwrap();
        assert_eq!(rotation.direction, RotationDirection::CounterClockwise);
        assert_eq!(rotation.angle_deg, 36.0);
        assert_eq!((rotation.from, rotation.to), (0, 9));
        assert_eq!(gaze.selected_index(), 9);

        assert_eq!(driver.rotations(), vec![36.0]);
        assert_eq!(
            driver.scales(),
            vec![
                (nodes[0], Vec3::new(0.5, 0.5, 1.0)),
                (nodes[9], Vec3::new(2.0, 2.0, 1.0)),
            ]
        );
        assert_eq!(gaze.rotation_in_flight(), Some(rotation.handle));
    }

    #[test]
    fn test_in_flight_rotation_blocks_evaluation() {
        let (mut gaze, _) = controller(10);
        let mut driver = RecordingDriver::default();
        gaze.step(0.3, &mut driver);

        let outcome = gaze.step(0.0, &mut driver);

        assert!(!outcome.evaluated);
        assert_eq!(outcome.transition, None);
        assert_eq!(gaze.mode(), GazeMode::Up);
        assert_eq!(driver.started.len(), 3);
    }

    #[test]
    fn test_return_to_front_after_finish_does_not_rotate() {
        let (mut gaze, _) = controller(10);
        let mut driver = RecordingDriver::default();
        gaze.step(0.3, &mut driver);
        driver.finish_all();

        let outcome = gaze.step(0.0, &mut driver);

        assert!(outcome.evaluated);
        assert_eq!(outcome.transition, Some((GazeMode::Up, GazeMode::Front)));
        assert!(outcome.rotation.is_none());
        assert_eq!(gaze.rotation_in_flight(), None);
        assert_eq!(driver.rotations().len(), 1);
        assert_eq!(gaze.selected_index(), 9);
    }

    #[test]
    fn test_look_down_turns_clockwise() {
        let (mut gaze, nodes) = controller(10);
        let mut driver = RecordingDriver::default();

        let outcome = gaze.step(-0.5, &mut driver);

        assert_eq!(outcome.transition, Some((GazeMode::Front, GazeMode::Down)));
        assert_eq!(driver.rotations(), vec![-36.0]);
        assert_eq!(gaze.selected_index(), 1);
        assert_eq!(driver.scales()[1], (nodes[1], Vec3::new(2.0, 2.0, 1.0)));
    }

    #[test]
    fn test_holding_gaze_up_does_not_repeat() {
        let (mut gaze, _) = controller(10);
        let mut driver = RecordingDriver::default();

        gaze.step(0.3, &mut driver);
        driver.finish_all();
        let outcome = gaze.step(0.4, &mut driver);

        assert!(outcome.evaluated);
        assert!(outcome.rotation.is_none());
        assert_eq!(gaze.mode(), GazeMode::Up);
        assert_eq!(driver.rotations().len(), 1);
    }

    #[test]
    fn test_up_straight_to_down() {
        let (mut gaze, _) = controller(10);
        let mut driver = RecordingDriver::default();
        gaze.step(0.3, &mut driver);
        driver.finish_all();

        let outcome = gaze.step(-0.3, &mut driver);

        assert_eq!(outcome.transition, Some((GazeMode::Up, GazeMode::Down)));
        assert_eq!(outcome.rotation.unwrap().direction, RotationDirection::Clockwise);
        assert_eq!(gaze.selected_index(), 0);
        assert_eq!(driver.rotations(), vec![36.0, -36.0]);
    }

    #[test]
    fn test_dead_zone_edges() {
        let (mut gaze, _) = controller(10);
        let mut driver = RecordingDriver::default();

        // Exactly on the threshold is not a crossing
        let outcome = gaze.step(0.2, &mut driver);
        assert_eq!(outcome.transition, None);
        let outcome = gaze.step(-0.2, &mut driver);
        assert_eq!(outcome.transition, None);
        assert!(driver.started.is_empty());

        // From Down, exactly -T stays Down; just above goes Front
        gaze.step(-0.25, &mut driver);
        driver.finish_all();
        assert_eq!(gaze.step(-0.2, &mut driver).transition, None);
        assert_eq!(gaze.mode(), GazeMode::Down);
        assert_eq!(
            gaze.step(-0.19, &mut driver).transition,
            Some((GazeMode::Down, GazeMode::Front))
        );

        // From Up, exactly T stays Up; exactly -T goes Front without a turn
        gaze.step(0.25, &mut driver);
        driver.finish_all();
        assert_eq!(gaze.mode(), GazeMode::Up);
        let turns = driver.rotations().len();

        assert_eq!(gaze.step(0.2, &mut driver).transition, None);
        assert_eq!(gaze.mode(), GazeMode::Up);

        let outcome = gaze.step(-0.2, &mut driver);
        assert_eq!(outcome.transition, Some((GazeMode::Up, GazeMode::Front)));
        assert!(outcome.rotation.is_none());
        assert_eq!(driver.rotations().len(), turns);
    }

    #[test]
    fn test_down_straight_to_up() {
        let (mut gaze, nodes) = controller(10);
        let mut driver = RecordingDriver::default();
        gaze.step(-0.3, &mut driver);
        driver.finish_all();
        assert_eq!(gaze.selected_index(), 1);

        let outcome = gaze.step(0.3, &mut driver);

        assert_eq!(outcome.transition, Some((GazeMode::Down, GazeMode::Up)));
        let rotation = outcome.rotation.unwrap();
        assert_eq!(rotation.direction, RotationDirection::CounterClockwise);
        assert_eq!(rotation.angle_deg, 36.0);
        assert_eq!((rotation.from, rotation.to), (1, 0));
        assert_eq!(gaze.selected_index(), 0);
        assert_eq!(driver.rotations(), vec![-36.0, 36.0]);
        assert_eq!(
            &driver.scales()[2..],
            &[
                (nodes[1], Vec3::new(0.5, 0.5, 1.0)),
                (nodes[0], Vec3::new(2.0, 2.0, 1.0)),
            ]
        );
    }

    #[test]
    fn test_overlapping_crossings_issue_one_rotation() {
        let (mut gaze, _) = controller(10);
        let mut driver = RecordingDriver::default();

        for y in [0.3, 0.0, -0.3, 0.0, 0.3, 0.5] {
            gaze.step(y, &mut driver);
        }

        assert_eq!(driver.rotations().len(), 1);
    }

    #[test]
    fn test_selection_stays_in_range() {
        let (mut gaze, _) = controller(7);
        let mut driver = RecordingDriver::default();

        // Deterministic pseudo-random gaze sequence
        let mut seed: u32 = 0x2545_f491;
        for i in 0..5000 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let y = (seed as f32 / u32::MAX as f32) * 2.0 - 1.0;

            let before = gaze.rotation_in_flight();
            let outcome = gaze.step(y, &mut driver);
            assert!(gaze.selected_index() < 7);

            if outcome.rotation.is_some() {
                assert!(outcome.evaluated);
                assert!(outcome.transition.is_some());
                assert!(before.map_or(true, |h| driver.is_finished(h)));
            }
            if i % 3 == 0 {
                driver.finish_all();
            }
        }
        assert!(!driver.rotations().is_empty());
    }
}
