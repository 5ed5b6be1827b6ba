//! In-process animation engine.
//!
//! Animations queued with [`AnimationDriver::start`] begin on the next
//! [`AnimationEngine::tick`]. Every tick advances all running animations by
//! the same `dt` and writes the interpolated transforms into the scene.

use glam::Vec3;
use tracing::{debug, warn};

use super::{Animation, AnimationDriver, AnimationHandle, Easing};
use crate::scene::SceneGraph;

#[derive(Debug)]
struct Running {
    handle: AnimationHandle,
    animation: Animation,
    elapsed: f32,
    /// Eased progress already written to the scene
    applied: f32,
    /// Scale captured on the first tick
    start_scale: Option<Vec3>,
}

#[derive(Debug, Default)]
pub struct AnimationEngine {
    running: Vec<Running>,
    next_id: u64,
    easing: Easing,
}

impl AnimationEngine {
    pub fn new(easing: Easing) -> Self {
        Self {
            running: Vec::new(),
            next_id: 0,
            easing,
        }
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Number of animations still in flight
    pub fn active(&self) -> usize {
        self.running.len()
    }

    /// Advance every running animation by `dt` seconds.
    pub fn tick(&mut self, dt: f32, scene: &mut SceneGraph) {
        let easing = self.easing;
        let dt = dt.max(0.0);

        self.running.retain_mut(|run| {
            let target = run.animation.target();
            let Ok(transform) = scene.transform_mut(target) else {
                warn!("Dropping animation {:?}: target {} missing", run.handle, target);
                return false;
            };

            run.elapsed += dt;
            let duration = run.animation.duration();
            let t = if duration <= 0.0 {
                1.0
            } else {
                (run.elapsed / duration).min(1.0)
            };
            let progress = easing.ease(t);

            match run.animation {
                Animation::RotateByAxisWithPivot {
                    angle_deg,
                    axis,
                    pivot,
                    ..
                } => {
                    // Same axis and pivot every step, so increments compose exactly.
                    let step = angle_deg * (progress - run.applied);
                    transform.rotate_by_axis_with_pivot(step, axis, pivot);
                }
                Animation::Scale { to, .. } => {
                    let from = *run.start_scale.get_or_insert(transform.scale);
                    transform.scale = if t >= 1.0 { to } else { from.lerp(to, progress) };
                }
            }
            run.applied = progress;

            if t >= 1.0 {
                debug!("Animation {:?} finished", run.handle);
                false
            } else {
                true
            }
        });
    }
}

impl AnimationDriver for AnimationEngine {
    fn start(&mut self, animation: Animation) -> AnimationHandle {
        let handle = AnimationHandle::new(self.next_id);
        self.next_id += 1;
        debug!("Animation {:?} started: {:?}", handle, animation);
        self.running.push(Running {
            handle,
            animation,
            elapsed: 0.0,
            applied: 0.0,
            start_scale: None,
        });
        handle
    }

    fn is_finished(&self, handle: AnimationHandle) -> bool {
        !self.running.iter().any(|run| run.handle == handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::NodeId;

    const EPS: f32 = 1e-4;

    fn scene_with_board() -> (SceneGraph, NodeId) {
        let mut scene = SceneGraph::new();
        let board = scene.add_node("board");
        scene.transform_mut(board).unwrap().set_position(0.0, 0.0, -5.0);
        (scene, board)
    }

    #[test]
    fn test_rotation_lands_exactly() {
        let (mut scene, board) = scene_with_board();
        let mut engine = AnimationEngine::new(Easing::QuadInOut);
        let handle = engine.start(Animation::RotateByAxisWithPivot {
            target: board,
            duration: 0.3,
            angle_deg: 90.0,
            axis: Vec3::Y,
            pivot: Vec3::ZERO,
        });

        assert!(!engine.is_finished(handle));
        for _ in 0..7 {
            engine.tick(0.05, &mut scene);
        }

        assert!(engine.is_finished(handle));
        let position = scene.transform(board).unwrap().position;
        assert!((position - Vec3::new(-5.0, 0.0, 0.0)).length() < EPS);
    }

    #[test]
    fn test_rotation_in_progress() {
        let (mut scene, board) = scene_with_board();
        let mut engine = AnimationEngine::new(Easing::Linear);
        let handle = engine.start(Animation::RotateByAxisWithPivot {
            target: board,
            duration: 1.0,
            angle_deg: 90.0,
            axis: Vec3::Y,
            pivot: Vec3::ZERO,
        });

        engine.tick(0.5, &mut scene);

        assert!(!engine.is_finished(handle));
        let position = scene.transform(board).unwrap().position;
        let expected = Vec3::new(-(45f32.to_radians().sin()), 0.0, -(45f32.to_radians().cos())) * 5.0;
        assert!((position - expected).length() < EPS);
    }

    #[test]
    fn test_scale_goes_to_absolute_target() {
        let (mut scene, board) = scene_with_board();
        scene.transform_mut(board).unwrap().set_scale(2.0, 2.0, 0.0);
        let mut engine = AnimationEngine::new(Easing::Linear);
        let handle = engine.start(Animation::Scale {
            target: board,
            duration: 0.2,
            to: Vec3::new(0.5, 0.5, 1.0),
        });

        engine.tick(0.1, &mut scene);
        let mid = scene.transform(board).unwrap().scale;
        assert!((mid - Vec3::new(1.25, 1.25, 0.5)).length() < EPS);

        engine.tick(0.15, &mut scene);
        assert!(engine.is_finished(handle));
        assert_eq!(scene.transform(board).unwrap().scale, Vec3::new(0.5, 0.5, 1.0));
    }

    #[test]
    fn test_concurrent_animations() {
        let (mut scene, board) = scene_with_board();
        let other = scene.add_node("other");
        let mut engine = AnimationEngine::default();

        let a = engine.start(Animation::Scale {
            target: board,
            duration: 0.1,
            to: Vec3::splat(2.0),
        });
        let b = engine.start(Animation::Scale {
            target: other,
            duration: 0.3,
            to: Vec3::splat(3.0),
        });
        assert_eq!(engine.active(), 2);

        engine.tick(0.1, &mut scene);
        assert!(engine.is_finished(a));
        assert!(!engine.is_finished(b));
        assert_eq!(engine.active(), 1);
    }

    #[test]
    fn test_zero_duration_completes_on_first_tick() {
        let (mut scene, board) = scene_with_board();
        let mut engine = AnimationEngine::default();
        let handle = engine.start(Animation::Scale {
            target: board,
            duration: 0.0,
            to: Vec3::splat(4.0),
        });

        engine.tick(0.0, &mut scene);
        assert!(engine.is_finished(handle));
        assert_eq!(scene.transform(board).unwrap().scale, Vec3::splat(4.0));
    }

    #[test]
    fn test_missing_target_is_dropped() {
        let mut scene = SceneGraph::new();
        let mut elsewhere = SceneGraph::new();
        elsewhere.add_node("a");
        let ghost = elsewhere.add_node("b");

        let mut engine = AnimationEngine::default();
        let handle = engine.start(Animation::Scale {
            target: ghost,
            duration: 1.0,
            to: Vec3::ONE,
        });
        engine.tick(0.016, &mut scene);
        assert!(engine.is_finished(handle));
    }

    #[test]
    fn test_unknown_handle_is_finished() {
        let engine = AnimationEngine::default();
        assert!(engine.is_finished(AnimationHandle::new(42)));
    }
}
