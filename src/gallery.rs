//! Gallery scene: a ring of photo boards and one video board around the
//! viewer, stereo backdrops, and a sepia post-effect.
//!
//! [`Gallery::on_step`] is the per-frame entry point. It samples the head
//! direction, runs the gaze controller, then advances animations.

use glam::{Quat, Vec3};
use tracing::{debug, info};

use crate::animation::AnimationEngine;
use crate::carousel::{Board, BoardContent, CarouselModel};
use crate::config::Config;
use crate::error::Result;
use crate::gaze::{GazeController, GazeSettings, StepOutcome};
use crate::scene::{CameraRig, NodeId, PostEffect, RenderMask, Renderable, SceneGraph};

#[derive(Debug)]
pub struct Gallery {
    scene: SceneGraph,
    rig: CameraRig,
    controller: GazeController,
    engine: AnimationEngine,
    frame: u64,
}

impl Gallery {
    /// Build the gallery scene from configuration.
    pub fn build(config: &Config) -> Result<Self> {
        let camera = &config.camera;
        let carousel_cfg = &config.carousel;

        let mut scene = SceneGraph::new();
        let mut rig = CameraRig::new();
        let [r, g, b, a] = camera.background;
        rig.set_background_color(r, g, b, a);
        rig.owner.set_position(0.0, 0.0, 0.0);

        // Per-eye backdrops
        for (name, texture, mask) in [
            ("left_screen", &camera.left_screen, RenderMask::LEFT),
            ("right_screen", &camera.right_screen, RenderMask::RIGHT),
        ] {
            let node = scene.add_renderable(
                name,
                Renderable::Mesh {
                    mesh: camera.screen_mesh.clone(),
                    texture: texture.clone(),
                },
            );
            let screen = scene.get_mut(node)?;
            let s = camera.screen_scale;
            screen.transform.set_scale(s, s, s);
            screen.render_mask = mask;
        }

        let count = carousel_cfg.board_count();
        let mut contents: Vec<BoardContent> = carousel_cfg
            .photos
            .iter()
            .map(|texture| BoardContent::Photo {
                texture: texture.clone(),
            })
            .collect();
        if let Some(source) = carousel_cfg.video_source() {
            contents.push(BoardContent::Video {
                source: source.to_string(),
            });
        }

        let parent = scene.add_node("board_parent");
        let mut boards = Vec::with_capacity(count);
        for (index, content) in contents.into_iter().enumerate() {
            let (width, height) = (carousel_cfg.board_width, carousel_cfg.board_height);
            let renderable = match &content {
                BoardContent::Photo { texture } => Renderable::Quad {
                    width,
                    height,
                    texture: texture.clone(),
                },
                BoardContent::Video { source } => Renderable::Video {
                    width,
                    height,
                    source: source.clone(),
                },
            };
            let node = scene.add_renderable(format!("board_{}", index), renderable);
            let board = Board::new(node, content, index, count);

            let transform = scene.transform_mut(node)?;
            transform.set_position(0.0, 0.0, -carousel_cfg.radius);
            transform.rotate_by_axis_with_pivot(board.degree, Vec3::Y, Vec3::ZERO);
            scene.add_child(parent, node)?;

            debug!(
                "Board {} ({}) at {:.1} degrees",
                index,
                board.content.asset(),
                board.degree
            );
            boards.push(board);
        }

        scene
            .transform_mut(parent)?
            .rotate_by_axis_with_pivot(carousel_cfg.initial_yaw_deg, Vec3::Y, Vec3::ZERO);

        let carousel = CarouselModel::new(parent, boards)?;
        let s = carousel_cfg.selected_scale;
        scene
            .transform_mut(carousel.selected_board().node)?
            .set_scale(s, s, 0.0);

        if camera.sepia {
            rig.add_post_effect(PostEffect::sepia());
        }

        info!(
            "Gallery built: {} boards, {:.1} degrees per slot",
            carousel.len(),
            carousel.step_degrees()
        );

        Ok(Self {
            scene,
            rig,
            controller: GazeController::new(carousel, GazeSettings::from(config)),
            engine: AnimationEngine::new(config.animation.easing),
            frame: 0,
        })
    }

    /// Feed the latest head orientation from tracking.
    pub fn set_head_orientation(&mut self, orientation: Quat) {
        self.rig.set_head_orientation(orientation);
    }

    /// Per-frame update: run the gaze controller, then animate by `dt` seconds.
    pub fn on_step(&mut self, dt: f32) -> StepOutcome {
        let look_at_y = self.rig.look_at().y;
        let outcome = self.controller.step(look_at_y, &mut self.engine);
        self.engine.tick(dt, &mut self.scene);
        self.frame += 1;
        outcome
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn controller(&self) -> &GazeController {
        &self.controller
    }

    pub fn engine(&self) -> &AnimationEngine {
        &self.engine
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Node of the board that is currently highlighted.
    pub fn selected_node(&self) -> NodeId {
        self.controller.carousel().selected_board().node
    }
}
