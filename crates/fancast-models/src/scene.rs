//! Storyboard scenes.

use serde::{Deserialize, Serialize};

/// Number of scenes in every storyboard.
pub const STORYBOARD_SCENE_COUNT: usize = 5;

/// One unit of the storyboard script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// 1-based position in the narrative
    pub scene_number: u8,
    /// Image generation instruction for this scene
    pub prompt: String,
}

/// An ordered list of scenes as returned by the language model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storyboard {
    pub scenes: Vec<Scene>,
}

impl Storyboard {
    pub fn new(scenes: Vec<Scene>) -> Self {
        Self { scenes }
    }

    /// True when scenes are numbered 1..=N in order without gaps or repeats.
    pub fn is_sequentially_numbered(&self) -> bool {
        self.scenes
            .iter()
            .enumerate()
            .all(|(i, scene)| usize::from(scene.scene_number) == i + 1)
    }
}
