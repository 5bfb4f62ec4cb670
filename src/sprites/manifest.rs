//! Player sprite manifest loading and placeholder frames.
//!
//! The manifest JSON maps each visual state name to an ordered list of image
//! paths relative to `assets/`. States without frames fall back to a solid
//! coloured rectangle.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::content::ContentLoadError;
use crate::sprites::{AnimationSet, VisualState};

pub const PLAYER_MANIFEST_PATH: &str = "assets/sprites/player/manifest.json";

/// One animation frame as handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum SpriteFrame {
    Image(Handle<Image>),
    Placeholder(Color),
}

/// Raw manifest JSON structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerSpriteManifest {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub states: HashMap<String, Vec<String>>,
}

impl PlayerSpriteManifest {
    pub fn parse(file: &str, contents: &str) -> Result<Self, ContentLoadError> {
        serde_json::from_str(contents).map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ContentLoadError> {
        let file_name = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
            file: file_name.clone(),
            message: format!("IO error: {}", e),
        })?;
        Self::parse(&file_name, &contents)
    }

    pub fn frame_paths(&self, state: VisualState) -> &[String] {
        self.states
            .get(state.name())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Solid colour shown for a state that has no art.
pub fn placeholder_color(state: VisualState) -> Color {
    match state {
        VisualState::Idle => Color::srgb(0.0, 1.0, 0.0),
        VisualState::Run => Color::srgb(0.0, 0.784, 0.0),
        VisualState::Jump => Color::srgb(1.0, 1.0, 0.0),
        VisualState::Fall => Color::srgb(1.0, 0.647, 0.0),
        VisualState::WallSlide => Color::srgb(0.0, 0.392, 1.0),
        VisualState::Roll => Color::srgb(1.0, 0.0, 1.0),
        VisualState::Climb => Color::srgb(0.392, 0.392, 1.0),
    }
}

/// Builds the per-state frame lists, loading images through `load`.
pub fn build_player_frames(
    manifest: &PlayerSpriteManifest,
    mut load: impl FnMut(&str) -> Handle<Image>,
) -> AnimationSet<SpriteFrame> {
    AnimationSet::from_fn(|state| {
        let paths = manifest.frame_paths(state);
        if paths.is_empty() {
            vec![SpriteFrame::Placeholder(placeholder_color(state))]
        } else {
            paths
                .iter()
                .map(|path| SpriteFrame::Image(load(path)))
                .collect()
        }
    })
}

/// Animation frames shared by every player spawned this session.
#[derive(Resource, Clone)]
pub struct PlayerFrames(pub AnimationSet<SpriteFrame>);

pub(crate) fn load_player_frames(mut commands: Commands, asset_server: Res<AssetServer>) {
    let manifest = match PlayerSpriteManifest::load_from_file(Path::new(PLAYER_MANIFEST_PATH)) {
        Ok(manifest) => {
            info!(
                "Loaded player sprite manifest v{} with {} states",
                manifest.version,
                manifest.states.len()
            );
            manifest
        }
        Err(e) => {
            warn!("{}; using placeholder player frames", e);
            PlayerSpriteManifest::default()
        }
    };

    let frames = build_player_frames(&manifest, |path| asset_server.load(path.to_string()));
    commands.insert_resource(PlayerFrames(frames));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_parses_state_lists() {
        let manifest = PlayerSpriteManifest::parse(
            "manifest.json",
            r#"{ "version": 2, "states": { "run": ["run/0.png", "run/1.png"] } }"#,
        )
        .unwrap();

        assert_eq!(manifest.version, 2);
        assert_eq!(manifest.frame_paths(VisualState::Run).len(), 2);
        assert!(manifest.frame_paths(VisualState::Idle).is_empty());
    }

    #[test]
    fn test_invalid_manifest_reports_file() {
        let err = PlayerSpriteManifest::parse("broken.json", "{ nope").unwrap_err();
        assert_eq!(err.file, "broken.json");
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_missing_states_fall_back_to_placeholders() {
        let mut manifest = PlayerSpriteManifest::default();
        manifest
            .states
            .insert("roll".to_string(), vec!["roll/0.png".to_string()]);

        let mut loaded = Vec::new();
        let frames = build_player_frames(&manifest, |path| {
            loaded.push(path.to_string());
            Handle::default()
        });

        assert_eq!(loaded, vec!["roll/0.png".to_string()]);
        assert_eq!(
            frames.get(VisualState::Roll).current_frame(),
            Some(&SpriteFrame::Image(Handle::default()))
        );
        assert_eq!(
            frames.get(VisualState::Idle).current_frame(),
            Some(&SpriteFrame::Placeholder(placeholder_color(VisualState::Idle)))
        );
    }

    #[test]
    fn test_missing_manifest_file_is_an_io_error() {
        let err = PlayerSpriteManifest::load_from_file(Path::new("does/not/exist.json"))
            .unwrap_err();
        assert!(err.message.starts_with("IO error"));
    }
}
