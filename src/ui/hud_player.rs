//! UI domain: in-run player HUD.

use bevy::prelude::*;

use crate::core::RunConfig;
use crate::movement::{Player, PlayerBody};

pub(crate) const HUD_PADDING: f32 = 10.0;
const HUD_FONT_SIZE: f32 = 24.0;

/// Marker for every HUD node, for cleanup.
#[derive(Component)]
pub struct PlayerHudUI;

#[derive(Component)]
pub struct HealthText;

#[derive(Component)]
pub struct TimerText;

pub(crate) fn spawn_player_hud(mut commands: Commands) {
    commands.spawn((
        PlayerHudUI,
        HealthText,
        Text::new("Health: 100"),
        hud_font(),
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING),
            ..default()
        },
    ));

    commands.spawn((
        PlayerHudUI,
        TimerText,
        Text::new("Time: 0s"),
        hud_font(),
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING + 30.0),
            ..default()
        },
    ));

    commands.spawn((
        PlayerHudUI,
        Text::new("Press ESC to pause"),
        hud_font(),
        TextColor(Color::srgb(0.784, 0.784, 0.784)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_PADDING),
            bottom: Val::Px(HUD_PADDING),
            ..default()
        },
    ));
}

fn hud_font() -> TextFont {
    TextFont {
        font_size: HUD_FONT_SIZE,
        ..default()
    }
}

pub(crate) fn update_player_hud(
    run_config: Res<RunConfig>,
    player_query: Query<&PlayerBody, With<Player>>,
    mut health_text: Query<
        (&mut Text, &mut TextColor),
        (With<HealthText>, Without<TimerText>),
    >,
    mut timer_text: Query<&mut Text, (With<TimerText>, Without<HealthText>)>,
) {
    if let Ok(body) = player_query.single() {
        let health = body.0.health();
        for (mut text, mut color) in &mut health_text {
            **text = format!("Health: {}", health.current);
            color.0 = health_color(health.percent());
        }
    }

    for mut text in &mut timer_text {
        **text = format!("Time: {}s", run_config.elapsed_secs.floor() as u32);
    }
}

/// White at full health, shading through yellow to red as health drops.
pub(crate) fn health_color(percent: f32) -> Color {
    let percent = percent.clamp(0.0, 1.0);
    if percent > 0.5 {
        let t = (percent - 0.5) * 2.0;
        Color::srgb(1.0, 1.0, t)
    } else {
        let t = percent * 2.0;
        Color::srgb(1.0, t, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_color_shades_toward_red() {
        assert_eq!(health_color(1.0), Color::WHITE);
        assert_eq!(health_color(0.5), Color::srgb(1.0, 1.0, 0.0));
        assert_eq!(health_color(0.0), Color::srgb(1.0, 0.0, 0.0));
    }
}
