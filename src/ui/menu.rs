//! UI domain: keyboard-driven menus shared by the title screen and pause overlay.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{GameState, RunConfig};

const OPTION_FONT_SIZE: f32 = 32.0;
const OPTION_SELECTED: Color = Color::WHITE;
const OPTION_IDLE: Color = Color::srgb(0.59, 0.59, 0.59);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    StartGame,
    Settings,
    Resume,
    MainMenu,
    Quit,
}

impl MenuOption {
    pub fn label(self) -> &'static str {
        match self {
            MenuOption::StartGame => "Start Game",
            MenuOption::Settings => "Settings",
            MenuOption::Resume => "Resume",
            MenuOption::MainMenu => "Main Menu",
            MenuOption::Quit => "Quit",
        }
    }
}

pub const MAIN_MENU_OPTIONS: [MenuOption; 3] =
    [MenuOption::StartGame, MenuOption::Settings, MenuOption::Quit];

pub const PAUSE_MENU_OPTIONS: [MenuOption; 3] =
    [MenuOption::Resume, MenuOption::MainMenu, MenuOption::Quit];

/// Selection over a fixed option list. Moving past either end wraps around.
#[derive(Component, Debug, Clone)]
pub struct MenuCursor {
    options: Vec<MenuOption>,
    selected: usize,
}

impl MenuCursor {
    pub fn new(options: &[MenuOption]) -> Self {
        Self {
            options: options.to_vec(),
            selected: 0,
        }
    }

    pub fn up(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = (self.selected + self.options.len() - 1) % self.options.len();
    }

    pub fn down(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.options.len();
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn current(&self) -> Option<MenuOption> {
        self.options.get(self.selected).copied()
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }
}

/// Root of the title screen.
#[derive(Component)]
pub struct MainMenuUI;

/// Root of the pause overlay.
#[derive(Component)]
pub struct PauseMenuUI;

/// One option row, by index into its menu's cursor.
#[derive(Component, Debug)]
pub struct MenuItem(pub usize);

pub(crate) fn spawn_main_menu(mut commands: Commands) {
    spawn_menu(
        &mut commands,
        MainMenuUI,
        &MAIN_MENU_OPTIONS,
        Color::BLACK,
        200.0,
        60.0,
    );
}

pub(crate) fn spawn_pause_menu(mut commands: Commands) {
    spawn_menu(
        &mut commands,
        PauseMenuUI,
        &PAUSE_MENU_OPTIONS,
        Color::srgba(0.0, 0.0, 0.0, 0.7),
        220.0,
        50.0,
    );
}

fn spawn_menu(
    commands: &mut Commands,
    marker: impl Component,
    options: &[MenuOption],
    background: Color,
    top: f32,
    spacing: f32,
) {
    commands
        .spawn((
            marker,
            MenuCursor::new(options),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                padding: UiRect::top(Val::Px(top)),
                row_gap: Val::Px(spacing - OPTION_FONT_SIZE),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(background),
            ZIndex(50),
        ))
        .with_children(|parent| {
            for (index, option) in options.iter().enumerate() {
                parent.spawn((
                    MenuItem(index),
                    Text::new(option.label()),
                    TextFont {
                        font_size: OPTION_FONT_SIZE,
                        ..default()
                    },
                    TextColor(if index == 0 {
                        OPTION_SELECTED
                    } else {
                        OPTION_IDLE
                    }),
                ));
            }
        });
}

/// Up/down moves the cursor, Enter activates the highlighted option.
pub(crate) fn navigate_menu(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut menus: Query<&mut MenuCursor>,
    mut run_config: ResMut<RunConfig>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    for mut cursor in &mut menus {
        if keyboard.just_pressed(KeyCode::ArrowUp) {
            cursor.up();
        }
        if keyboard.just_pressed(KeyCode::ArrowDown) {
            cursor.down();
        }

        if !(keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::NumpadEnter)) {
            continue;
        }

        match cursor.current() {
            Some(MenuOption::StartGame) => {
                run_config.request_restart();
                next_state.set(GameState::Playing);
                info!("Starting new run");
            }
            Some(MenuOption::Settings) => {
                info!("Settings menu is not available yet");
            }
            Some(MenuOption::Resume) => {
                next_state.set(GameState::Playing);
                info!("Resuming run");
            }
            Some(MenuOption::MainMenu) => {
                next_state.set(GameState::MainMenu);
                info!("Returning to main menu");
            }
            Some(MenuOption::Quit) => {
                info!("Quit selected");
                exit.write(AppExit::Success);
            }
            None => {}
        }
    }
}

pub(crate) fn refresh_menu_highlight(
    menus: Query<(&MenuCursor, &Children), Changed<MenuCursor>>,
    mut items: Query<(&MenuItem, &mut TextColor)>,
) {
    for (cursor, children) in &menus {
        for child in children.iter() {
            if let Ok((item, mut color)) = items.get_mut(child) {
                color.0 = if item.0 == cursor.selected_index() {
                    OPTION_SELECTED
                } else {
                    OPTION_IDLE
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_wraps_both_ways() {
        let mut cursor = MenuCursor::new(&MAIN_MENU_OPTIONS);
        assert_eq!(cursor.current(), Some(MenuOption::StartGame));

        cursor.up();
        assert_eq!(cursor.current(), Some(MenuOption::Quit));

        cursor.down();
        cursor.down();
        assert_eq!(cursor.current(), Some(MenuOption::Settings));

        cursor.down();
        cursor.down();
        assert_eq!(cursor.selected_index(), 0);
    }

    #[test]
    fn test_pause_menu_order() {
        let cursor = MenuCursor::new(&PAUSE_MENU_OPTIONS);
        let labels: Vec<_> = cursor.options().iter().map(|o| o.label()).collect();
        assert_eq!(labels, ["Resume", "Main Menu", "Quit"]);
    }

    #[test]
    fn test_empty_cursor_is_inert() {
        let mut cursor = MenuCursor::new(&[]);
        cursor.up();
        cursor.down();
        assert_eq!(cursor.current(), None);
    }
}
