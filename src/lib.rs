mod app;
mod common;
pub mod config;
mod default;
mod logging;
pub mod seats;
pub mod tui;

pub use app::App;
pub use common::{PROJECT_NAME, PROJECT_VERSION};
pub use config::{Config, show_configuration};
pub use logging::Logging;

/// Menu option for the interactive menus
pub struct MenuOption<A> {
    pub label: &'static str,
    pub action: A,
    /// Number the user types to pick the option.
    pub key: i64,
}

/// Actions of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ShowLayout,
    CreateReservation,
    ReadReservation,
    UpdateReservation,
    CancelReservation,
    Settings,
}

/// Actions of the settings menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    Exit,
    EditDimensions,
    EditHudLength,
    Return,
}

/// Returns the main menu options in display order
#[must_use]
pub fn get_menu_options() -> Vec<MenuOption<MenuAction>> {
    vec![
        MenuOption {
            label: "Display Seat Layout",
            action: MenuAction::ShowLayout,
            key: 1,
        },
        MenuOption {
            label: "Create Seat Reservation",
            action: MenuAction::CreateReservation,
            key: 2,
        },
        MenuOption {
            label: "Read/Display Seat Reservation",
            action: MenuAction::ReadReservation,
            key: 3,
        },
        MenuOption {
            label: "Update Seat Reservation",
            action: MenuAction::UpdateReservation,
            key: 4,
        },
        MenuOption {
            label: "Delete/Cancel Seat Reservation",
            action: MenuAction::CancelReservation,
            key: 5,
        },
        MenuOption {
            label: "Settings (-> Exit)",
            action: MenuAction::Settings,
            key: 0,
        },
    ]
}

/// Returns the settings menu options in display order
#[must_use]
pub fn get_settings_options() -> Vec<MenuOption<SettingsAction>> {
    vec![
        MenuOption {
            label: "Exit",
            action: SettingsAction::Exit,
            key: 1,
        },
        MenuOption {
            label: "Edit Seat Layout Dimensions",
            action: SettingsAction::EditDimensions,
            key: 2,
        },
        MenuOption {
            label: "Edit HUD Length",
            action: SettingsAction::EditHudLength,
            key: 3,
        },
        MenuOption {
            label: "Return to Main Menu",
            action: SettingsAction::Return,
            key: 0,
        },
    ]
}
