//! Application state management for the terminal lemonade stand.
//!
//! This module contains the main application state and mode management
//! for the terminal user interface.

use crate::domain::{LemonadeState, ResourceBundle, StepController};
use rand::Rng;

/// Represents the current mode of the application.
///
/// The application can be in different modes that determine how user input
/// is interpreted and what UI elements are displayed.
#[derive(Debug)]
pub enum AppMode {
    /// Normal mode - taps advance the lemonade cycle
    Normal,
    /// Help screen is displayed
    Help,
}

/// Main application state containing the lemonade cycle and UI state.
///
/// This structure holds all the data needed to render the terminal UI
/// and react to user taps.
///
/// # Examples
///
/// ```
/// use lemonade::application::App;
/// use lemonade::domain::Step;
///
/// let app = App::default();
/// assert_eq!(app.state.step(), Step::SelectLemon);
/// assert_eq!(app.state.squeeze_count(), 0);
/// ```
#[derive(Debug)]
pub struct App {
    /// Current position in the lemonade cycle
    pub state: LemonadeState,
    /// Display resources keyed by step
    pub resources: ResourceBundle,
    /// Current application mode
    pub mode: AppMode,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Scroll position in help text
    pub help_scroll: usize,
}

impl Default for App {
    fn default() -> Self {
        Self {
            state: LemonadeState::default(),
            resources: ResourceBundle::default(),
            mode: AppMode::Normal,
            status_message: None,
            help_scroll: 0,
        }
    }
}

impl App {
    /// Registers a tap, advancing the lemonade cycle by one step.
    ///
    /// Uses the thread random generator for the squeeze-count draw.
    /// Any transient status message is cleared so the tap's effect is
    /// visible immediately.
    pub fn tap(&mut self) {
        self.tap_with(&mut rand::thread_rng());
    }

    /// Registers a tap using the provided generator.
    ///
    /// Behaves exactly like [`App::tap`]; split out so tests can drive
    /// the cycle with a seeded generator.
    pub fn tap_with(&mut self, rng: &mut impl Rng) {
        self.status_message = None;
        self.state = StepController::advance(self.state, rng);
    }

    /// Processes the result of loading a resource pack from disk.
    ///
    /// Installs the loaded bundle and reports where it came from, or keeps
    /// the built-in bundle and reports the failure. The application keeps
    /// running either way.
    ///
    /// # Arguments
    ///
    /// * `result` - Result of the load operation (bundle and path, or error message)
    pub fn set_resource_load_result(&mut self, result: Result<(ResourceBundle, String), String>) {
        match result {
            Ok((bundle, path)) => {
                self.resources = bundle;
                self.status_message = Some(format!("Loaded resources from {}", path));
            }
            Err(error) => {
                self.status_message =
                    Some(format!("Resource load failed: {} (using built-in set)", error));
            }
        }
    }
}
