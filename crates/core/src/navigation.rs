//! Navigation controller for a rendered deck.
//!
//! The document's embedded script runs this machine in the browser; this
//! module is the reference implementation it is generated against. State
//! changes are pure: `(state, event) -> (state, effects)`. Effects describe
//! what the host should do to the page and carry no DOM handles.

use serde::{Deserialize, Serialize};

/// Tunable thresholds for the controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationConfig {
    /// Fraction of the viewport a slide must cover before it becomes current.
    pub intersection_threshold: f64,
    /// Vertical touch distance, in logical pixels, that counts as a swipe.
    pub swipe_threshold: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            intersection_threshold: 0.5,
            swipe_threshold: 50.0,
        }
    }
}

impl NavigationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the intersection threshold, clamped to `[0, 1]`.
    pub fn with_intersection_threshold(mut self, threshold: f64) -> Self {
        if threshold.is_finite() {
            self.intersection_threshold = threshold.clamp(0.0, 1.0);
        }
        self
    }

    /// Set the swipe distance threshold. Negative values are treated as zero.
    pub fn with_swipe_threshold(mut self, threshold: f64) -> Self {
        if threshold.is_finite() {
            self.swipe_threshold = threshold.max(0.0);
        }
        self
    }
}

/// An explicit navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    First,
    Last,
    GoTo(usize),
}

impl Command {
    /// Name used for this command in the generated script's key map.
    pub fn script_name(&self) -> Option<&'static str> {
        match self {
            Command::Next => Some("next"),
            Command::Previous => Some("previous"),
            Command::First => Some("first"),
            Command::Last => Some("last"),
            Command::GoTo(_) => None,
        }
    }
}

/// Keyboard bindings, by DOM `KeyboardEvent.key` value.
pub const KEY_BINDINGS: &[(&str, Command)] = &[
    ("ArrowDown", Command::Next),
    ("ArrowRight", Command::Next),
    ("PageDown", Command::Next),
    (" ", Command::Next),
    ("ArrowUp", Command::Previous),
    ("ArrowLeft", Command::Previous),
    ("PageUp", Command::Previous),
    ("Home", Command::First),
    ("End", Command::Last),
];

/// Look up the command bound to a key.
pub fn command_for_key(key: &str) -> Option<Command> {
    KEY_BINDINGS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, command)| *command)
}

/// Input the controller reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    /// Slide `index` now covers `ratio` of the viewport (see [`viewport_fraction`]).
    Intersection { index: usize, ratio: f64 },
    /// A dot click or programmatic request.
    Command(Command),
    /// A key press, by DOM key name.
    Key(String),
    /// A finished touch gesture. Positive `delta_y` means the finger moved up.
    Swipe { delta_y: f64 },
}

/// What the host must do after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Scroll slide `index` into view.
    ScrollTo(usize),
    /// Set the progress bar width, in percent.
    SetProgress(f64),
    /// Set the counter to `current` of `total` (both one-based display values).
    SetCounter { current: usize, total: usize },
    /// Mark dot `index` active and every other dot inactive.
    ActivateDot(usize),
    /// Replay the entry animation on slide `index`.
    RestartAnimation(usize),
}

/// Which slide is current, out of how many.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub current: usize,
    pub count: usize,
}

impl NavigationState {
    /// Initial state for a document with `count` slides.
    pub fn new(count: usize) -> Self {
        Self { current: 0, count }
    }

    /// Progress bar width for the current slide, in percent.
    pub fn progress(&self) -> f64 {
        progress_percent(self.current, self.count)
    }

    /// Resolve a command to a target index, or `None` if it would leave the deck.
    pub fn target(&self, command: Command) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let target = match command {
            Command::Next => self.current.checked_add(1)?,
            Command::Previous => self.current.checked_sub(1)?,
            Command::First => 0,
            Command::Last => self.count - 1,
            Command::GoTo(index) => index,
        };
        (target < self.count).then_some(target)
    }
}

/// Fraction of the viewport a slide covers, in `[0, 1]`.
///
/// This is the `ratio` of an intersection event. It is measured against the
/// viewport rather than the slide, so a slide several viewports tall still
/// reaches 1 while it fills the screen.
pub fn viewport_fraction(visible_height: f64, viewport_height: f64) -> f64 {
    if viewport_height.is_nan() || viewport_height <= 0.0 || !visible_height.is_finite() {
        return 0.0;
    }
    (visible_height / viewport_height).clamp(0.0, 1.0)
}

/// Progress bar width for slide `index` of `count`, in percent.
pub fn progress_percent(index: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        (index + 1) as f64 / count as f64 * 100.0
    }
}

/// Indicator effects for making `index` current.
fn indicator_effects(index: usize, count: usize) -> Vec<Effect> {
    vec![
        Effect::SetProgress(progress_percent(index, count)),
        Effect::SetCounter {
            current: index + 1,
            total: count,
        },
        Effect::ActivateDot(index),
        Effect::RestartAnimation(index),
    ]
}

/// Apply one event to a state.
///
/// Out-of-range requests and sub-threshold signals return the state
/// unchanged with no effects. Repeating a signal for the current slide
/// repeats the same indicator effects, which are idempotent.
pub fn transition(
    state: NavigationState,
    event: &NavEvent,
    config: &NavigationConfig,
) -> (NavigationState, Vec<Effect>) {
    match event {
        NavEvent::Intersection { index, ratio } => {
            if *index >= state.count || *ratio < config.intersection_threshold {
                return (state, Vec::new());
            }
            let next = NavigationState {
                current: *index,
                ..state
            };
            (next, indicator_effects(*index, state.count))
        }
        NavEvent::Command(command) => apply_command(state, *command),
        NavEvent::Key(key) => match command_for_key(key) {
            Some(command) => apply_command(state, command),
            None => (state, Vec::new()),
        },
        NavEvent::Swipe { delta_y } => {
            if delta_y.abs() <= config.swipe_threshold {
                return (state, Vec::new());
            }
            let command = if *delta_y > 0.0 {
                Command::Next
            } else {
                Command::Previous
            };
            apply_command(state, command)
        }
    }
}

fn apply_command(state: NavigationState, command: Command) -> (NavigationState, Vec<Effect>) {
    let Some(target) = state.target(command) else {
        return (state, Vec::new());
    };

    let mut effects = vec![Effect::ScrollTo(target)];
    effects.extend(indicator_effects(target, state.count));
    (
        NavigationState {
            current: target,
            ..state
        },
        effects,
    )
}

/// Owns the navigation state for one document instance.
#[derive(Debug, Clone)]
pub struct NavigationController {
    state: NavigationState,
    config: NavigationConfig,
}

impl NavigationController {
    pub fn new(count: usize, config: NavigationConfig) -> Self {
        Self {
            state: NavigationState::new(count),
            config,
        }
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn current(&self) -> usize {
        self.state.current
    }

    /// Feed one event through the machine and return the effects to apply.
    pub fn handle(&mut self, event: &NavEvent) -> Vec<Effect> {
        let (next, effects) = transition(self.state, event, &self.config);
        if next != self.state {
            log::debug!(
                "navigation: {} -> {} of {}",
                self.state.current,
                next.current,
                next.count
            );
        }
        self.state = next;
        effects
    }
}
