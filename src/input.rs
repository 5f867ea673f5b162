//! Keyboard-to-control mapping, drained once per frame.
//!
//! Events are queued by whatever polls the window and applied in order at the
//! start of the next frame, followed by the held-key controls and a single
//! physics step.

use std::collections::VecDeque;

use log::debug;

use crate::core::Pose;
use crate::dynamics::Vehicle;

/// Logical keys the driver reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Accelerate,
    Brake,
    SteerLeft,
    SteerRight,
    ToggleDebug,
    ToggleConsole,
    Quit,
}

impl Key {
    fn is_driving(self) -> bool {
        matches!(
            self,
            Self::Accelerate | Self::Brake | Self::SteerLeft | Self::SteerRight
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(Key),
    Released(Key),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct HeldKeys {
    brake: bool,
    left: bool,
    right: bool,
}

/// Per-frame input state machine feeding a [`Vehicle`].
///
/// The debug overlay starts visible.
#[derive(Debug, Clone)]
pub struct FrameDriver {
    queue: VecDeque<InputEvent>,
    held: HeldKeys,
    console_open: bool,
    debug_visible: bool,
    quit_requested: bool,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self {
            queue: VecDeque::new(),
            held: HeldKeys::default(),
            console_open: false,
            debug_visible: true,
            quit_requested: false,
        }
    }
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn console_open(&self) -> bool {
        self.console_open
    }

    pub fn debug_visible(&self) -> bool {
        self.debug_visible
    }

    pub fn set_debug_visible(&mut self, visible: bool) {
        self.debug_visible = visible;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Drains queued events, applies held-key controls, and steps once.
    pub fn drive_frame(&mut self, vehicle: &mut Vehicle) -> Pose {
        while let Some(event) = self.queue.pop_front() {
            self.handle_event(event, vehicle);
        }

        if !self.console_open {
            match (self.held.left, self.held.right) {
                (false, false) => vehicle.release_steering(),
                (left, right) => {
                    if left {
                        vehicle.steer_left();
                    }
                    if right {
                        vehicle.steer_right();
                    }
                }
            }
            if self.held.brake {
                vehicle.brake();
            }
        } else {
            vehicle.release_steering();
        }

        vehicle.step()
    }

    fn handle_event(&mut self, event: InputEvent, vehicle: &mut Vehicle) {
        match event {
            InputEvent::Pressed(Key::ToggleConsole) => {
                self.console_open = !self.console_open;
                debug!("console {}", if self.console_open { "opened" } else { "closed" });
                if self.console_open {
                    self.release_driving_keys(vehicle);
                }
            }
            InputEvent::Pressed(Key::ToggleDebug) => self.debug_visible = !self.debug_visible,
            InputEvent::Pressed(Key::Quit) => self.quit_requested = true,
            InputEvent::Pressed(key) | InputEvent::Released(key)
                if self.console_open && key.is_driving() => {}
            InputEvent::Pressed(key) => self.press(key, vehicle),
            InputEvent::Released(key) => self.release(key, vehicle),
        }
    }

    fn press(&mut self, key: Key, vehicle: &mut Vehicle) {
        match key {
            Key::Accelerate => vehicle.accelerate(),
            Key::Brake => self.held.brake = true,
            Key::SteerLeft => self.held.left = true,
            Key::SteerRight => self.held.right = true,
            _ => {}
        }
    }

    fn release(&mut self, key: Key, vehicle: &mut Vehicle) {
        match key {
            Key::Accelerate => vehicle.decelerate_frictionally(),
            Key::Brake => {
                self.held.brake = false;
                vehicle.decelerate_frictionally();
            }
            Key::SteerLeft => self.held.left = false,
            Key::SteerRight => self.held.right = false,
            _ => {}
        }
    }

    fn release_driving_keys(&mut self, vehicle: &mut Vehicle) {
        self.held = HeldKeys::default();
        vehicle.decelerate_frictionally();
    }
}
