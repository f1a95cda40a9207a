//! Keyboard mapping and command delivery
//!
//! Physical keys become `PlayerCommand`s here. Anything unmapped is dropped.
//! `CommandLatch` lets an input thread hand the latest command to the
//! simulation, which takes it once at the start of each tick.

use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

use crate::sim::PlayerCommand;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    W,
    S,
    Other,
}

impl Key {
    /// Map a DOM-style key code (38/40 arrows, 87 W, 83 S)
    pub fn from_code(code: u32) -> Self {
        match code {
            38 => Key::ArrowUp,
            40 => Key::ArrowDown,
            87 => Key::W,
            83 => Key::S,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
}

/// Command for a key event, if any
///
/// Only the arrows start movement; releasing an arrow or W/S stops it.
pub fn command_for(event: KeyEvent) -> Option<PlayerCommand> {
    match event {
        KeyEvent::Pressed(Key::ArrowUp) => Some(PlayerCommand::BeginUp),
        KeyEvent::Pressed(Key::ArrowDown) => Some(PlayerCommand::BeginDown),
        KeyEvent::Released(Key::ArrowUp | Key::ArrowDown | Key::W | Key::S) => {
            Some(PlayerCommand::End)
        }
        _ => None,
    }
}

const EMPTY: u8 = 0;

fn encode(command: PlayerCommand) -> u8 {
    match command {
        PlayerCommand::BeginUp => 1,
        PlayerCommand::BeginDown => 2,
        PlayerCommand::End => 3,
    }
}

fn decode(raw: u8) -> Option<PlayerCommand> {
    match raw {
        1 => Some(PlayerCommand::BeginUp),
        2 => Some(PlayerCommand::BeginDown),
        3 => Some(PlayerCommand::End),
        _ => None,
    }
}

/// Single-slot, last-write-wins mailbox for the player command
#[derive(Debug, Default)]
pub struct CommandLatch {
    slot: AtomicU8,
}

impl CommandLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a command (input side). Replaces any command not yet taken.
    pub fn post(&self, command: PlayerCommand) {
        self.slot.store(encode(command), Ordering::Release);
    }

    /// Post the command for a key event; unmapped events are ignored
    pub fn post_key(&self, event: KeyEvent) {
        if let Some(command) = command_for(event) {
            self.post(command);
        }
    }

    /// Take the pending command (simulation side)
    pub fn take(&self) -> Option<PlayerCommand> {
        decode(self.slot.swap(EMPTY, Ordering::AcqRel))
    }
}
