// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard routing depends on what is open. The lightbox listener only
//! exists while a closeup is shown, the contact listener only while the
//! modal is shown, and the page listener otherwise.

use super::message::{LightboxMessage, PageKey};
use super::Message;
use crate::config::PLAYBACK_TICK_MILLIS;
use crate::contact;
use crate::lightbox::LightboxKey;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, time, Event, Subscription};
use std::time::Duration;

/// What currently owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardOwner {
    Page,
    Lightbox,
    ContactModal,
}

pub fn create_keyboard_subscription(owner: KeyboardOwner) -> Subscription<Message> {
    match owner {
        KeyboardOwner::Page => event::listen_with(|event, status, _window| {
            if status == event::Status::Captured {
                return None;
            }
            pressed_key(&event)
                .and_then(|(key, modifiers)| page_key(&key, modifiers))
                .map(Message::PageKey)
        }),
        KeyboardOwner::Lightbox => event::listen_with(|event, _status, _window| {
            pressed_key(&event)
                .and_then(|(key, modifiers)| lightbox_key(&key, modifiers))
                .map(|key| Message::Lightbox(LightboxMessage::Key(key)))
        }),
        KeyboardOwner::ContactModal => event::listen_with(|event, _status, _window| {
            pressed_key(&event).and_then(|(key, _)| {
                matches!(key, Key::Named(Named::Escape))
                    .then_some(Message::Contact(contact::Message::EscapePressed))
            })
        }),
    }
}

/// Playback clock, only while a video plays.
pub fn create_tick_subscription(playing: bool) -> Subscription<Message> {
    if playing {
        time::every(Duration::from_millis(PLAYBACK_TICK_MILLIS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

fn pressed_key(event: &Event) -> Option<(Key, Modifiers)> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some((key.clone(), *modifiers))
        }
        _ => None,
    }
}

fn page_key(key: &Key, modifiers: Modifiers) -> Option<PageKey> {
    match key.as_ref() {
        Key::Named(Named::Tab) if modifiers.shift() => Some(PageKey::ShiftTab),
        Key::Named(Named::Tab) => Some(PageKey::Tab),
        Key::Named(Named::Enter | Named::Space) => Some(PageKey::Activate),
        _ => None,
    }
}

pub(crate) fn lightbox_key(key: &Key, modifiers: Modifiers) -> Option<LightboxKey> {
    match key.as_ref() {
        Key::Named(Named::ArrowLeft) => Some(LightboxKey::ArrowLeft),
        Key::Named(Named::ArrowRight) => Some(LightboxKey::ArrowRight),
        Key::Named(Named::Escape) => Some(LightboxKey::Escape),
        Key::Named(Named::Enter) => Some(LightboxKey::Enter),
        Key::Named(Named::Space) => Some(LightboxKey::Space),
        Key::Named(Named::Tab) if modifiers.shift() => Some(LightboxKey::ShiftTab),
        Key::Named(Named::Tab) => Some(LightboxKey::Tab),
        _ => None,
    }
}
