// Copyright 2025 the Taproot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tour of tap unification: one recognizer, three input
//! channels, one gesture stream.
//!
//! A tiny host "document" is modeled as a parent table over integer node
//! keys. The demo drives a plain mouse tap, a touch tap followed by the
//! synthetic mouse pair browsers emit for it, and a keyboard activation of
//! a role-button element, printing every synthesized gesture.

use kurbo::Point;
use taproot_event::{Modifiers, Phase, PositionSnapshot, TapEvent};
use taproot_gesture::{
    CapabilityRegistry, ClickInput, EngineQuirks, KeyCode, KeyInput, MouseInput, Platform,
    TapRecognizer, TouchInput, TouchPoint,
};
use taproot_path::TargetPath;

/// Node keys of the demo document.
///
/// ```text
/// 0 document
/// └── 1 <main>
///     ├── 2 <button id="save">
///     └── 3 <div role="button" id="custom">
/// ```
const DOCUMENT: u32 = 0;
const MAIN: u32 = 1;
const SAVE_BUTTON: u32 = 2;
const CUSTOM_BUTTON: u32 = 3;

struct DemoDocument;

impl DemoDocument {
    fn parent_of(node: u32) -> Option<u32> {
        match node {
            MAIN => Some(DOCUMENT),
            SAVE_BUTTON | CUSTOM_BUTTON => Some(MAIN),
            _ => None,
        }
    }

    /// Composed path from `node` out to the document root.
    fn path_of(node: u32) -> TargetPath<u32> {
        let mut path = TargetPath::new();
        let mut cursor = Some(node);
        while let Some(node) = cursor {
            path.push(node);
            cursor = Self::parent_of(node);
        }
        path
    }
}

impl Platform<u32> for DemoDocument {
    fn matches(&self, node: &u32, selector: &str) -> bool {
        match selector {
            taproot_gesture::ROLE_BUTTON => *node == CUSTOM_BUTTON,
            taproot_gesture::NATIVELY_ACTIVATABLE => *node == SAVE_BUTTON,
            _ => false,
        }
    }

    fn is_element(&self, node: &u32) -> bool {
        *node != DOCUMENT
    }
}

fn name_of(node: u32) -> &'static str {
    match node {
        DOCUMENT => "#document",
        MAIN => "<main>",
        SAVE_BUTTON => "<button#save>",
        CUSTOM_BUTTON => "<div#custom role=button>",
        _ => "?",
    }
}

fn print_gesture(phase: Phase, ev: &TapEvent<u32>) {
    if phase == Phase::Target {
        println!("    {:?} on {}", ev.kind(), name_of(*ev.target()));
    }
}

fn at(x: f64, y: f64) -> PositionSnapshot {
    let point = Point::new(x, y);
    PositionSnapshot::new(point, point, point)
}

fn main() {
    let mut registry = CapabilityRegistry::new();
    let mut recognizer = TapRecognizer::install(&mut registry, DemoDocument, EngineQuirks::default());

    let mut sink = |phase: Phase, _node: &u32, ev: &mut TapEvent<u32>| print_gesture(phase, ev);

    println!("mouse press + release on {}:", name_of(SAVE_BUTTON));
    let path = DemoDocument::path_of(SAVE_BUTTON);
    let mut down = MouseInput::new(path.clone(), at(40.0, 12.0), Modifiers::empty());
    recognizer.on_mouse_down(&mut down, &mut sink);
    let mut up = MouseInput::new(path.clone(), at(41.0, 13.0), Modifiers::empty());
    recognizer.on_mouse_up(&mut up, &mut sink);

    println!("touch tap on {}, then the synthetic mouse pair:", name_of(SAVE_BUTTON));
    let touch = TouchPoint::new(1, at(40.0, 12.0));
    let mut start = TouchInput::new(path.clone(), [touch]);
    recognizer.on_touch_start(&mut start, &mut sink);
    let mut end = TouchInput::new(path.clone(), [touch]);
    recognizer.on_touch_end(&mut end, &mut sink);
    // The browser re-reports the same physical action through the mouse
    // channel; the recognizer swallows it.
    let mut down = MouseInput::new(path.clone(), at(40.0, 12.0), Modifiers::empty());
    recognizer.on_mouse_down(&mut down, &mut sink);
    let mut up = MouseInput::new(path, at(40.0, 12.0), Modifiers::empty());
    recognizer.on_mouse_up(&mut up, &mut sink);

    println!("keyup Enter on {}:", name_of(CUSTOM_BUTTON));
    let path = DemoDocument::path_of(CUSTOM_BUTTON);
    let mut key = KeyInput::new(path, KeyCode::Enter, Modifiers::empty());
    recognizer.on_key_up(&mut key, &mut sink);
    println!("    key default prevented: {}", key.default_prevented());

    println!("keyup Enter on {} (native activation):", name_of(SAVE_BUTTON));
    let path = DemoDocument::path_of(SAVE_BUTTON);
    let mut key = KeyInput::new(path.clone(), KeyCode::Enter, Modifiers::empty());
    recognizer.on_key_up(&mut key, &mut sink);
    // The host's native activation produces the zero-detail click itself.
    let mut click = ClickInput::new(path, 0, PositionSnapshot::ZERO, Modifiers::empty());
    recognizer.on_click(&mut click, &mut sink);

    println!("second installation against the same registry is inert:");
    let second = TapRecognizer::install(&mut registry, DemoDocument, EngineQuirks::default());
    println!("    granted: {:?}", second.enabled());
}
