use super::event::{Event, InputSource, Key};
use crate::{
    config,
    renderer::{color::Color, framebuffer::Framebuffer, surface::DisplaySurface},
};
use anyhow::Context;
use glam::DVec2;
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};
use minifb::{KeyRepeat, MouseButton, MouseMode, WindowOptions};
use std::{collections::VecDeque, thread, time::Duration};

/// Desktop window presenting a [`Framebuffer`] and turning mouse/keyboard state changes into
/// [`Event`]s.
pub struct MinifbWindow {
    window: minifb::Window,
    framebuffer: Framebuffer,
    pending_events: VecDeque<Event>,
    pointer: PointerTracker,
}

impl MinifbWindow {
    pub fn new(title: &str, size: [u32; 2]) -> anyhow::Result<Self> {
        let window = minifb::Window::new(
            title,
            size[0] as usize,
            size[1] as usize,
            WindowOptions::default(),
        )
        .context("creating window")?;
        info!("opened {}x{} window", size[0], size[1]);

        Ok(Self {
            window,
            framebuffer: Framebuffer::new(size),
            pending_events: VecDeque::new(),
            pointer: PointerTracker::default(),
        })
    }

    /// Polls the window and queues an event for everything that changed since the last poll
    fn poll_events(&mut self) {
        self.window.update();

        for key in self.window.get_keys_pressed(KeyRepeat::No) {
            self.pending_events.push_back(Event::KeyPress(key_from_minifb(key)));
        }

        let sample = PointerSample {
            left_down: self.window.get_mouse_down(MouseButton::Left),
            other_down: self.window.get_mouse_down(MouseButton::Right)
                || self.window.get_mouse_down(MouseButton::Middle),
            cursor_position: self.window.get_mouse_pos(MouseMode::Pass),
            scroll_y: self.window.get_scroll_wheel().map(|(_, y)| y),
        };
        self.pointer.update(sample, &mut self.pending_events);
    }
}

// ~~ Pointer Tracking ~~

/// Mouse state read from the window on one poll
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct PointerSample {
    left_down: bool,
    /// Right or middle button held
    other_down: bool,
    cursor_position: Option<(f32, f32)>,
    scroll_y: Option<f32>,
}

/// Turns successive [`PointerSample`]s into button, motion and scroll events
#[derive(Clone, Copy, Debug, Default)]
struct PointerTracker {
    left_down: bool,
    other_down: bool,
    last_cursor_position: Option<(f32, f32)>,
}

impl PointerTracker {
    fn update(&mut self, sample: PointerSample, events: &mut VecDeque<Event>) {
        let pressed = sample.left_down && !self.left_down;
        if sample.left_down != self.left_down {
            self.left_down = sample.left_down;
            events.push_back(if pressed {
                Event::PointerDown
            } else {
                Event::PointerUp
            });
        }

        if sample.other_down && !self.other_down {
            events.push_back(Event::Other);
        }
        self.other_down = sample.other_down;

        // motion from before the press isn't part of the drag
        if let (Some(last), Some(current), false) =
            (self.last_cursor_position, sample.cursor_position, pressed)
        {
            if last != current {
                let delta = DVec2::new(current.0 as f64, current.1 as f64)
                    - DVec2::new(last.0 as f64, last.1 as f64);
                events.push_back(Event::PointerMove {
                    dx: delta.x,
                    dy: delta.y,
                });
            }
        }
        if sample.cursor_position.is_some() {
            self.last_cursor_position = sample.cursor_position;
        }

        if let Some(scroll_y) = sample.scroll_y {
            if scroll_y != 0. {
                // platforms disagree on units so count clicks
                events.push_back(Event::ScrollWheel(scroll_y.signum() as f64));
            }
        }
    }
}

impl InputSource for MinifbWindow {
    fn wait_for_next_event(&mut self) -> anyhow::Result<Event> {
        let poll_interval = Duration::from_micros(1_000_000 / config::INPUT_POLL_HZ);
        loop {
            if let Some(event) = self.pending_events.pop_front() {
                return Ok(event);
            }
            if !self.window.is_open() {
                return Ok(Event::Quit);
            }
            self.poll_events();
            if self.pending_events.is_empty() {
                thread::sleep(poll_interval);
            }
        }
    }
}

impl DisplaySurface for MinifbWindow {
    fn fill_background(&mut self, color: Color) {
        self.framebuffer.fill_background(color);
    }

    fn draw_filled_polygon(&mut self, points: &[DVec2], color: Color) {
        self.framebuffer.draw_filled_polygon(points, color);
    }

    fn present(&mut self) -> anyhow::Result<()> {
        self.framebuffer.present()?;
        let [width, height] = self.framebuffer.size();
        self.window
            .update_with_buffer(self.framebuffer.presented(), width as usize, height as usize)
            .context("presenting framebuffer to window")
    }
}

fn key_from_minifb(key: minifb::Key) -> Key {
    use minifb::Key as K;
    match key {
        K::Key0 | K::NumPad0 => Key::Digit(0),
        K::Key1 | K::NumPad1 => Key::Digit(1),
        K::Key2 | K::NumPad2 => Key::Digit(2),
        K::Key3 | K::NumPad3 => Key::Digit(3),
        K::Key4 | K::NumPad4 => Key::Digit(4),
        K::Key5 | K::NumPad5 => Key::Digit(5),
        K::Key6 | K::NumPad6 => Key::Digit(6),
        K::Key7 | K::NumPad7 => Key::Digit(7),
        K::Key8 | K::NumPad8 => Key::Digit(8),
        K::Key9 | K::NumPad9 => Key::Digit(9),
        K::Escape => Key::Escape,
        _ => Key::Other,
    }
}
