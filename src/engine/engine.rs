use super::{
    settings::Settings,
    view_state::{ViewState, VisibilityToggles},
    visualization::{frame_draw_calls, FrameContext, Layer, Visualization},
};
use crate::{
    renderer::{
        camera_transform::CameraTransform,
        pipeline::Rasterizer,
        surface::{present_frame, DisplaySurface},
    },
    user_interface::{
        camera::CameraState,
        event::{Event, InputSource, Key},
    },
};
use glam::DVec2;
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// Waiting for input
    Idle,
    /// Building and drawing a frame. Input is not processed until it finishes.
    Rendering,
}

/// What the loop should do after an input event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventResponse {
    Redraw,
    Ignore,
    Quit,
}

/// Owns the view state and a visualization, redrawing whenever input changes what is visible
pub struct Engine {
    view: ViewState,
    settings: Settings,
    visualization: Box<dyn Visualization>,
    transform: CameraTransform,
    rasterizer: Rasterizer,
    state: EngineState,
    frame_number: u64,
}

impl Engine {
    pub fn new(visualization: Box<dyn Visualization>, settings: Settings) -> Self {
        let toggles = VisibilityToggles::new(visualization.toggle_names());
        info!(
            "running '{}' with toggles {:?}",
            visualization.name(),
            visualization.toggle_names()
        );
        Self {
            view: ViewState::new(CameraState::default(), toggles),
            settings,
            visualization,
            transform: CameraTransform::new(),
            rasterizer: Rasterizer::default(),
            state: EngineState::Idle,
            frame_number: 0,
        }
    }

    /// Draws the first frame, then redraws after every event that changes the view until a
    /// quit event arrives.
    pub fn run<W: DisplaySurface + InputSource>(&mut self, window: &mut W) -> anyhow::Result<()> {
        self.render(window)?;
        loop {
            let event = window.wait_for_next_event()?;
            match self.handle_event(event) {
                EventResponse::Redraw => self.render(window)?,
                EventResponse::Ignore => (),
                EventResponse::Quit => {
                    info!("quit requested after {} frames", self.frame_number);
                    return Ok(());
                }
            }
        }
    }

    /// Applies an input event to the view state
    pub fn handle_event(&mut self, event: Event) -> EventResponse {
        match event {
            Event::Quit | Event::KeyPress(Key::Escape) => EventResponse::Quit,

            Event::KeyPress(Key::Digit(digit)) => self.toggle_for_digit(digit),

            Event::PointerDown => {
                self.view.pointer_tracking = true;
                EventResponse::Ignore
            }
            Event::PointerUp => {
                self.view.pointer_tracking = false;
                EventResponse::Ignore
            }
            Event::PointerMove { dx, dy } => {
                if !self.view.pointer_tracking {
                    return EventResponse::Ignore;
                }
                self.view
                    .camera
                    .rotate(DVec2::new(dx, dy), self.settings.look_sensitivity);
                EventResponse::Redraw
            }

            Event::ScrollWheel(amount) => {
                if self
                    .view
                    .camera
                    .scroll_zoom(amount, self.settings.scroll_zoom_sensitivity)
                {
                    EventResponse::Redraw
                } else {
                    EventResponse::Ignore
                }
            }

            Event::KeyPress(Key::Other) | Event::Other => EventResponse::Ignore,
        }
    }

    /// Builds the layers of the current frame without drawing them
    pub fn frame_layers(&mut self) -> Vec<Layer> {
        let mut context = FrameContext {
            camera: &self.view.camera,
            toggles: &self.view.toggles,
            transform: &mut self.transform,
            rasterizer: &self.rasterizer,
        };
        self.visualization.layers(&mut context)
    }

    /// Builds the current frame and draws it to `surface`
    pub fn render(&mut self, surface: &mut impl DisplaySurface) -> anyhow::Result<()> {
        debug_assert_eq!(self.state, EngineState::Idle, "render is not reentrant");
        self.state = EngineState::Rendering;

        let layers = self.frame_layers();
        let res = present_frame(
            surface,
            self.settings.background_color,
            frame_draw_calls(&layers),
        );

        self.state = EngineState::Idle;
        self.frame_number += 1;
        trace!(
            "frame {}: {} draw calls in {} layers",
            self.frame_number,
            frame_draw_calls(&layers).count(),
            layers.len()
        );
        res
    }

    // Getters

    #[cfg(test)]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[cfg(test)]
    pub fn state(&self) -> EngineState {
        self.state
    }

    #[cfg(test)]
    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    // Private

    /// Digit `n` flips toggle `n - 1`
    fn toggle_for_digit(&mut self, digit: u8) -> EventResponse {
        let Some(index) = (digit as usize).checked_sub(1) else {
            return EventResponse::Ignore;
        };
        match self.view.toggles.toggle(index) {
            Some(enabled) => {
                info!(
                    "layer '{}' {}",
                    self.view.toggles.name(index).unwrap_or("?"),
                    if enabled { "shown" } else { "hidden" }
                );
                EventResponse::Redraw
            }
            None => EventResponse::Ignore,
        }
    }
}
