//! Host seam and frame driver
//!
//! The host owns the display surface. Each frame it hands over its current
//! extents, draws whatever the simulation shows it, and schedules the next
//! frame. `FrameLoop` sequences one frame: tick fully, then render, then ask
//! for another frame. Nothing here blocks or spawns threads.

use crate::error::PlacementError;
use crate::settings::Settings;
use crate::sim::{Body, Simulation};

/// A display surface that can show balls
pub trait Host {
    /// Current (width, height). Zero until the surface has been laid out.
    fn viewport_extents(&self) -> (f64, f64);
    /// Draw one ball. Called once per ball per frame, in sequence order.
    fn render(&mut self, body: &Body);
    /// Schedule another call to [`FrameLoop::frame`]
    fn request_next_frame(&mut self);
}

/// What happened during one frame
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// Extents not known yet; nothing simulated
    AwaitingViewport,
    /// Ticked and rendered this many balls
    Rendered(usize),
    /// Initialization failed; nothing drawn, no further frames requested
    Failed(PlacementError),
}

/// Drives a `Simulation` against a `Host`, one frame per call
#[derive(Debug)]
pub struct FrameLoop {
    settings: Settings,
    sim: Option<Simulation>,
    failure: Option<PlacementError>,
    frames: u64,
}

impl FrameLoop {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            sim: None,
            failure: None,
            frames: 0,
        }
    }

    /// Start from an already built simulation
    pub fn with_simulation(settings: Settings, sim: Simulation) -> Self {
        Self {
            settings,
            sim: Some(sim),
            failure: None,
            frames: 0,
        }
    }

    pub fn simulation(&self) -> Option<&Simulation> {
        self.sim.as_ref()
    }

    pub fn failure(&self) -> Option<&PlacementError> {
        self.failure.as_ref()
    }

    /// Frames that ticked and rendered
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the settings and start over on the next frame.
    /// This is how a host retries after a failed initialization.
    pub fn reconfigure(&mut self, settings: Settings) {
        self.settings = settings;
        self.sim = None;
        self.failure = None;
        self.frames = 0;
    }

    /// Run one frame: initialize if needed, tick, render, request the next frame
    pub fn frame<H: Host + ?Sized>(&mut self, host: &mut H) -> FrameOutcome {
        if let Some(err) = &self.failure {
            return FrameOutcome::Failed(err.clone());
        }

        let (width, height) = host.viewport_extents();
        if !(width > 0.0 && height > 0.0) {
            log::warn!("Frame before viewport is laid out ({}x{}), waiting", width, height);
            host.request_next_frame();
            return FrameOutcome::AwaitingViewport;
        }

        let sim = match self.sim.take() {
            Some(mut sim) => {
                sim.set_bounds(width, height);
                sim
            }
            None => match Simulation::new(&self.settings, width, height) {
                Ok(sim) => sim,
                Err(err) => {
                    log::error!("Could not place balls: {}", err);
                    self.failure = Some(err.clone());
                    return FrameOutcome::Failed(err);
                }
            },
        };
        let sim = self.sim.insert(sim);

        sim.tick();
        for body in sim.iter() {
            host.render(body);
        }
        self.frames += 1;

        host.request_next_frame();
        FrameOutcome::Rendered(sim.len())
    }
}

/// Fixed-size host without a display. Keeps the last frame it was shown.
#[derive(Debug, Clone, Default)]
pub struct HeadlessHost {
    pub width: f64,
    pub height: f64,
    /// Balls rendered in the current frame
    pub last_frame: Vec<Body>,
    pub renders: u64,
    pub frame_requests: u64,
    /// Set by `request_next_frame`, cleared by `take_frame_request`
    pending: bool,
    /// A frame is being drawn; the next request closes it
    drawing: bool,
}

impl HeadlessHost {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Consume a pending frame request
    pub fn take_frame_request(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// Drive `frames` frames for as long as they keep being requested.
    /// Returns the number of frames that rendered.
    pub fn run(&mut self, frame_loop: &mut FrameLoop, frames: u64) -> u64 {
        let mut rendered = 0;
        self.pending = true;
        for _ in 0..frames {
            if !self.take_frame_request() {
                break;
            }
            if let FrameOutcome::Rendered(_) = frame_loop.frame(self) {
                rendered += 1;
            }
        }
        rendered
    }
}

impl Host for HeadlessHost {
    fn viewport_extents(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn render(&mut self, body: &Body) {
        if !self.drawing {
            self.last_frame.clear();
            self.drawing = true;
        }
        self.renders += 1;
        self.last_frame.push(body.clone());
    }

    fn request_next_frame(&mut self) {
        self.frame_requests += 1;
        self.pending = true;
        self.drawing = false;
    }
}
