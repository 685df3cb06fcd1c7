use anyhow::Result;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use trifan_engine::core::{App, AppControl, FrameCtx};
use trifan_engine::device::GpuInit;
use trifan_engine::geometry::{AnnulusParams, CircleParams, Shape, MAX_SEGMENTS, MIN_SEGMENTS};
use trifan_engine::logging::{init_logging, LoggingConfig};
use trifan_engine::paint::Color;
use trifan_engine::render::{Context, ContextConfig};
use trifan_engine::window::{Runtime, RuntimeConfig};

const DEFAULT_SEGMENTS: u32 = 32;

fn circle(segment: u32) -> Shape {
    Shape::Circle(CircleParams::new(0.5, segment))
}

fn half_annulus(segment: u32) -> Shape {
    Shape::Annulus(AnnulusParams {
        outer_radius: 0.8,
        inner_radius: 0.5,
        segment,
        start_angle: 0.0,
        end_angle: 180.0,
        color: Color::rgb(1.0, 0.4, 0.1),
    })
}

fn full_annulus(segment: u32) -> Shape {
    Shape::Annulus(AnnulusParams::full(0.8, 0.5, segment, Color::rgb(0.2, 0.8, 0.6)))
}

/// Keyboard-driven shape switcher.
struct Studio {
    config: ContextConfig,
    context: Option<Context>,
    segment: u32,
    pending: Option<Shape>,
}

impl Studio {
    fn new(config: ContextConfig) -> Self {
        Self {
            config,
            context: None,
            segment: DEFAULT_SEGMENTS,
            pending: None,
        }
    }

    fn current_shape(&self) -> Shape {
        self.pending
            .or_else(|| self.context.as_ref().map(|c| *c.shape()))
            .unwrap_or(Shape::Quad)
    }

    fn on_key(&mut self, code: KeyCode) -> AppControl {
        let segment = self.segment;
        match code {
            KeyCode::Escape => return AppControl::Exit,
            KeyCode::Digit1 => self.pending = Some(Shape::Quad),
            KeyCode::Digit2 => self.pending = Some(circle(segment)),
            KeyCode::Digit3 => self.pending = Some(half_annulus(segment)),
            KeyCode::Digit4 => self.pending = Some(full_annulus(segment)),
            KeyCode::ArrowUp => self.set_segment(segment.saturating_mul(2).min(MAX_SEGMENTS)),
            KeyCode::ArrowDown => self.set_segment((segment / 2).max(MIN_SEGMENTS)),
            _ => {}
        }
        AppControl::Continue
    }

    fn set_segment(&mut self, segment: u32) {
        if segment == self.segment {
            return;
        }
        self.segment = segment;
        let shape = self.current_shape();
        if shape.segment().is_some() {
            self.pending = Some(shape.with_segment(segment));
        }
    }
}

impl App for Studio {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => self.on_key(*code),
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        // Lazily build GPU state on the first frame, once a device exists.
        if self.context.is_none() {
            match Context::new(&ctx.render_ctx(), self.config.clone()) {
                Ok(context) => self.context = Some(context),
                Err(e) => {
                    log::error!("failed to create rendering context: {e}");
                    return AppControl::Exit;
                }
            }
        }
        let Some(context) = self.context.as_mut() else { return AppControl::Exit };

        if let Some(shape) = self.pending.take() {
            match context.load(&ctx.render_ctx(), shape) {
                Ok(()) => {
                    let triangles = context.index_count() / 3;
                    let title = match shape.segment() {
                        Some(n) => format!("trifan: {} ({n} segments, {triangles} triangles)", shape.name()),
                        None => format!("trifan: {} ({triangles} triangles)", shape.name()),
                    };
                    ctx.window.set_title(&title);
                }
                Err(e) => log::error!("failed to load {}: {e}", shape.name()),
            }
        }

        let context = &*context;
        ctx.render(context.clear_color(), |rctx, target| context.render(rctx, target))
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    log::info!("keys: 1 quad, 2 circle, 3 arc, 4 ring, up/down segments, esc quit");

    let config = ContextConfig::from_env();
    if let Some(dir) = &config.shader_dir {
        log::info!("loading shaders from {}", dir.display());
    }

    Runtime::run(
        RuntimeConfig {
            title: "trifan: quad".to_string(),
            ..RuntimeConfig::default()
        },
        GpuInit::default(),
        Studio::new(config),
    )
}
