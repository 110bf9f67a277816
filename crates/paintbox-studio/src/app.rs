use anyhow::Context;

use paintbox_engine::coords::{Rect, Vec2};
use paintbox_engine::core::{App, AppControl, FrameCtx};
use paintbox_engine::input::{
    InputEvent, KeyState, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};
use paintbox_engine::render::{GpuCanvas, GraphicsContext, RenderSurface, ShaderSource};
use paintbox_engine::session::{DrawingSession, PointerSample, SessionConfig};

use crate::controls::{action_for_key, Action, Slider, SliderPanel};

/// Session + control panel, independent of the graphics backend.
pub struct Studio {
    session: DrawingSession,
    panel: SliderPanel,
}

impl Studio {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            panel: SliderPanel::from_config(&config),
            session: DrawingSession::new(config),
        }
    }

    #[cfg(test)]
    fn session(&self) -> &DrawingSession {
        &self.session
    }

    #[cfg(test)]
    fn panel(&self) -> &SliderPanel {
        &self.panel
    }

    /// Applies one input event. `bounds` is the drawing surface it refers to.
    ///
    /// A press with no known pointer position draws nothing.
    pub fn handle_event<G: GraphicsContext>(
        &mut self,
        event: &InputEvent,
        bounds: Rect,
        surface: &mut RenderSurface<G>,
    ) -> AppControl {
        match *event {
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                position: Some((x, y)),
                ..
            })
            | InputEvent::PointerMoved(PointerMoveEvent { x, y, primary_held: true }) => {
                let sample = PointerSample::new(Vec2::new(x, y), bounds);
                self.session.handle_input(sample, surface);
            }

            InputEvent::Key { key, state: KeyState::Pressed, modifiers, .. } => {
                if let Some(action) = action_for_key(key, modifiers) {
                    return self.apply(action, surface);
                }
            }

            _ => {}
        }

        AppControl::Continue
    }

    fn apply<G: GraphicsContext>(
        &mut self,
        action: Action,
        surface: &mut RenderSurface<G>,
    ) -> AppControl {
        match action {
            Action::SelectMode(mode) => {
                self.session.set_mode(mode);
                self.session.redraw_all(surface);
            }
            Action::Clear => self.session.clear(surface),
            Action::Nudge { slider, delta } => {
                let value = self.panel.nudge(slider, delta);
                match slider {
                    Slider::Color(channel) => self.session.set_channel(channel, value as u8),
                    Slider::Size => self.session.set_size(value as f32),
                    Slider::Segments => self.session.set_segments(value),
                }
                log::info!("{slider:?} = {value}");
            }
            Action::Exit => return AppControl::Exit,
        }
        AppControl::Continue
    }
}

/// The studio's `App`: owns the GPU canvas once the first frame creates it.
pub struct StudioApp {
    studio: Studio,
    surface: Option<RenderSurface<GpuCanvas>>,
}

impl StudioApp {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            studio: Studio::new(config),
            surface: None,
        }
    }

    fn init_surface(ctx: &FrameCtx<'_, '_>) -> anyhow::Result<RenderSurface<GpuCanvas>> {
        let canvas = GpuCanvas::new(ctx.gpu.device().clone(), ctx.gpu.surface_format());
        RenderSurface::init(canvas, &ShaderSource::canvas())
            .context("failed to initialize the drawing surface")
    }
}

impl App for StudioApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.surface.is_none() {
            match Self::init_surface(ctx) {
                Ok(mut surface) => {
                    self.studio.session.redraw_all(&mut surface);
                    self.surface = Some(surface);
                }
                Err(err) => {
                    ctx.runtime.fail(err);
                    return AppControl::Exit;
                }
            }
        }
        let Some(surface) = self.surface.as_mut() else {
            return AppControl::Exit;
        };

        let bounds = ctx.window.surface_bounds();
        for event in &ctx.input_frame.events {
            if self.studio.handle_event(event, bounds, surface) == AppControl::Exit {
                return AppControl::Exit;
            }
        }

        ctx.render(|rctx, target| surface.context_mut().present(rctx, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paintbox_engine::input::{Key, Modifiers};
    use paintbox_engine::paint::Color;
    use paintbox_engine::render::{GfxCall, RecordingContext, Topology};
    use paintbox_engine::scene::Shape;
    use paintbox_engine::session::DrawMode;

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 400.0, 400.0);

    fn surface() -> RenderSurface<RecordingContext> {
        let mut s = RenderSurface::init(RecordingContext::new(), &ShaderSource::canvas())
            .expect("canvas shaders");
        s.context_mut().take_calls();
        s
    }

    fn key(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            modifiers: Modifiers::default(),
            code: 0,
            repeat: false,
        }
    }

    fn left_press(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            position: Some((x, y)),
            modifiers: Modifiers::default(),
        })
    }

    fn moved(x: f32, y: f32, primary_held: bool) -> InputEvent {
        InputEvent::PointerMoved(PointerMoveEvent { x, y, primary_held })
    }

    #[test]
    fn press_and_drag_draw_but_hover_does_not() {
        let mut studio = Studio::new(SessionConfig::default());
        let mut gfx = surface();

        for ev in [
            moved(10.0, 10.0, false),
            left_press(200.0, 200.0),
            moved(210.0, 200.0, true),
            moved(220.0, 200.0, true),
            moved(230.0, 200.0, false),
        ] {
            studio.handle_event(&ev, BOUNDS, &mut gfx);
        }

        assert_eq!(studio.session().scene().len(), 3);
    }

    #[test]
    fn right_button_does_not_draw() {
        let mut studio = Studio::new(SessionConfig::default());
        let mut gfx = surface();
        let ev = InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Right,
            state: MouseButtonState::Pressed,
            position: Some((1.0, 1.0)),
            modifiers: Modifiers::default(),
        });

        studio.handle_event(&ev, BOUNDS, &mut gfx);
        assert!(studio.session().scene().is_empty());
    }

    #[test]
    fn press_without_pointer_position_does_not_draw() {
        let mut studio = Studio::new(SessionConfig::default());
        let mut gfx = surface();
        let ev = InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            position: None,
            modifiers: Modifiers::default(),
        });

        assert_eq!(studio.handle_event(&ev, BOUNDS, &mut gfx), AppControl::Continue);
        assert!(studio.session().scene().is_empty());
        assert!(gfx.context().calls().is_empty());
    }

    #[test]
    fn mode_key_rerenders_unchanged_scene() {
        let mut studio = Studio::new(SessionConfig::default());
        let mut gfx = surface();
        studio.handle_event(&left_press(200.0, 200.0), BOUNDS, &mut gfx);
        gfx.context_mut().take_calls();

        studio.handle_event(&key(Key::T), BOUNDS, &mut gfx);

        assert_eq!(studio.session().state().mode, DrawMode::Triangle);
        assert_eq!(studio.session().scene().len(), 1);
        assert_eq!(gfx.context().calls()[0], GfxCall::ClearFrame { color: Color::black() });
        assert_eq!(gfx.context().draws().collect::<Vec<_>>(), vec![(Topology::Points, 1)]);

        studio.handle_event(&left_press(300.0, 100.0), BOUNDS, &mut gfx);
        assert!(matches!(studio.session().scene().last(), Some(Shape::Triangle(_))));
    }

    #[test]
    fn sliders_feed_the_next_shape() {
        let mut studio = Studio::new(SessionConfig::default());
        let mut gfx = surface();

        studio.handle_event(&key(Key::G), BOUNDS, &mut gfx);
        studio.handle_event(&key(Key::ArrowUp), BOUNDS, &mut gfx);
        studio.handle_event(&left_press(200.0, 200.0), BOUNDS, &mut gfx);

        let Some(Shape::Point(p)) = studio.session().scene().last() else {
            panic!("expected a point");
        };
        assert_eq!(p.color(), Color::rgb(1.0, 15.0 / 255.0, 0.0));
        assert_eq!(p.size(), 11.0);
        assert_eq!(studio.panel().green, 15);
    }

    #[test]
    fn backspace_clears_and_escape_exits() {
        let mut studio = Studio::new(SessionConfig::default());
        let mut gfx = surface();
        studio.handle_event(&left_press(200.0, 200.0), BOUNDS, &mut gfx);

        assert_eq!(studio.handle_event(&key(Key::Backspace), BOUNDS, &mut gfx), AppControl::Continue);
        assert!(studio.session().scene().is_empty());

        assert_eq!(studio.handle_event(&key(Key::Escape), BOUNDS, &mut gfx), AppControl::Exit);
    }
}
