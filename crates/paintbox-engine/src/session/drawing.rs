use crate::coords::{to_canonical, Rect, Vec2};
use crate::paint::Color;
use crate::render::{GraphicsContext, RenderSurface};
use crate::scene::Scene;

use super::{Channel, DrawMode, DrawingState, SessionConfig};

/// A pointer position plus the surface it was reported against.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerSample {
    /// Pointer position in surface pixels.
    pub position: Vec2,
    /// Bounding rectangle of the drawing surface.
    pub surface: Rect,
}

impl PointerSample {
    #[inline]
    pub fn new(position: Vec2, surface: Rect) -> Self {
        Self { position, surface }
    }

    /// The position in canonical device coordinates.
    #[inline]
    pub fn canonical(&self) -> Vec2 {
        to_canonical(self.position, self.surface)
    }
}

/// Scene + drawing state + the clear color redraws start from.
///
/// Every mutation that changes what is on screen ends in
/// [`redraw_all`](Self::redraw_all), the only rendering entry point.
#[derive(Debug, Clone)]
pub struct DrawingSession {
    scene: Scene,
    state: DrawingState,
    clear_color: Color,
}

impl DrawingSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            scene: Scene::new(),
            state: DrawingState::from_config(&config),
            clear_color: config.clear_color,
        }
    }

    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[inline]
    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    #[inline]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Builds one shape at the sample from the current state, appends it and
    /// redraws everything.
    pub fn handle_input<G: GraphicsContext>(
        &mut self,
        sample: PointerSample,
        surface: &mut RenderSurface<G>,
    ) {
        let at = sample.canonical();
        let shape = self.state.shape_at(at);

        log::debug!(
            "{} at ({:.3}, {:.3}) from pointer ({}, {}); scene now {}",
            self.state.mode,
            at.x,
            at.y,
            sample.position.x,
            sample.position.y,
            self.scene.len() + 1,
        );

        self.scene.push(shape);
        self.redraw_all(surface);
    }

    /// Selects the mode for subsequent shapes. The scene is left as is.
    pub fn set_mode(&mut self, mode: DrawMode) {
        if self.state.mode != mode {
            log::debug!("mode {} -> {}", self.state.mode, mode);
        }
        self.state.mode = mode;
    }

    /// Empties the scene and clears the frame. Drawing state is kept.
    pub fn clear<G: GraphicsContext>(&mut self, surface: &mut RenderSurface<G>) {
        log::info!("clearing {} shapes", self.scene.len());
        self.scene.clear();
        surface.context_mut().clear_frame(self.clear_color);
    }

    /// Clears the frame, then renders every shape in insertion order.
    pub fn redraw_all<G: GraphicsContext>(&self, surface: &mut RenderSurface<G>) {
        log::trace!("redraw {} shapes", self.scene.len());

        let (gfx, bindings) = surface.parts_mut();
        gfx.clear_frame(self.clear_color);
        self.scene.render(gfx, bindings);
    }

    // ── drawing state ─────────────────────────────────────────────────────

    /// Sets a color channel from a `0..=255` slider value.
    pub fn set_channel(&mut self, channel: Channel, value: u8) {
        self.state.set_channel(channel, value);
    }

    pub fn set_size(&mut self, size: f32) {
        self.state.size = size;
    }

    /// Values below 3 are accepted; circles drawn with them are degenerate.
    pub fn set_segments(&mut self, segments: u32) {
        self.state.segments = segments;
    }
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{GfxCall, RecordingContext, ShaderSource, Topology};
    use crate::scene::{Point, Shape};

    const SURFACE: Rect = Rect::new(0.0, 0.0, 400.0, 400.0);

    fn surface() -> RenderSurface<RecordingContext> {
        let mut s = RenderSurface::init(RecordingContext::new(), &ShaderSource::canvas())
            .expect("canvas shaders");
        s.context_mut().take_calls();
        s
    }

    fn at(px: f32, py: f32) -> PointerSample {
        PointerSample::new(Vec2::new(px, py), SURFACE)
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-6
    }

    // ── end-to-end ────────────────────────────────────────────────────────

    #[test]
    fn point_click_at_center_draws_one_point() {
        let mut gfx = surface();
        let mut session = DrawingSession::default();
        let red = Color::new(1.0, 0.0, 0.0, 1.0);

        session.handle_input(at(200.0, 200.0), &mut gfx);

        assert_eq!(
            session.scene().shapes(),
            &[Shape::Point(Point::new(Vec2::new(0.0, 0.0), red, 10.0))]
        );

        let b = gfx.bindings();
        assert_eq!(
            gfx.context().calls(),
            &[
                GfxCall::ClearFrame { color: Color::black() },
                GfxCall::SetImmediateAttribute { handle: b.position, xyz: [0.0, 0.0, 0.0] },
                GfxCall::SetUniformColor { handle: b.frag_color, color: red },
                GfxCall::SetUniformFloat { handle: b.point_size, value: 10.0 },
                GfxCall::Draw { topology: Topology::Points, vertex_count: 1 },
            ]
        );
    }

    #[test]
    fn triangle_click_builds_scaled_isosceles() {
        let mut gfx = surface();
        let mut session = DrawingSession::default();
        session.set_mode(DrawMode::Triangle);
        session.set_size(20.0);

        // (300, 100) on a 400x400 surface is canonical (0.5, 0.5).
        session.handle_input(at(300.0, 100.0), &mut gfx);

        let Some(Shape::Triangle(t)) = session.scene().last() else {
            panic!("expected a triangle");
        };
        let expected = [(0.3, 0.3), (0.7, 0.3), (0.5, 0.7)];
        for (v, (ex, ey)) in t.vertices().iter().zip(expected) {
            assert!(approx(v.x, ex) && approx(v.y, ey), "{v:?} != ({ex}, {ey})");
        }
        assert_eq!(
            gfx.context().draws().collect::<Vec<_>>(),
            vec![(Topology::Triangles, 3)]
        );
    }

    #[test]
    fn every_input_redraws_the_whole_scene() {
        let mut gfx = surface();
        let mut session = DrawingSession::default();

        for i in 0..4 {
            session.handle_input(at(10.0 * i as f32, 0.0), &mut gfx);
        }

        let calls = gfx.context().calls();
        let clears = calls.iter().filter(|c| matches!(c, GfxCall::ClearFrame { .. })).count();
        assert_eq!(clears, 4);
        // 1 + 2 + 3 + 4 point draws across the four redraws.
        assert_eq!(gfx.context().draws().count(), 10);
    }

    #[test]
    fn surface_offset_is_subtracted() {
        let mut gfx = surface();
        let mut session = DrawingSession::default();
        let offset = Rect::new(50.0, 30.0, 200.0, 100.0);

        session.handle_input(PointerSample::new(Vec2::new(50.0, 30.0), offset), &mut gfx);

        let Some(Shape::Point(p)) = session.scene().last() else {
            panic!("expected a point");
        };
        assert_eq!(p.position(), Vec2::new(-1.0, 1.0));
    }

    // ── mode, clear, snapshots ────────────────────────────────────────────

    #[test]
    fn mode_switch_leaves_scene_unchanged() {
        let mut gfx = surface();
        let mut session = DrawingSession::default();
        session.handle_input(at(100.0, 100.0), &mut gfx);
        session.set_mode(DrawMode::Circle);
        session.handle_input(at(300.0, 300.0), &mut gfx);

        for mode in [DrawMode::Triangle, DrawMode::Point, DrawMode::Circle, DrawMode::Circle] {
            let before = session.scene().clone();
            session.set_mode(mode);
            assert_eq!(session.scene(), &before);
            assert_eq!(session.state().mode, mode);
        }
    }

    #[test]
    fn clear_empties_scene_and_frame_but_keeps_state() {
        let mut gfx = surface();
        let mut session = DrawingSession::default();
        session.set_mode(DrawMode::Triangle);
        session.set_size(33.0);
        session.set_channel(Channel::Blue, 255);
        for _ in 0..3 {
            session.handle_input(at(200.0, 200.0), &mut gfx);
        }
        gfx.context_mut().take_calls();
        let state = *session.state();

        session.clear(&mut gfx);

        assert!(session.scene().is_empty());
        assert_eq!(session.state(), &state);
        assert_eq!(gfx.context().calls(), &[GfxCall::ClearFrame { color: Color::black() }]);

        session.handle_input(at(200.0, 200.0), &mut gfx);
        assert_eq!(session.scene().len(), 1);
    }

    #[test]
    fn later_state_changes_do_not_touch_existing_shapes() {
        let mut gfx = surface();
        let mut session = DrawingSession::default();
        session.handle_input(at(200.0, 200.0), &mut gfx);
        let before = session.scene().clone();

        session.set_channel(Channel::Green, 255);
        session.set_size(99.0);
        session.set_segments(5);

        assert_eq!(session.scene(), &before);
    }

    #[test]
    fn redraw_uses_configured_clear_color() {
        let mut gfx = surface();
        let white = Color::rgb(1.0, 1.0, 1.0);
        let session = DrawingSession::new(SessionConfig { clear_color: white, ..Default::default() });

        session.redraw_all(&mut gfx);

        assert_eq!(gfx.context().calls(), &[GfxCall::ClearFrame { color: white }]);
    }
}
