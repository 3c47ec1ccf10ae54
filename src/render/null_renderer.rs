use crate::error::ChartResult;
use crate::render::{Renderer, Scene};

/// Headless renderer used by tests and server-side hosts.
///
/// It validates every scene it receives so invalid geometry surfaces as an
/// error even without a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, scene: &Scene) -> ChartResult<()> {
        scene.validate()?;
        self.frames_rendered += 1;
        self.last_rect_count = scene.rect_count();
        self.last_text_count = scene.text_count();
        Ok(())
    }
}
