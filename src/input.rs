use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton};

/// Click callback, given canvas pixel coordinates.
pub type ClickCallback = Box<dyn FnMut(i64, i64)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Click(i64, i64), // Canvas pixel that was clicked
    None,
}

/// Turns raw winit mouse events into clicks. winit reports the cursor and
/// the button separately, so the last cursor position is kept here.
pub struct InputHandler {
    cursor_position: Option<PhysicalPosition<f64>>,
    click_handler: Option<ClickCallback>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            cursor_position: None,
            click_handler: None,
        }
    }

    /// Registers the function that receives every left click. Meant to be
    /// called once at startup; a second call replaces the first handler.
    pub fn on_click(&mut self, handler: ClickCallback) {
        if self.click_handler.is_some() {
            log::warn!("Click handler registered twice, replacing the old one");
        }
        self.click_handler = Some(handler);
    }

    pub fn handle_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor_position = Some(position);
    }

    pub fn handle_cursor_left(&mut self) {
        self.cursor_position = None;
    }

    /// Dispatches a left press at the last cursor position to the registered
    /// handler. `to_canvas` maps window positions to canvas pixels.
    pub fn handle_mouse_input<F>(
        &mut self,
        state: ElementState,
        button: MouseButton,
        to_canvas: F,
    ) -> InputAction
    where
        F: FnOnce(PhysicalPosition<f64>) -> (i64, i64),
    {
        let position = match (state, button, self.cursor_position) {
            (ElementState::Pressed, MouseButton::Left, Some(position)) => position,
            _ => return InputAction::None,
        };

        let (pixel_x, pixel_y) = to_canvas(position);
        match self.click_handler.as_mut() {
            Some(handler) => handler(pixel_x, pixel_y),
            None => log::debug!("Click at ({}, {}) with no handler registered", pixel_x, pixel_y),
        }
        InputAction::Click(pixel_x, pixel_y)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
