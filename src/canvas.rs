/// Drawing surface the grid view paints on. Colors are plain names and are
/// passed through untouched; interpreting them is up to the implementation.
pub trait Canvas {
    /// Wipes the whole surface.
    fn clear(&mut self);

    /// Fills a rectangle and strokes its edge. Later calls paint over earlier
    /// ones.
    fn draw_rect(&mut self, x: u32, y: u32, width: u32, height: u32, fill: &str, border: &str);
}
