mod canvas;
mod config;
mod graphics;
mod grid;
mod input;
mod view;

use std::cell::RefCell;
use std::rc::Rc;

use winit::{
    event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::config::Config;
use crate::graphics::GraphicsRenderer;
use crate::input::{InputAction, InputHandler};
use crate::view::{ClickHandler, FrameTick};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let grid = config.grid()?;
    let (canvas_width, canvas_height) = grid.canvas_size();
    let (window_width, window_height) = config.window_size(&grid);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Toroidal Neighbors")
        .with_inner_size(winit::dpi::LogicalSize::new(window_width, window_height))
        .with_resizable(false)
        .build(&event_loop)?;

    let graphics = GraphicsRenderer::new(&window, canvas_width, canvas_height)?;
    let view = Rc::new(RefCell::new(config.build_view(grid, graphics)?));

    let mut input_handler = InputHandler::new();
    let click_target = Rc::clone(&view);
    input_handler.on_click(Box::new(move |pixel_x, pixel_y| {
        click_target.borrow_mut().on_click(pixel_x, pixel_y);
    }));

    {
        let view = view.borrow();
        let grid = view.grid();
        log::info!(
            "Grid of {}x{} cells at {}px",
            grid.num_cols(),
            grid.num_rows(),
            grid.cell_size()
        );
        if view.selection().is_selected() {
            log::info!("Starting with the configured cell selected");
        }
    }

    // First frame before any events arrive.
    view.borrow_mut().on_frame_tick();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    view.borrow_mut().canvas_mut().resize_surface(size.width, size.height);
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    input_handler.handle_cursor_moved(position);
                }
                WindowEvent::CursorLeft { .. } => {
                    input_handler.handle_cursor_left();
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    let action = input_handler.handle_mouse_input(state, button, |position| {
                        view.borrow().canvas().window_to_canvas(position)
                    });
                    if let InputAction::Click(..) = action {
                        window.request_redraw();
                    }
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(VirtualKeyCode::Escape),
                            ..
                        },
                    ..
                } => {
                    *control_flow = ControlFlow::Exit;
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                view.borrow_mut().on_frame_tick();
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                if let Err(err) = view.borrow_mut().canvas_mut().present() {
                    log::error!("Render error: {}", err);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}
