#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::time::Instant;

use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::Window;
use winit_input_helper::WinitInputHelper;

use crate::auxiliary::error::LifeResult;
use crate::auxiliary::window::{
    create_window, pixel_to_cell, GRID_HEIGHT, GRID_SQUARES, GRID_WIDTH, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};
use crate::projects::cadence::{Cadence, CadenceConfig};
use crate::projects::life_engine::{Bounds, LifeEngine, LiveSet};
use crate::traits_and_structs::{Cell, CellAutomata};

const TITLE: &str = "Conway's Game of Life";

/// The squares visible in the window.
pub const BOARD: Bounds = Bounds::Grid {
    width: GRID_WIDTH as i32,
    height: GRID_HEIGHT as i32,
};

const DARK_BLUE: [u8; 4] = [45, 96, 102, 0xff];
const DARKER_BLUE: [u8; 4] = [31, 68, 72, 0xff];
const LIGHT_GREEN: [u8; 4] = [0, 230, 98, 0xff];

/// Opens the window and runs until it is closed. `bounds` limits where cells can be born.
pub fn run_life(config: CadenceConfig, bounds: Bounds) -> LifeResult<()> {
    env_logger::init();
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();
    let (window, p_width, p_height, mut _hidpi_factor) = create_window(TITLE, &event_loop)?;

    let surface_texture = SurfaceTexture::new(p_width, p_height, &window);
    let mut pixels = Pixels::new(SCREEN_WIDTH, SCREEN_HEIGHT, surface_texture)?;

    let mut engine = LifeEngine::new(bounds);
    let mut cadence = Cadence::new(config);
    let mut last_frame = Instant::now();
    // Liveness given to cells crossed while the button stays down.
    let mut draw_state: Option<bool> = None;

    info!("{}", LifeEngine::describe());
    info!(
        "{}x{} board ({:?}), {:?} per generation, autoplay {}",
        GRID_WIDTH,
        GRID_HEIGHT,
        engine.bounds(),
        cadence.interval(),
        cadence.autoplay()
    );

    event_loop.run(move |event, _, control_flow| {
        if let Event::RedrawRequested(_) = event {
            draw_board(engine.live(), pixels.get_frame());
            if pixels
                .render()
                .map_err(|e| error!("pixels.render() failed: {}", e))
                .is_err()
            {
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        if input.update(&event) {
            if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
                *control_flow = ControlFlow::Exit;
                return;
            }
            if input.key_pressed(VirtualKeyCode::A) {
                let on = cadence.toggle_autoplay();
                info!("autoplay {}", if on { "on" } else { "off" });
            }
            if input.key_pressed(VirtualKeyCode::C) {
                info!("board cleared");
                engine.clear();
                cadence.reset();
                draw_state = None;
                show_status(&window, &engine);
            }
            if input.key_pressed(VirtualKeyCode::R) || input.key_pressed(VirtualKeyCode::Space) {
                debug!("single round requested");
                cadence.request_step();
            }

            let (mouse_cell, mouse_prev_cell) = input
                .mouse()
                .map(|(mx, my)| {
                    let (dx, dy) = input.mouse_diff();
                    let (mx_i, my_i) = pixels
                        .window_pos_to_pixel((mx, my))
                        .unwrap_or_else(|pos| pixels.clamp_pixel_pos(pos));
                    let (px_i, py_i) = pixels
                        .window_pos_to_pixel((mx - dx, my - dy))
                        .unwrap_or_else(|pos| pixels.clamp_pixel_pos(pos));
                    (
                        Some(pixel_to_cell(mx_i as isize, my_i as isize)),
                        Some(pixel_to_cell(px_i as isize, py_i as isize)),
                    )
                })
                .unwrap_or_default();

            if let (true, Some(cell)) = (input.mouse_pressed(0), mouse_cell) {
                let alive = engine.toggle(cell);
                debug!("Mouse click at {:?}, now alive: {}", cell, alive);
                draw_state = Some(alive);
            } else if let Some(draw_alive) = draw_state {
                let release = input.mouse_released(0);
                let held = input.mouse_held(0);
                if release || held {
                    if let (Some(from), Some(to)) = (mouse_prev_cell, mouse_cell) {
                        paint_line(&mut engine, from, to, draw_alive);
                    }
                }
                if release || !held {
                    debug!("Draw end");
                    draw_state = None;
                }
            }

            if let Some(factor) = input.scale_factor_changed() {
                _hidpi_factor = factor;
            }
            if let Some(size) = input.window_resized() {
                pixels.resize_surface(size.width, size.height);
            }

            let now = Instant::now();
            if cadence.tick(now - last_frame) {
                engine.update();
                show_status(&window, &engine);
            }
            last_frame = now;
            window.request_redraw();
        }
    });
}

fn show_status(window: &Window, engine: &LifeEngine) {
    window.set_title(&format!(
        "{} - generation {}, {} alive",
        TITLE,
        engine.generation(),
        engine.population()
    ));
}

/// Sets every square on the segment between two cells, stopping at the board edge.
fn paint_line<A: CellAutomata>(automata: &mut A, from: Cell, to: Cell, alive: bool) {
    for (col, row) in line_drawing::Bresenham::new((from.col, from.row), (to.col, to.row)) {
        let cell = Cell::new(col, row);
        if !BOARD.contains(cell) {
            break;
        }
        automata.set(cell, alive);
    }
}

/// Renders the board into an RGBA frame of `SCREEN_WIDTH` x `SCREEN_HEIGHT`.
pub fn draw_board(live: &LiveSet, frame: &mut [u8]) {
    let width = SCREEN_WIDTH as usize;
    let height = SCREEN_HEIGHT as usize;
    let side = GRID_SQUARES as usize;
    debug_assert_eq!(frame.len(), 4 * width * height);

    for pix in frame.chunks_exact_mut(4) {
        pix.copy_from_slice(&DARK_BLUE);
    }

    for cell in live {
        let (Ok(col), Ok(row)) = (usize::try_from(cell.col), usize::try_from(cell.row)) else {
            continue;
        };
        let (left, top) = (col * side, row * side);
        if left >= width || top >= height {
            continue;
        }
        for y in top..(top + side).min(height) {
            let start = 4 * (y * width + left);
            let end = 4 * (y * width + (left + side).min(width));
            for pix in frame[start..end].chunks_exact_mut(4) {
                pix.copy_from_slice(&LIGHT_GREEN);
            }
        }
    }

    for y in (0..height).step_by(side) {
        for pix in frame[4 * y * width..4 * (y + 1) * width].chunks_exact_mut(4) {
            pix.copy_from_slice(&DARKER_BLUE);
        }
    }
    for x in (0..width).step_by(side) {
        for y in 0..height {
            let i = 4 * (y * width + x);
            frame[i..i + 4].copy_from_slice(&DARKER_BLUE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(frame: &[u8], x: usize, y: usize) -> [u8; 4] {
        let i = 4 * (y * SCREEN_WIDTH as usize + x);
        [frame[i], frame[i + 1], frame[i + 2], frame[i + 3]]
    }

    fn blank_frame() -> Vec<u8> {
        vec![0; 4 * (SCREEN_WIDTH * SCREEN_HEIGHT) as usize]
    }

    #[test]
    fn live_cells_are_green_inside_grid_lines() {
        let live: LiveSet = [Cell::new(2, 1)].into_iter().collect();
        let mut frame = blank_frame();
        draw_board(&live, &mut frame);

        assert_eq!(pixel(&frame, 50, 30), LIGHT_GREEN);
        assert_eq!(pixel(&frame, 40, 30), DARKER_BLUE);
        assert_eq!(pixel(&frame, 50, 20), DARKER_BLUE);
        assert_eq!(pixel(&frame, 70, 30), DARK_BLUE);
    }

    #[test]
    fn off_board_cells_are_skipped() {
        let live: LiveSet = [Cell::new(-1, 3), Cell::new(40, 0), Cell::new(0, 35)]
            .into_iter()
            .collect();
        let mut frame = blank_frame();
        draw_board(&live, &mut frame);
        assert!(frame
            .chunks_exact(4)
            .all(|p| p == &DARK_BLUE[..] || p == &DARKER_BLUE[..]));
    }

    #[test]
    fn drag_paints_a_clipped_line() {
        let mut engine = LifeEngine::new(Bounds::Unbounded);
        paint_line(&mut engine, Cell::new(36, 0), Cell::new(44, 0), true);
        assert_eq!(engine.population(), 4);
        assert!(engine.live().contains(&Cell::new(39, 0)));
        assert!(!engine.live().contains(&Cell::new(40, 0)));

        paint_line(&mut engine, Cell::new(37, 0), Cell::new(38, 0), false);
        assert_eq!(engine.population(), 2);
    }
}
