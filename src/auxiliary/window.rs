#![deny(clippy::all)]
#![forbid(unsafe_code)]

use winit::dpi::{LogicalPosition, LogicalSize, PhysicalSize};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::auxiliary::error::LifeResult;
use crate::traits_and_structs::Cell;

pub const SCREEN_WIDTH: u32 = 800;
pub const SCREEN_HEIGHT: u32 = 700;

/// Side of one board square, in pixels.
pub const GRID_SQUARES: u32 = 20;
pub const GRID_WIDTH: u32 = SCREEN_WIDTH / GRID_SQUARES;
pub const GRID_HEIGHT: u32 = SCREEN_HEIGHT / GRID_SQUARES;

/// Board square under a pixel of the frame buffer.
pub fn pixel_to_cell(x: isize, y: isize) -> Cell {
    let side = GRID_SQUARES as isize;
    Cell::new(x.div_euclid(side) as i32, y.div_euclid(side) as i32)
}

/// Returns the window together with its physical size and scale factor.
pub fn create_window(
    title: &str,
    event_loop: &EventLoop<()>,
) -> LifeResult<(Window, u32, u32, f64)> {
    // Create a hidden window so we can estimate a good default window size
    let window = WindowBuilder::new()
        .with_visible(false)
        .with_title(title)
        .build(event_loop)?;
    let hidpi_factor = window.scale_factor();

    let width = SCREEN_WIDTH as f64;
    let height = SCREEN_HEIGHT as f64;
    let (monitor_width, monitor_height) = match window.current_monitor() {
        Some(monitor) => {
            let size = monitor.size().to_logical::<f64>(hidpi_factor);
            (size.width, size.height)
        }
        None => (width, height),
    };
    // the board is already large, so only scale up on very tall monitors
    let scale = (monitor_height / height * 2.0 / 3.0).floor().max(1.0);

    // Resize, center, and display the window
    let min_size: LogicalSize<f64> = PhysicalSize::new(width, height).to_logical(hidpi_factor);
    let default_size = LogicalSize::new(width * scale, height * scale);
    let center = LogicalPosition::new(
        ((monitor_width - width * scale) / 2.0).max(0.0),
        ((monitor_height - height * scale) / 2.0).max(0.0),
    );
    window.set_inner_size(default_size);
    window.set_min_inner_size(Some(min_size));
    window.set_outer_position(center);
    window.set_visible(true);

    let size = default_size.to_physical::<f64>(hidpi_factor);

    Ok((
        window,
        size.width.round() as u32,
        size.height.round() as u32,
        hidpi_factor,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_is_forty_by_thirty_five() {
        assert_eq!((GRID_WIDTH, GRID_HEIGHT), (40, 35));
    }

    #[test]
    fn pixels_map_to_squares() {
        assert_eq!(pixel_to_cell(0, 0), Cell::new(0, 0));
        assert_eq!(pixel_to_cell(19, 19), Cell::new(0, 0));
        assert_eq!(pixel_to_cell(20, 39), Cell::new(1, 1));
        assert_eq!(pixel_to_cell(799, 699), Cell::new(39, 34));
    }

    #[test]
    fn negative_pixels_floor() {
        assert_eq!(pixel_to_cell(-1, -21), Cell::new(-1, -2));
    }
}
