use crate::cell::CellState;
use crate::error::{Error, Result};
use crate::grid::{Grid, GridLike};

/// ASCII rendering of a 2-D field: `###` for obstacles, a right-aligned integer cost for
/// reached cells, and `...` for cells never reached. A debug aid, not a general-purpose
/// visualization for arbitrary N (this crate ships no CLI).
pub fn render_text(grid: &Grid<2, f64>) -> Result<String> {
    let dims = *grid.dims();
    let (width, height) = (dims[0], dims[1]);
    if width == 0 || height == 0 {
        return Ok(String::new());
    }

    let mut out = String::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let cell = grid
                .get(&[x as i64, y as i64])
                .map_err(|_| Error::OutOfBounds {
                    coord: vec![x as i64, y as i64],
                })?;
            let cell_text = if cell.is_obstacle() {
                "###".to_string()
            } else if cell.state() == CellState::Far {
                "...".to_string()
            } else {
                format!("{:>3}", cell.cost().round() as i64)
            };
            out.push_str(&cell_text);
            if x + 1 < width {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    Ok(out)
}
