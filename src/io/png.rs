use crate::cell::{Cell, CellState};
use crate::error::{Error, Result};
use crate::grid::{Grid, GridLike};
use image::{ImageBuffer, Rgb};
use std::path::Path;

/// Decode a 2-D obstacle map from an image. A pixel is an obstacle if it is grayscale (or
/// mean-RGB) below `threshold`; the alpha channel, if any, is ignored.
pub fn decode_obstacles<P: AsRef<Path>>(path: P, threshold: u8) -> Result<Grid<2, f64>> {
    let img = image::open(path)?.to_rgb8();
    let (width, height) = img.dimensions();
    let mut grid: Grid<2, f64> = Grid::new([width as usize, height as usize]);

    for y in 0..height {
        for x in 0..width {
            let pixel = img.get_pixel(x, y);
            let mean = (pixel[0] as u32 + pixel[1] as u32 + pixel[2] as u32) / 3;
            let obstacle = mean < threshold as u32;
            grid.set_obstacle(&[x as i64, y as i64], obstacle)?;
        }
    }
    Ok(grid)
}

const UNREACHED_GRAY: Rgb<u8> = Rgb([50, 50, 50]);
const OBSTACLE_BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Encode a finished 2-D field as a colorized PNG: obstacles are black, cells never
/// reached are dark gray, and reached cells are colored blue -> green -> yellow -> red by
/// cost, normalized against the largest finite cost in the grid.
pub fn encode_field<P: AsRef<Path>>(grid: &Grid<2, f64>, path: P) -> Result<()> {
    let dims = *grid.dims();
    let (width, height) = (dims[0] as u32, dims[1] as u32);

    let max_cost = (0..grid.len())
        .map(|i| grid.cell(i))
        .filter(|c: &&Cell<2, f64>| !c.is_obstacle() && c.cost().is_finite())
        .map(|c| c.cost())
        .fold(0.0f64, f64::max);

    let mut img = ImageBuffer::<Rgb<u8>, Vec<u8>>::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let cell = grid.get(&[x as i64, y as i64])?;
            let color = if cell.is_obstacle() {
                OBSTACLE_BLACK
            } else if !cell.cost().is_finite() {
                UNREACHED_GRAY
            } else {
                colormap(cell.cost(), max_cost)
            };
            img.put_pixel(x, y, color);
        }
    }
    img.save(path).map_err(Error::Image)?;
    Ok(())
}

/// Blue -> green -> yellow -> red over the thirds `[0, .33]`, `[.33, .66]`, `[.66, 1]` of
/// `cost / max_cost`.
fn colormap(cost: f64, max_cost: f64) -> Rgb<u8> {
    let t = if max_cost > 0.0 {
        (cost / max_cost).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (r, g, b) = if t < 1.0 / 3.0 {
        let s = t * 3.0;
        (0.0, s, 1.0 - s)
    } else if t < 2.0 / 3.0 {
        let s = (t - 1.0 / 3.0) * 3.0;
        (s, 1.0, 0.0)
    } else {
        let s = (t - 2.0 / 3.0) * 3.0;
        (1.0, 1.0 - s, 0.0)
    };
    Rgb([(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8])
}

/// Render `Frozen`/`Front`/obstacle state as a PNG, independent of cost, useful for
/// visualizing a run in progress.
pub fn encode_state<P: AsRef<Path>>(grid: &Grid<2, f64>, path: P) -> Result<()> {
    let dims = *grid.dims();
    let (width, height) = (dims[0] as u32, dims[1] as u32);
    let mut img = ImageBuffer::<Rgb<u8>, Vec<u8>>::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let cell = grid.get(&[x as i64, y as i64])?;
            let color = if cell.is_obstacle() {
                OBSTACLE_BLACK
            } else {
                match cell.state() {
                    CellState::Frozen => Rgb([100, 100, 255]),
                    CellState::Front => Rgb([255, 100, 100]),
                    CellState::Far => Rgb([255, 255, 255]),
                }
            };
            img.put_pixel(x, y, color);
        }
    }
    img.save(path).map_err(Error::Image)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn colormap_endpoints() {
        assert_eq!(colormap(0.0, 10.0), Rgb([0, 0, 255]));
        assert_eq!(colormap(10.0, 10.0), Rgb([255, 0, 0]));
    }
}
