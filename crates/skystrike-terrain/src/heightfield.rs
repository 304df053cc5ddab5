//! HeightField: local-space heightmap with elevation queries.

use std::io;

use skystrike_core::types::Position;

/// Local-space elevation grid, row-major (south-to-north, west-to-east).
/// Cell (0, 0) sits at `origin`; elevations are meters above the sim datum.
#[derive(Debug, Clone)]
pub struct HeightField {
    /// Southwest corner of the grid in sim space (meters).
    origin_x: f64,
    origin_y: f64,
    /// Meters per grid cell.
    cell_size: f64,
    /// Number of columns (west to east).
    width: u32,
    /// Number of rows (south to north).
    height: u32,
    /// Elevation values in meters.
    elevations: Vec<f32>,
}

impl HeightField {
    /// Create a HeightField from pre-loaded data.
    /// Fails if the elevation buffer does not match the stated dimensions.
    pub fn new(
        origin_x: f64,
        origin_y: f64,
        cell_size: f64,
        width: u32,
        height: u32,
        elevations: Vec<f32>,
    ) -> io::Result<Self> {
        if cell_size <= 0.0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("cell size must be positive, got {cell_size}"),
            ));
        }
        let expected = (width as usize) * (height as usize);
        if elevations.len() != expected {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "elevation buffer has {} samples, expected {expected} ({width}x{height})",
                    elevations.len()
                ),
            ));
        }
        Ok(Self {
            origin_x,
            origin_y,
            cell_size,
            width,
            height,
            elevations,
        })
    }

    /// Uniform flat field at the given elevation, centered on the origin.
    pub fn flat(extent: f64, cell_size: f64, elevation: f32) -> Self {
        let cells = (2.0 * extent / cell_size).ceil() as u32;
        let cells = cells.max(2);
        Self {
            origin_x: -extent,
            origin_y: -extent,
            cell_size,
            width: cells,
            height: cells,
            elevations: vec![elevation; (cells as usize) * (cells as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Meters per grid cell.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Lowest elevation in the field (meters).
    pub fn min_elevation(&self) -> f32 {
        self.elevations.iter().copied().fold(f32::INFINITY, f32::min)
    }

    /// Convert a sim-space position to grid row/col (fractional).
    /// Returns None if outside grid bounds.
    fn sim_to_grid(&self, pos: &Position) -> Option<(f64, f64)> {
        let col = (pos.x - self.origin_x) / self.cell_size;
        let row = (pos.y - self.origin_y) / self.cell_size;

        if col < 0.0 || row < 0.0 || col >= self.width as f64 || row >= self.height as f64 {
            return None;
        }

        Some((row, col))
    }

    /// Get raw elevation at integer grid coordinates.
    fn raw_elevation(&self, row: usize, col: usize) -> f32 {
        if row >= self.height as usize || col >= self.width as usize {
            return 0.0;
        }
        self.elevations[row * self.width as usize + col]
    }

    /// Elevation at a sim-space position with bilinear interpolation.
    /// Returns None if the position is outside the grid.
    pub fn elevation_at(&self, pos: &Position) -> Option<f32> {
        let (row, col) = self.sim_to_grid(pos)?;
        Some(self.bilinear(row, col))
    }

    /// Bilinear interpolation at fractional row/col.
    fn bilinear(&self, row: f64, col: f64) -> f32 {
        let r0 = row.floor() as usize;
        let c0 = col.floor() as usize;
        let r1 = (r0 + 1).min(self.height as usize - 1);
        let c1 = (c0 + 1).min(self.width as usize - 1);

        let fr = row - r0 as f64;
        let fc = col - c0 as f64;

        let e00 = self.raw_elevation(r0, c0) as f64;
        let e01 = self.raw_elevation(r0, c1) as f64;
        let e10 = self.raw_elevation(r1, c0) as f64;
        let e11 = self.raw_elevation(r1, c1) as f64;

        let south = e00 * (1.0 - fc) + e01 * fc;
        let north = e10 * (1.0 - fc) + e11 * fc;
        let val = south * (1.0 - fr) + north * fr;

        val as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 5×5 grid, 10 m cells, centered on the origin.
    /// Center cell is 100 m, ring around it 50 m, edges 0.
    fn make_test_field() -> HeightField {
        #[rustfmt::skip]
        let elevations: Vec<f32> = vec![
            0.0,  0.0,   0.0,  0.0, 0.0,
            0.0, 50.0,  50.0, 50.0, 0.0,
            0.0, 50.0, 100.0, 50.0, 0.0,
            0.0, 50.0,  50.0, 50.0, 0.0,
            0.0,  0.0,   0.0,  0.0, 0.0,
        ];
        HeightField::new(-25.0, -25.0, 10.0, 5, 5, elevations).unwrap()
    }

    #[test]
    fn test_new_rejects_mismatched_buffer() {
        let err = HeightField::new(0.0, 0.0, 10.0, 4, 4, vec![0.0; 15]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_new_rejects_bad_cell_size() {
        let err = HeightField::new(0.0, 0.0, 0.0, 2, 2, vec![0.0; 4]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_elevation_query_peak() {
        let field = make_test_field();
        // The peak sample sits at row=2, col=2 → sim (-5, -5).
        let elev = field.elevation_at(&Position::new(-5.0, -5.0, 0.0));
        assert!(elev.is_some(), "peak cell should be inside the grid");
        let e = elev.unwrap();
        assert!((e - 100.0).abs() < 1.0, "peak should be ~100m, got {e}");
    }

    #[test]
    fn test_elevation_query_outside_grid() {
        let field = make_test_field();
        assert!(field.elevation_at(&Position::new(500.0, 0.0, 0.0)).is_none());
        assert!(field.elevation_at(&Position::new(0.0, -26.0, 0.0)).is_none());
    }

    #[test]
    fn test_elevation_bilinear_interpolation() {
        let field = make_test_field();
        // Halfway between the 50m ring sample (row 1, col 2) and the
        // 100m peak (row 2, col 2) → 75m.
        let elev = field.elevation_at(&Position::new(-5.0, -10.0, 0.0)).unwrap();
        assert!((elev - 75.0).abs() < 1.0, "expected ~75m, got {elev}");
    }

    #[test]
    fn test_flat_field_uniform() {
        let field = HeightField::flat(100.0, 10.0, 12.5);
        for pos in [
            Position::new(0.0, 0.0, 0.0),
            Position::new(-80.0, 40.0, 0.0),
            Position::new(55.0, -55.0, 0.0),
        ] {
            let e = field.elevation_at(&pos).unwrap();
            assert!((e - 12.5).abs() < 1e-3, "flat field should be 12.5m at {pos:?}");
        }
        assert!((field.min_elevation() - 12.5).abs() < 1e-3);
    }
}
