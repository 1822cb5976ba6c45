use plotters::prelude::*;
use plotters::style::full_palette::{GREY, INDIGO, ORANGE, PURPLE};
use std::path::Path;
use thiserror::Error;
use uom::si::{angle::degree, f64::Angle};

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("signal has {signal} samples but sweep has {angles} angles")]
    LengthMismatch { signal: usize, angles: usize },
    #[error("drawing backend: {0}")]
    Backend(String),
}

const SECTOR_WIDTH_DEG: f64 = 22.5;

/// One fixed color per 22.5 degree sector of the modulator rotation.
const SECTOR_COLORS: [RGBColor; 8] = [GREY, RED, ORANGE, YELLOW, GREEN, BLUE, INDIGO, PURPLE];

/// Renders a modulated-signal sweep against the modulator angle.
///
/// The chart shows the signal as a black line over eight shaded angular
/// sectors, with the y-axis clipped to [-1, 1] and the x-axis clipped to
/// [0, 180] degrees. The signal itself stays a plain numeric slice; any
/// other charting layer can consume the same data.
pub struct SignalPlot {
    size: (u32, u32),
}

impl SignalPlot {
    pub fn new() -> Self {
        Self { size: (1000, 800) }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Draw `signal` against `thetas` and write a PNG to `path`.
    ///
    /// Returns `PlotError::LengthMismatch` if the two slices disagree on
    /// sample count.
    pub fn render<P: AsRef<Path>>(
        &self,
        thetas: &[Angle],
        signal: &[f64],
        path: P,
    ) -> Result<(), PlotError> {
        if thetas.len() != signal.len() {
            return Err(PlotError::LengthMismatch {
                signal: signal.len(),
                angles: thetas.len(),
            });
        }

        let root = BitMapBackend::new(path.as_ref(), self.size).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| PlotError::Backend(e.to_string()))?;

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 60)
            .build_cartesian_2d(0f64..180f64, -1f64..1f64)
            .map_err(|e| PlotError::Backend(e.to_string()))?;

        chart
            .configure_mesh()
            .x_desc("Modulator angle (degrees)")
            .disable_mesh()
            .draw()
            .map_err(|e| PlotError::Backend(e.to_string()))?;

        let points: Vec<(f64, f64)> = thetas
            .iter()
            .map(|theta| theta.get::<degree>())
            .zip(signal.iter().copied())
            .collect();

        for (index, color) in SECTOR_COLORS.iter().enumerate() {
            let lo = index as f64 * SECTOR_WIDTH_DEG;
            let hi = lo + SECTOR_WIDTH_DEG;
            let sector = points
                .iter()
                .copied()
                .filter(|(angle, _)| lo <= *angle && *angle < hi);

            chart
                .draw_series(AreaSeries::new(sector, -1.0, color.mix(0.2)))
                .map_err(|e| PlotError::Backend(e.to_string()))?;
        }

        for boundary in 1..SECTOR_COLORS.len() {
            let angle = boundary as f64 * SECTOR_WIDTH_DEG;
            chart
                .draw_series(LineSeries::new(
                    [(angle, -1.0), (angle, 1.0)],
                    BLACK.mix(0.4),
                ))
                .map_err(|e| PlotError::Backend(e.to_string()))?;
        }

        chart
            .draw_series(LineSeries::new(points, BLACK.stroke_width(2)))
            .map_err(|e| PlotError::Backend(e.to_string()))?;

        root.present()
            .map_err(|e| PlotError::Backend(e.to_string()))?;

        Ok(())
    }
}

impl Default for SignalPlot {
    fn default() -> Self {
        Self::new()
    }
}
