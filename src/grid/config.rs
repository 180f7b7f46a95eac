use super::constants::*;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// How the column count is chosen for a given canvas size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnMode {
    /// `floor(width / cell_size)`
    Derived,
    Fixed(usize),
    /// Portrait when the canvas is taller than it is wide.
    Orientation { landscape: usize, portrait: usize },
}

impl ColumnMode {
    pub fn columns_for(self, width: f32, height: f32, cell_size: f32) -> usize {
        match self {
            ColumnMode::Derived => (width / cell_size).floor().max(0.0) as usize,
            ColumnMode::Fixed(n) => n,
            ColumnMode::Orientation {
                landscape,
                portrait,
            } => {
                if width < height {
                    portrait
                } else {
                    landscape
                }
            }
        }
    }
}

/// Silent rows reserved at the top and bottom of the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Margins {
    pub top: usize,
    pub bottom: usize,
}

/// Drum-trigger columns reserved at the left and right edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrumColumns {
    pub left: usize,
    pub right: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    pub rows: usize,
    pub columns: ColumnMode,
    pub margins: Margins,
    pub drums: DrumColumns,
    pub highlight_duration: Duration,
    pub base_frequency_hz: f32,
    pub shapes_per_event: (usize, usize),
    pub particles_per_event: (usize, usize),
    pub max_shapes: usize,
    pub max_particles: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Variant::Landing.config()
    }
}

impl GridConfig {
    fn with_layout(
        rows: usize,
        columns: ColumnMode,
        margins: Margins,
        drums: DrumColumns,
    ) -> Self {
        Self {
            rows,
            columns,
            margins,
            drums,
            highlight_duration: HIGHLIGHT_DURATION,
            base_frequency_hz: BASE_FREQUENCY_HZ,
            shapes_per_event: SHAPES_PER_EVENT,
            particles_per_event: PARTICLES_PER_EVENT,
            max_shapes: MAX_SHAPES,
            max_particles: MAX_PARTICLES,
        }
    }
}

/// Named layouts the landing page ships with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Landing,
    Fixed,
    Fluid,
    Open,
    Wide,
}

pub const VARIANTS: [Variant; 5] = [
    Variant::Landing,
    Variant::Fixed,
    Variant::Fluid,
    Variant::Open,
    Variant::Wide,
];

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Landing => "landing",
            Variant::Fixed => "fixed",
            Variant::Fluid => "fluid",
            Variant::Open => "open",
            Variant::Wide => "wide",
        }
    }

    pub fn config(self) -> GridConfig {
        let edge_rows = Margins { top: 1, bottom: 1 };
        match self {
            Variant::Landing => GridConfig::with_layout(
                7,
                ColumnMode::Orientation {
                    landscape: 16,
                    portrait: 9,
                },
                edge_rows,
                DrumColumns { left: 1, right: 1 },
            ),
            Variant::Fixed => GridConfig::with_layout(
                7,
                ColumnMode::Fixed(16),
                edge_rows,
                DrumColumns { left: 1, right: 1 },
            ),
            Variant::Fluid => GridConfig::with_layout(
                8,
                ColumnMode::Derived,
                Margins::default(),
                DrumColumns { left: 1, right: 0 },
            ),
            Variant::Open => GridConfig::with_layout(
                6,
                ColumnMode::Derived,
                Margins::default(),
                DrumColumns::default(),
            ),
            Variant::Wide => GridConfig::with_layout(
                7,
                ColumnMode::Orientation {
                    landscape: 20,
                    portrait: 10,
                },
                edge_rows,
                DrumColumns { left: 2, right: 2 },
            ),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = VARIANTS.iter().map(|v| v.name()).collect();
        write!(
            f,
            "unknown grid variant '{}' (expected one of: {})",
            self.0,
            known.join(", ")
        )
    }
}

impl std::error::Error for UnknownVariant {}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        VARIANTS
            .iter()
            .copied()
            .find(|v| v.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}
