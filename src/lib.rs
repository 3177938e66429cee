// Library exports for evograph

pub mod config;
pub mod csv_reader;
pub mod data;
pub mod graph;
pub mod group;
pub mod palette;
pub mod plotter;
pub mod theme;

pub use config::{ChartConfig, FigureSize};
pub use data::Dataset;
pub use group::{GroupedRow, GroupedTable};
pub use plotter::TemporalPlotter;
pub use theme::ChartTheme;
