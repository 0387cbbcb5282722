//! Drop-off timeline heatmap.
//!
//! Rows are course weeks, columns are weekdays, values are the number of
//! learners who dropped out on that day.

use serde::{Deserialize, Serialize};

pub const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// A single rendered heatmap cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub week: String,
    pub day: String,
    pub value: u64,
    /// value / max over the grid, in [0, 1]
    pub intensity: f64,
    /// Hover text, e.g. "Week 1 Mon: 14 dropouts"
    pub title: String,
}

/// Week x weekday grid of drop-off counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Heatmap {
    rows: Vec<[u64; 7]>,
}

impl Heatmap {
    pub fn new(rows: Vec<[u64; 7]>) -> Self {
        Self { rows }
    }

    pub fn weeks(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[[u64; 7]] {
        &self.rows
    }

    pub fn week_label(week: usize) -> String {
        format!("Week {}", week + 1)
    }

    pub fn get(&self, week: usize, day: usize) -> Option<u64> {
        self.rows.get(week).and_then(|row| row.get(day)).copied()
    }

    /// Largest value in the grid, 0 for an empty grid.
    pub fn max(&self) -> u64 {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// Relative intensity of a cell. An all-zero grid has zero intensity
    /// everywhere.
    pub fn intensity(&self, week: usize, day: usize) -> Option<f64> {
        let value = self.get(week, day)?;
        let max = self.max();
        if max == 0 {
            return Some(0.0);
        }
        Some(value as f64 / max as f64)
    }

    /// All cells, row-major.
    pub fn cells(&self) -> Vec<HeatmapCell> {
        let max = self.max();
        let mut cells = Vec::with_capacity(self.rows.len() * DAY_LABELS.len());
        for (w, row) in self.rows.iter().enumerate() {
            let week = Self::week_label(w);
            for (d, &value) in row.iter().enumerate() {
                let intensity = if max == 0 {
                    0.0
                } else {
                    value as f64 / max as f64
                };
                cells.push(HeatmapCell {
                    title: format!("{} {}: {} dropouts", week, DAY_LABELS[d], value),
                    week: week.clone(),
                    day: DAY_LABELS[d].to_string(),
                    value,
                    intensity,
                });
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Heatmap {
        Heatmap::new(vec![[14, 12, 8, 6, 5, 3, 2], [3, 2, 2, 1, 1, 1, 0]])
    }

    #[test]
    fn test_max() {
        assert_eq!(sample().max(), 14);
        assert_eq!(Heatmap::new(vec![]).max(), 0);
    }

    #[test]
    fn test_intensity() {
        let heatmap = sample();
        assert_eq!(heatmap.intensity(0, 0), Some(1.0));
        assert_eq!(heatmap.intensity(1, 6), Some(0.0));
        assert_eq!(heatmap.intensity(0, 1), Some(12.0 / 14.0));
        assert_eq!(heatmap.intensity(5, 0), None);
    }

    #[test]
    fn test_all_zero_grid_has_zero_intensity() {
        let heatmap = Heatmap::new(vec![[0; 7]]);
        assert_eq!(heatmap.intensity(0, 3), Some(0.0));
        assert!(heatmap.cells().iter().all(|c| c.intensity == 0.0));
    }

    #[test]
    fn test_cells_titles() {
        let cells = sample().cells();
        assert_eq!(cells.len(), 14);
        assert_eq!(cells[0].title, "Week 1 Mon: 14 dropouts");
        assert_eq!(cells[13].title, "Week 2 Sun: 0 dropouts");
    }
}
