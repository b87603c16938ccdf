//! Day-of-week by hour-of-day activity grid.

use crate::parser::schema::Message;
use serde::{Deserialize, Serialize};

/// Row labels, indexed by day-of-week (0 = Sunday)
pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Message counts per (day-of-week, hour) cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heatmap {
    /// `grid[day][hour]`, day 0 = Sunday ... 6 = Saturday
    pub grid: [[usize; 24]; 7],

    /// Largest cell value, for color scaling
    pub max: usize,
}

impl Default for Heatmap {
    fn default() -> Self {
        Self {
            grid: [[0; 24]; 7],
            max: 0,
        }
    }
}

impl Heatmap {
    /// Sum of all cells
    pub fn total(&self) -> usize {
        self.grid.iter().flatten().sum()
    }

    /// Busiest (day, hour) cell, earliest cell wins ties
    pub fn peak(&self) -> Option<(usize, usize)> {
        if self.max == 0 {
            return None;
        }
        self.grid.iter().enumerate().find_map(|(day, row)| {
            row.iter()
                .position(|&count| count == self.max)
                .map(|hour| (day, hour))
        })
    }
}

/// Build the activity heatmap
///
/// **Public** - main entry point for the weekly rhythm view
pub fn activity_heatmap(messages: &[Message]) -> Heatmap {
    let mut heatmap = Heatmap::default();

    for msg in messages {
        let row = &mut heatmap.grid[msg.weekday_index()];
        if let Some(cell) = row.get_mut(msg.hour as usize) {
            *cell += 1;
        }
    }

    heatmap.max = heatmap.grid.iter().flatten().copied().max().unwrap_or(0);
    heatmap
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn msg(y: i32, m: u32, d: u32, hour: u32) -> Message {
        let ts = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        Message::new(ts, "A", "")
    }

    #[test]
    fn test_heatmap_cells() {
        // 2024-03-03 is a Sunday, 2024-03-06 a Wednesday
        let messages = vec![msg(2024, 3, 3, 9), msg(2024, 3, 3, 9), msg(2024, 3, 6, 23)];
        let heatmap = activity_heatmap(&messages);

        assert_eq!(heatmap.grid[0][9], 2);
        assert_eq!(heatmap.grid[3][23], 1);
        assert_eq!(heatmap.max, 2);
        assert_eq!(heatmap.peak(), Some((0, 9)));
        assert_eq!(heatmap.total(), messages.len());
    }

    #[test]
    fn test_heatmap_empty() {
        let heatmap = activity_heatmap(&[]);
        assert_eq!(heatmap.max, 0);
        assert_eq!(heatmap.total(), 0);
        assert_eq!(heatmap.peak(), None);
    }
}
