// ---------------------------------------------------------------------------
// Reading – one humidity value
// ---------------------------------------------------------------------------

/// A humidity value taken from column 1 of one CSV row.
pub type Reading = i64;

// ---------------------------------------------------------------------------
// ReadingSequence – all readings of a file, in row order
// ---------------------------------------------------------------------------

/// The readings of one file. Built once by the loader, read-only afterwards.
/// The position of a reading is its x coordinate in the plot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadingSequence {
    readings: Vec<Reading>,
}

impl ReadingSequence {
    pub fn from_readings(readings: Vec<Reading>) -> Self {
        Self { readings }
    }

    /// Number of readings.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether the file had no rows.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// Smallest and largest reading, `None` for an empty sequence.
    pub fn range(&self) -> Option<(Reading, Reading)> {
        let min = self.readings.iter().min()?;
        let max = self.readings.iter().max()?;
        Some((*min, *max))
    }

    /// `(index, value)` pairs for plotting.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.readings
            .iter()
            .enumerate()
            .map(|(i, &r)| [i as f64, r as f64])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_use_row_index_as_x() {
        let seq = ReadingSequence::from_readings(vec![55, 57, 54]);
        assert_eq!(
            seq.points(),
            vec![[0.0, 55.0], [1.0, 57.0], [2.0, 54.0]]
        );
    }

    #[test]
    fn range_of_readings() {
        let seq = ReadingSequence::from_readings(vec![55, -3, 57, 54]);
        assert_eq!(seq.range(), Some((-3, 57)));
    }

    #[test]
    fn empty_sequence() {
        let seq = ReadingSequence::default();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.range(), None);
        assert!(seq.points().is_empty());
    }
}
