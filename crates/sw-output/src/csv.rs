//! CSV output backend.
//!
//! A plan lands in two files under the chosen directory: `movements.csv`
//! (one row per route step) and `drones.csv` (one row per drone).

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::PlanWriter;
use crate::{DroneRow, MovementRow, OutputResult};

/// [`PlanWriter`] backend producing the two CSV files.
pub struct CsvWriter {
    movements: Writer<File>,
    drones:    Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create both files under `dir`, headers already written.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut movements = Writer::from_path(dir.join("movements.csv"))?;
        movements.write_record(["turn", "drone", "from", "to", "kind"])?;

        let mut drones = Writer::from_path(dir.join("drones.csv"))?;
        drones.write_record(["drone", "arrival_turn", "steps", "priority_hubs"])?;

        Ok(Self {
            movements,
            drones,
            finished: false,
        })
    }
}

impl PlanWriter for CsvWriter {
    fn write_movements(&mut self, rows: &[MovementRow]) -> OutputResult<()> {
        for row in rows {
            self.movements.write_record(&[
                row.turn.to_string(),
                row.drone.to_string(),
                row.from.clone(),
                row.to.clone(),
                row.kind.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_drones(&mut self, rows: &[DroneRow]) -> OutputResult<()> {
        for row in rows {
            self.drones.write_record(&[
                row.drone.to_string(),
                row.arrival_turn.to_string(),
                row.steps.to_string(),
                row.priority_hubs.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.movements.flush()?;
        self.drones.flush()?;
        Ok(())
    }
}
