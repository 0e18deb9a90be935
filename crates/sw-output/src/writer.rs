//! The `PlanWriter` trait implemented by all backend writers.

use crate::{DroneRow, MovementRow, OutputResult};

/// Common surface for plan output backends.
pub trait PlanWriter {
    /// Persist a batch of movement rows.
    fn write_movements(&mut self, rows: &[MovementRow]) -> OutputResult<()>;

    /// Persist a batch of per-drone summary rows.
    fn write_drones(&mut self, rows: &[DroneRow]) -> OutputResult<()>;

    /// Flush buffers and release the backing files.
    ///
    /// Calling it again after success is a no-op.
    fn finish(&mut self) -> OutputResult<()>;
}
