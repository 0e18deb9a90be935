//! `sw-output` — file output backends for completed fleet plans.
//!
//! # Modules
//!
//! | Module         | Contents                                             |
//! |----------------|------------------------------------------------------|
//! | [`row`]        | `MovementRow`, `DroneRow`, `build_rows`              |
//! | [`writer`]     | `PlanWriter` trait                                   |
//! | [`csv`]        | `CsvWriter` (`movements.csv`, `drones.csv`)          |
//! | [`transcript`] | `write_transcript`, `write_transcript_file`          |
//! | [`error`]      | `OutputError`, `OutputResult<T>`                     |

pub mod csv;
pub mod error;
pub mod row;
pub mod transcript;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use row::{DroneRow, MovementRow, build_rows};
pub use transcript::{write_transcript, write_transcript_file};
pub use writer::PlanWriter;
