//! Assemble multi-station record sections from raw waveform samples.
//!
//! This crate sits on top of [`record_section_geometry`] and adds the pieces a
//! rendering worker needs around the projection itself: the serialized input
//! record ([`LineRequest`]), batches of requests ([`LineBatch`]) and a
//! [`RecordSection`] that keeps every station's line on one shared canvas.
//!
//! # Example
//!
//! ```
//! use record_section::{Camera, RecordSection};
//!
//! let mut section = RecordSection::new(Camera::new(0.0, 100.0));
//! section.add_station("ASAR", 1500.0, &[0.1, 0.4, -0.2, 0.3])?;
//! section.add_station("TXAR", 800.0, &[1.0, 2.0, 3.0])?;
//!
//! assert_eq!(section.stations()[0].name, "TXAR");
//! assert_eq!(section.merged_positions().vertex_count(), 7);
//! # Ok::<(), record_section::Error>(())
//! ```

mod error;
mod request;
mod section;

pub use error::{Error, Result};
pub use request::{LineBatch, LineRequest};
pub use section::{RecordSection, StationLine};

pub use record_section_geometry::{
    Calibration, Camera, InvalidInput, PositionBuffer, ProjectError, RecordSectionLine,
};
