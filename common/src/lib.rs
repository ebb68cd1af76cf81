//! GCV Wage Common Library
//!
//! 標準作業時間シートの正規化コア（I/Oなし）

pub mod cell;
pub mod columns;
pub mod error;
pub mod normalizer;
pub mod record;
pub mod summary;
pub mod table;

pub use cell::CellValue;
pub use columns::{ColumnMapping, GROUP_ID_LABEL, OUTPUT_KEYS};
pub use error::{Error, Result};
pub use normalizer::{NormalizationResult, NormalizationStats, TableNormalizer};
pub use record::WorkRecord;
pub use summary::{summarize, SummaryField};
pub use table::{RawRow, RawTable};
