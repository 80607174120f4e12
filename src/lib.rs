//! geoclean: free-form latitude and longitude cleaning
//!
//! Parses messy geographic coordinate text, validates it against the
//! latitude and longitude ranges, and renders it in a canonical format.
//!
//! # Example
//!
//! ```
//! use geoclean::{CleanConfig, CleanedValue, Cleaner, CleaningOutcome};
//!
//! let cleaner = Cleaner::with_config(CleanConfig::new().split(true));
//! let result = cleaner.clean(&["40° 42′ 46″ N, 74° 0′ 22″ W", "NA", "hello"]);
//!
//! assert_eq!(
//!     result.outcomes[0],
//!     CleaningOutcome::Cleaned(CleanedValue::SplitDegrees {
//!         latitude: 40.7128,
//!         longitude: -74.0061,
//!     })
//! );
//! assert_eq!(result.outcomes[1], CleaningOutcome::Null);
//! assert_eq!(result.outcomes[2], CleaningOutcome::Unparseable);
//! println!("{}", result.report());
//! ```

pub mod batch;
pub mod config;
pub mod coord;
pub mod error;
pub mod null_values;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod policy;
pub mod report;

// Re-export commonly used types
pub use batch::{
    clean_coordinates, validate_coordinate, CleanConfig, CleanProgress, CleanResult, Cleaner,
    CleaningStats,
};
pub use config::{ConfigError, GeocleanConfig};
pub use coord::grammar::parse_coordinate_text;
pub use coord::{
    CleanCoordinate, CleanedValue, CleaningOutcome, CoordinateGroup, Hemisphere, HorizontalAxis,
    OutputFormat, ParsedInput,
};
pub use error::{CleanError, FailureBucket};
pub use null_values::{NullValues, DEFAULT_NULL_VALUES};
pub use policy::InvalidPolicy;
pub use report::CleaningReport;

/// Result type alias for geoclean operations
pub type Result<T> = std::result::Result<T, CleanError>;
