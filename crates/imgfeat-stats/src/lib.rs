//! imgfeat Statistics
//!
//! Column-wise standardization and principal-component reduction of dataset
//! tables. Both stages take a [`DatasetTable`](imgfeat_table::DatasetTable)
//! and return a new one; identifiers are carried through in row order.
//!
//! # Example
//!
//! ```
//! use imgfeat_stats::{Pca, StandardScaler};
//! use imgfeat_table::DatasetTable;
//!
//! let mut table = DatasetTable::new(vec!["a".into(), "b".into()]);
//! table.push("r1", &[1.0, 10.0]).unwrap();
//! table.push("r2", &[2.0, 30.0]).unwrap();
//! table.push("r3", &[3.0, 20.0]).unwrap();
//!
//! let normalized = StandardScaler::fit_transform(&table).unwrap();
//! let reduction = Pca::builder()
//!     .variance_retained(0.80)
//!     .build()
//!     .fit_transform(&normalized)
//!     .unwrap();
//! assert_eq!(reduction.table.columns()[0], "PC1");
//! assert_eq!(reduction.table.ids(), table.ids());
//! ```

pub mod error;
pub mod pca;
pub mod scaler;

pub use error::{Result, StatsError};
pub use pca::{Pca, PcaBuilder, Reduction};
pub use scaler::StandardScaler;
