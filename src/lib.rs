//! sol-env - switch between environments inside a single source file
//!
//! Lines carrying a trailing `// sol-env:<env>,<env>...` annotation are
//! commented out or uncommented so that exactly the lines listed for the
//! target environment are active:
//!
//! ```text
//! console.log(amount); // sol-env:dev        <- active for `dev`
//! // console.log(amount); // sol-env:dev     <- inactive for anything else
//! ```
//!
//! ## Module Structure
//!
//! - `annotation`: Annotation marker and environment-list parsing
//! - `delimiter`: Comment delimiters and extension-based inference
//! - `transform`: Per-line activation decision
//! - `switcher`: Whole-file scanning and batched writes
//! - `discovery`: Target file discovery
//! - `config`: Configuration file loading and parsing
//! - `report`: Verbosity-aware console output
//! - `error`: Error types
//! - `cli`: Command-line interface layer

pub mod annotation;
pub mod cli;
pub mod config;
pub mod delimiter;
pub mod discovery;
pub mod error;
pub mod report;
pub mod switcher;
pub mod transform;
