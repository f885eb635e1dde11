//! Ninja build-file generation from declarative configs.
//!
//! This crate provides:
//! - Config document formats (preamble + project config, TOML)
//! - Layered flag-string composition
//! - Translation of package/library declarations into Ninja build edges
//!
//! It never compiles or links anything itself; it only emits the build
//! graph for an incremental-build executor to run.
//!
//! # Example
//!
//! ```toml
//! # project.kiln
//! [[package]]
//! name = "boost"
//! prefix = "/usr/local"
//! include_dir = "include"
//! lib_dir = "lib"
//!
//! [[library]]
//! name = "net"
//! src = ["src/socket.cc", "src/poll.cc"]
//! compile_flags = [{ append = "-fno-exceptions" }]
//! dependency = ["boost"]
//! ```

mod config;
mod emit;
mod error;
mod flags;
mod registry;

pub use config::{Config, FlagDirective, LibraryConfig, PackageConfig, Preamble};
pub use emit::Generator;
pub use error::{BuildError, Result};
pub use flags::FlagComposer;
pub use registry::PackageRegistry;
