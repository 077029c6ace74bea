//! Load ROS 2 `.idl` interface files into the interface model.
//!
//! ```no_run
//! use rosidl::{IdlLoader, IdlTuple};
//!
//! let loader = IdlLoader::builder().strict(true).build();
//! let tuple: IdlTuple = "/ws/src/std_msgs:msg/Header.idl".parse()?;
//! let model = loader.load_interface(&tuple)?;
//! assert_eq!(model.ty.name, "Header");
//! # Ok::<(), rosidl::LoaderError>(())
//! ```

mod error;
mod loader;
mod tuple;

pub use error::LoaderError;
pub use loader::{IdlLoader, IdlLoaderBuilder};
pub use rosidl_core as core;
pub use rosidl_idl as idl;
pub use rosidl_interface as interface;
pub use tuple::IdlTuple;
