//! Embed a scripting language's standard library into a C++ host.
//!
//! The pipeline is strictly sequential:
//!
//! 1. [`collect_files`] finds every library file under a root directory,
//!    sorted by relative path.
//! 2. [`EmbedTable`] derives up to three keys per file and escapes each
//!    file's content once into adjacent C++ string literals.
//! 3. [`files::ModulesCpp`] renders the table plus the two lookup functions;
//!    [`files::ModulesHeader`] renders the matching declarations.
//! 4. Writing goes through [`modembed_core::GeneratedFile`], which leaves
//!    unchanged outputs untouched.
//!
//! [`Generator`] wires these steps together.

pub mod builder;
pub mod files;
pub mod literal;

mod collect;
mod cpp_file;
mod diagnostic;
mod generator;
mod keys;
mod table;

pub use collect::{InputFile, collect_files};
pub use cpp_file::{CppFile, Function, Include, RawCode};
pub use diagnostic::Diagnostic;
pub use generator::{GenerateResult, Generator, PreviewFile, Targets, WrittenFile};
pub use keys::derive_keys;
pub use table::EmbedTable;
