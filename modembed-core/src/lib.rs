//! Core file-writing primitives for modembed.
//!
//! Generated artifacts are only replaced when their bytes change, and every
//! replacement goes through a temporary sibling file followed by an atomic
//! rename, so a build system never observes a half-written output.

mod file;

pub use file::{File, FileRules, GeneratedFile, Overwrite, RenameReplace, Replace, WriteResult};
