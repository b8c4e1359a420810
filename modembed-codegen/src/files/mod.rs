mod modules_cpp;
mod modules_header;

pub use modules_cpp::ModulesCpp;
pub use modules_header::ModulesHeader;

/// First line of every generated file.
pub fn generated_header(command: &str) -> String {
    format!(
        "// GENERATED FILE - do not edit. Regenerate with {}",
        command
    )
}
