//! todo-helper - TODO comment scanner CLI
//!
//! Scans source files for `// TODO` comments and answers queries about them
//! in an interactive prompt.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the prompt in your project
//! cd my-project && todo-helper
//!
//! # Run commands without the prompt
//! todo-helper --exec "sort importance" --exec "user bob"
//!
//! # Scan TypeScript files in another directory
//! todo-helper --root ../other --ext ts
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
