//! # pbxtok
//!
//! Leaf-level text helpers for emitting pbxproj-style project files.
//!
//! A project-file serializer has two recurring questions about every value it
//! writes: how is this token spelled so the file parses back to the same
//! token, and what stable identifier names this object? This crate answers
//! both and nothing more. It does not parse or write whole project files.
//!
//! Architecture
//!
//!     - quote: escaping and the quote-or-not decision for a single token
//!     - ident: MD5-backed hex digests and 24-character object references
//!
//!     The file structure :
//!     .
//!     ├── lib.rs
//!     ├── pbx.rs              # module listing
//!     ├── pbx
//!     │   ├── quote.rs        # token escaping and quoting
//!     │   └── ident.rs        # digest and object-ID helpers
//!     └── bin
//!         └── pbxtok.rs       # CLI over both helpers
//!
//! Both helpers are pure functions over their input: no shared state, no
//! I/O, safe to call from any number of threads at once.

pub mod pbx;

pub use pbx::ident::{md5_hex, object_id};
pub use pbx::quote::{escape, needs_quoting};
