//! # CopyBolt
//!
//! Directive assembly for a copywriting agent. The crate turns an immutable
//! **configuration snapshot** (working directory, database readiness, credentials, design scheme)
//! and a set of **policy blocks** into one directive text, and defines the **action protocol**:
//! the tag grammar the agent must emit so a downstream executor can write files and run
//! migrations deterministically.
//!
//! ## Design principles
//!
//! - **Pure assembly**: [`assemble`](fn@assemble) does no I/O and keeps no state; equal inputs give
//!   byte-identical output, and calls are safe from any number of threads.
//! - **Explicit tri-state**: database readiness is a [`DatabaseState`] variant, matched
//!   exhaustively by [`database_reminder`] and [`ConfigurationSnapshot::env_credentials`].
//! - **No singletons**: [`PolicyBlocks`] and [`TemplateRegistry`] are values passed in.
//! - **Fixed protocol**: the rules ([`Invariant`]) are rendered into every directive and cannot
//!   be overridden by policy files.
//!
//! ## Main modules
//!
//! - [`snapshot`]: [`ConfigurationSnapshot`], [`DatabaseState`], [`Credentials`], [`DesignScheme`].
//! - [`policy`]: [`PolicyBlocks`], in-code default text, YAML overrides ([`policy::load`],
//!   [`policy::load_or_default`]), markup whitelist.
//! - [`protocol`]: [`Artifact`], [`Action`], [`ActionKind`], [`Invariant`], naming predicates and
//!   the rendered rule text.
//! - [`assemble`](mod@assemble): [`assemble`](fn@assemble), [`assemble_default`],
//!   [`database_reminder`], [`env_file_guidance`].
//! - [`directive`]: [`Directive`], [`continue_prompt`].
//! - [`design`]: the `<user_provided_design>` section and its inverse.
//! - [`templates`]: [`TemplateRegistry`], [`Template`], [`example_prompts`].
//! - [`error`]: [`ConfigurationError`], [`SectionError`].
//!
//! ## Quick start
//!
//! ```rust
//! use copybolt::{assemble, ConfigurationSnapshot, Credentials, DatabaseState, PolicyBlocks};
//!
//! let snapshot = ConfigurationSnapshot::new("/home/project")
//!     .with_database_state(DatabaseState::ConnectedWithProject)
//!     .with_credentials(Credentials::new("https://x.supabase.co", "abc123"));
//! let directive = assemble(&snapshot, &PolicyBlocks::default()).unwrap();
//! assert!(directive.as_str().contains("VITE_SUPABASE_URL=https://x.supabase.co"));
//! ```

pub mod assemble;
pub mod design;
pub mod directive;
pub mod error;
pub mod policy;
pub mod protocol;
pub mod snapshot;
pub mod templates;

pub use assemble::{
    assemble, assemble_default, database_reminder, env_file_guidance, DISCONNECTED_REMINDER,
    NO_PROJECT_REMINDER, SECTION_ORDER,
};
pub use directive::{continue_prompt, Directive};
pub use error::{ConfigurationError, SectionError};
pub use policy::PolicyBlocks;
pub use protocol::{Action, ActionKind, Artifact, Invariant};
pub use snapshot::{ConfigurationSnapshot, Credentials, DatabaseState, DesignScheme, WORK_DIR};
pub use templates::{example_prompts, ExamplePrompt, Template, TemplateRegistry};
