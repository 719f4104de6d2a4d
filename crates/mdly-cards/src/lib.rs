//! Embed cards extension for the mdly pipeline.
//!
//! Scans source for `[!embed ...]` directives, converts directives whose
//! URL passes the domain admission policy into `embedly-card` anchor
//! elements, and injects the loader script into the rendered output when
//! any card was produced. Rejected directives stay in the document as
//! literal text wrapped in a `<span>`.
//!
//! # Directive syntax
//!
//! ```text
//! [!embed https://youtu.be/abc]
//! [!embed:video https://youtu.be/abc A title with spaces]
//! ```
//!
//! The type after the colon and the title are optional; both fall back to
//! configured defaults.
//!
//! # Example
//!
//! ```
//! use mdly_cards::{CardOptions, CardsExtension};
//! use mdly_pipeline::Pipeline;
//!
//! let mut pipeline = Pipeline::new();
//! CardsExtension::new(CardOptions::default()).install(&mut pipeline);
//!
//! let html = pipeline.render("[!embed https://youtu.be/abc Video Title]");
//! assert!(html.contains("embedly-card"));
//! assert!(html.contains("platform.js"));
//! ```

mod card;
mod directive;
mod extension;
mod options;
mod policy;
mod script;

pub use card::{CARD_CLASS, synthesize};
pub use directive::CardRewriter;
pub use extension::{CARD_REWRITER_PRIORITY, CardsExtension, SCRIPT_INJECTOR_PRIORITY};
pub use options::{CardOptions, ScriptPosition};
pub use policy::admit;
pub use script::{SCRIPT_URL, ScriptInjector};
