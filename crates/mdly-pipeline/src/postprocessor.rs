//! Final-pass text rewriter trait.

/// Rewriter applied to the fully serialized output.
///
/// Postprocessors run after markdown rendering, in priority order, and
/// modify the output string in place. Each registered postprocessor runs
/// exactly once per render.
///
/// # Example
///
/// ```
/// use mdly_pipeline::Postprocessor;
///
/// struct Footer;
///
/// impl Postprocessor for Footer {
///     fn run(&mut self, output: &mut String) {
///         output.push_str("<footer>generated</footer>");
///     }
/// }
/// ```
pub trait Postprocessor: Send {
    /// Rewrite the serialized output in place.
    fn run(&mut self, output: &mut String);
}
