/// Core validation trait that all validators must implement.
///
/// Validators can be composed: the contact schema is built from the smaller
/// field validators in [`crate::contact::validation`].
///
/// # Type Parameters
///
/// * `T` - The type of data being validated (can be unsized like `str`)
///
/// # Examples
///
/// ```
/// use server::validation::Validator;
///
/// struct NotBlank;
/// impl Validator<str> for NotBlank {
///     type Error = String;
///
///     fn validate(&self, input: &str) -> Result<(), Self::Error> {
///         if input.trim().is_empty() {
///             Err("Input cannot be blank".to_string())
///         } else {
///             Ok(())
///         }
///     }
/// }
/// ```
pub trait Validator<T: ?Sized> {
    type Error;

    /// Validate the input and return Ok(()) if valid, or Err with validation error
    fn validate(&self, input: &T) -> Result<(), Self::Error>;

    /// Convenience wrapper for callers that only need a yes/no answer.
    fn is_valid(&self, input: &T) -> bool {
        self.validate(input).is_ok()
    }
}
