/// Shared contract of every identifier validator.
///
/// `validate` is a total predicate: malformed, empty or adversarial input yields `false`,
/// never a panic. `sanitize` only normalizes, its result may still fail `validate`.
pub trait Validator: Send + Sync {
    fn validate(&self, value: &str) -> bool;

    fn sanitize(&self, value: &str) -> String;

    /// Sanitizes the value and returns it if the sanitized form is valid.
    fn invoke(&self, value: &str) -> Option<String> {
        let sanitized = self.sanitize(value);
        if self.validate(&sanitized) {
            Some(sanitized)
        } else {
            None
        }
    }
}
