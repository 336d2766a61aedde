/// Returns the part of `email` after its single `@`.
///
/// Addresses with no `@`, more than one `@`, or nothing after the `@` have no
/// domain. `"weird@@case.com"` is domainless rather than split on the first or
/// last separator.
pub fn extract_domain(email: &str) -> Option<&str> {
    let mut parts = email.split('@');
    let _local = parts.next()?;
    let domain = parts.next()?;
    if parts.next().is_some() || domain.is_empty() {
        return None;
    }
    Some(domain)
}
