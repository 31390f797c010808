//! Path probe port — filesystem existence check.

/// Answers whether a `Run` command names an existing filesystem path.
///
/// The script generator quotes existing paths that contain spaces and
/// leaves registered application names untouched. Implementations must be
/// safe to call from several threads.
pub trait PathProbe: Send + Sync {
    fn exists(&self, path: &str) -> bool;
}

impl<F> PathProbe for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn exists(&self, path: &str) -> bool {
        self(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_closures() {
        let probe = |path: &str| path.starts_with("C:\\");
        assert!(probe.exists("C:\\Windows"));
        assert!(!probe.exists("notepad"));
    }
}
