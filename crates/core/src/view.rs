//! Page prerequisites for mounting a feature.
//!
//! Each feature looks up the elements it needs when the page loads. If any
//! are absent the feature quietly stays inactive; nothing is shown to the
//! user.

/// A view that can report which required elements the page lacks.
pub trait Mountable {
    /// Names of required elements that are missing. Empty when the feature
    /// can mount.
    fn missing_elements(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

/// Returns true if `view` has everything `feature` needs, logging the
/// missing elements otherwise.
pub fn can_mount(feature: &'static str, view: &impl Mountable) -> bool {
    let missing = view.missing_elements();
    if missing.is_empty() {
        return true;
    }
    tracing::debug!(feature, ?missing, "feature not activated");
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Page(Vec<&'static str>);

    impl Mountable for Page {
        fn missing_elements(&self) -> Vec<&'static str> {
            self.0.clone()
        }
    }

    struct Complete;

    impl Mountable for Complete {}

    #[test]
    fn test_complete_view_mounts() {
        assert!(can_mount("cart", &Complete));
        assert!(can_mount("cart", &Page(vec![])));
    }

    #[test]
    fn test_missing_element_blocks_mount() {
        assert!(!can_mount("checkout", &Page(vec!["cod-form"])));
    }
}
