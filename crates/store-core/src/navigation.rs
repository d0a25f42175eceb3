//! Navigation capability for redirect-style transitions.

/// How a navigation affects the client's history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Push a new history entry.
    Push,
    /// Replace the current entry, so back-navigation skips it.
    Replace,
}

/// Capability for requesting a navigation away from the current view.
///
/// Workload handlers implement this over their response type (typically as
/// an HTTP redirect). Views take it as a parameter instead of reaching for
/// ambient routing state.
pub trait Navigator {
    /// Navigate to `path` with the given history mode.
    fn navigate(&mut self, path: &str, mode: NavigationMode);

    /// Replace the current history entry with `path`.
    fn replace(&mut self, path: &str) {
        self.navigate(path, NavigationMode::Replace);
    }
}

/// A navigation captured for later conversion into a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingNavigation {
    pub path: String,
    pub mode: NavigationMode,
}

impl PendingNavigation {
    /// HTTP status code realizing this navigation.
    ///
    /// 303 See Other: the browser does not re-submit and the intermediate
    /// entry is not left in history, which is the replace behavior.
    pub fn status_code(&self) -> u16 {
        match self.mode {
            NavigationMode::Replace => 303,
            NavigationMode::Push => 302,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder(Vec<PendingNavigation>);

    impl Navigator for Recorder {
        fn navigate(&mut self, path: &str, mode: NavigationMode) {
            self.0.push(PendingNavigation {
                path: path.to_string(),
                mode,
            });
        }
    }

    #[test]
    fn replace_records_replace_mode() {
        let mut nav = Recorder(Vec::new());
        nav.replace("/products");
        assert_eq!(
            nav.0,
            vec![PendingNavigation {
                path: "/products".to_string(),
                mode: NavigationMode::Replace,
            }]
        );
    }

    #[test]
    fn replace_maps_to_303() {
        let pending = PendingNavigation {
            path: "/products".to_string(),
            mode: NavigationMode::Replace,
        };
        assert_eq!(pending.status_code(), 303);
    }
}
