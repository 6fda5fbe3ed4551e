/// Which page section is currently shown.
///
/// States are the ids of the page's sections; the only transition is a
/// navigation to another known id. Exactly one section is shown at a time.
#[derive(Clone, Debug)]
pub struct SectionSwitcher {
    ids: Vec<String>,
    current: Option<usize>,
}

/// A change of the shown section, as indices into the switcher's ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: Option<usize>,
    pub to: usize,
}

impl SectionSwitcher {
    /// Start on `initial`. When no section has that id nothing is shown
    /// until the first navigation.
    pub fn new(ids: Vec<String>, initial: &str) -> Self {
        let current = ids.iter().position(|id| id == initial);
        Self { ids, current }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.map(|i| self.ids[i].as_str())
    }

    #[inline]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Navigate to `target`. Unknown ids and re-selecting the current section
    /// leave the state untouched and return `None`.
    pub fn select(&mut self, target: &str) -> Option<Transition> {
        let to = self.ids.iter().position(|id| id == target)?;
        if self.current == Some(to) {
            return None;
        }
        let from = self.current.replace(to);
        Some(Transition { from, to })
    }

    pub fn is_shown(&self, id: &str) -> bool {
        self.current().is_some_and(|c| c == id)
    }
}
