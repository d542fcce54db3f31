/// Top-level views reachable from the sidebar menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// About text and usage instructions.
    #[default]
    Home,
    /// Question sets from the configured folder.
    Quiz,
    /// A question file chosen by the user.
    CustomStudy,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Quiz, Page::CustomStudy];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Quiz => "Quiz",
            Page::CustomStudy => "Custom Study",
        }
    }

    pub fn position(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_cycling_wraps() {
        assert_eq!(Page::Home.next(), Page::Quiz);
        assert_eq!(Page::CustomStudy.next(), Page::Home);
        assert_eq!(Page::Home.previous(), Page::CustomStudy);
    }
}
