//! Chat panel visibility.

/// Two-state machine driven by the toggle button. Starts [`PanelState::Closed`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

impl PanelState {
    pub fn toggle(&mut self) {
        *self = match self {
            PanelState::Closed => PanelState::Open,
            PanelState::Open => PanelState::Closed,
        };
    }

    pub fn is_open(self) -> bool {
        self == PanelState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        let mut panel = PanelState::default();
        assert!(!panel.is_open());
        panel.toggle();
        assert_eq!(panel, PanelState::Open);
        panel.toggle();
        assert_eq!(panel, PanelState::Closed);
    }
}
