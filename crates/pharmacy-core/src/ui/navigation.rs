//! Navigation highlighting, modal dismissal and keyboard shortcuts.

/// A sidebar link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub label: String,
    pub active: bool,
}

impl NavLink {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
            active: false,
        }
    }
}

/// Mark the link whose href equals `current_page` active and clear the rest.
pub fn mark_active(links: &mut [NavLink], current_page: &str) {
    for link in links {
        link.active = link.href == current_page;
    }
}

/// Identifies a modal on the page.
pub type ModalId = String;

/// Open modals, most recently opened last.
#[derive(Debug, Default)]
pub struct ModalStack {
    open: Vec<ModalId>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, id: impl Into<ModalId>) {
        let id = id.into();
        if !self.open.contains(&id) {
            self.open.push(id);
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.iter().any(|m| m == id)
    }

    /// A click landed on `target`. Clicking a modal's backdrop (the modal
    /// element itself, not its content) closes it.
    pub fn close_on_click(&mut self, target: &str) -> bool {
        let before = self.open.len();
        self.open.retain(|m| m != target);
        self.open.len() != before
    }

    /// Escape closes every open modal. Returns how many were closed.
    pub fn close_on_escape(&mut self) -> usize {
        let closed = self.open.len();
        self.open.clear();
        closed
    }
}

/// Actions bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd+S
    Save,
    /// Ctrl/Cmd+K
    FocusSearch,
    /// Escape
    CloseModals,
}

impl Shortcut {
    /// Map a key event to a shortcut. `ctrl_or_meta` is true when Ctrl or
    /// Cmd is held.
    pub fn from_key_event(key: &str, ctrl_or_meta: bool) -> Option<Self> {
        match (key, ctrl_or_meta) {
            ("Escape", _) => Some(Shortcut::CloseModals),
            ("s", true) => Some(Shortcut::Save),
            ("k", true) => Some(Shortcut::FocusSearch),
            _ => None,
        }
    }

    /// Whether the browser's default handling should be suppressed.
    pub fn prevents_default(&self) -> bool {
        matches!(self, Shortcut::Save | Shortcut::FocusSearch)
    }
}

const MOBILE_AGENTS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Whether a user-agent string belongs to a mobile device.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_lowercase();
    MOBILE_AGENTS.iter().any(|agent| ua.contains(agent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_active() {
        let mut links = vec![
            NavLink::new("/medicines", "Medicines"),
            NavLink::new("/suppliers", "Suppliers"),
            NavLink::new("/sales", "Sales"),
        ];
        links[0].active = true;

        mark_active(&mut links, "/sales");
        let active: Vec<bool> = links.iter().map(|l| l.active).collect();
        assert_eq!(active, vec![false, false, true]);

        mark_active(&mut links, "/unknown");
        assert!(links.iter().all(|l| !l.active));
    }

    #[test]
    fn test_modal_dismissal() {
        let mut modals = ModalStack::new();
        modals.open("add-medicine");
        modals.open("add-supplier");
        modals.open("add-supplier");

        assert!(!modals.close_on_click("modal-content"));
        assert!(modals.close_on_click("add-medicine"));
        assert!(!modals.is_open("add-medicine"));
        assert!(modals.is_open("add-supplier"));

        assert_eq!(modals.close_on_escape(), 1);
        assert_eq!(modals.close_on_escape(), 0);
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(Shortcut::from_key_event("s", true), Some(Shortcut::Save));
        assert_eq!(Shortcut::from_key_event("k", true), Some(Shortcut::FocusSearch));
        assert_eq!(Shortcut::from_key_event("Escape", false), Some(Shortcut::CloseModals));
        assert_eq!(Shortcut::from_key_event("s", false), None);
        assert!(Shortcut::Save.prevents_default());
        assert!(!Shortcut::CloseModals.prevents_default());
    }

    #[test]
    fn test_mobile_user_agent() {
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"
        ));
        assert!(is_mobile_user_agent("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)"));
        assert!(!is_mobile_user_agent(
            "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/128.0"
        ));
    }
}
