//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// `KeyBindings`. While the contact pane has input focus, printable keys
/// are captured as text before this mapping applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Focus navigation
    /// Cycle focus Laptop → Phone → About → Skills → Contact. Default: Tab
    CycleFocus,
    /// Focus the laptop display. Default: 1
    FocusLaptop,
    /// Focus the phone display. Default: 2
    FocusPhone,
    /// Focus the about note. Default: 3
    FocusAbout,
    /// Focus the skills grid. Default: 4
    FocusSkills,
    /// Focus the contact form. Default: 5
    FocusContact,

    // Item navigation (focused surface)
    /// Next project on the focused display, or next skill in the grid.
    /// Default: l/→/]
    NextItem,
    /// Previous project or skill. Default: h/←/[
    PrevItem,

    // Panel interaction
    /// Context action: toggle the about note, deselect the current
    /// skill, or submit the contact form. Default: Enter/Space
    Activate,
    /// Toggle autoplay for the focused display surface. Default: a
    ToggleAutoplay,

    // Application
    /// Flip between light and dark theme. Default: t
    ToggleTheme,
    /// Show or hide the key-hint overlay. Default: ?
    ToggleHelp,
    /// Exit the application. Default: q/Ctrl+C
    Quit,
}
