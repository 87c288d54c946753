//! Icon set for the TUI.
//!
//! `IconSet` resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode`: safe characters that work in all terminals
//! - `IconMode::NerdFonts`: rich Nerd Font glyphs (requires Nerd Font installed)

use pdview_app::config::IconMode;

#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    // --- Target sections ---

    pub fn collapsed(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{25b6}",   // ▶
        }
    }

    pub fn expanded(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f078}", // nf-fa-chevron_down
            IconMode::Unicode => "\u{25bc}",   // ▼
        }
    }

    /// Shown next to a section toggle state
    pub fn section(&self, expanded: bool) -> &'static str {
        if expanded {
            self.expanded()
        } else {
            self.collapsed()
        }
    }

    // --- Affordances ---

    /// "View in project graph"
    pub fn eye(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f06e}", // nf-fa-eye
            IconMode::Unicode => "\u{25c9}",   // ◉
        }
    }

    /// "View in task graph"
    pub fn graph(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f126}", // nf-fa-code_fork
            IconMode::Unicode => "\u{2234}",   // ∴
        }
    }

    pub fn play(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f04b}", // nf-fa-play
            IconMode::Unicode => "\u{25b7}",   // ▷
        }
    }

    pub fn info(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f05a}", // nf-fa-info_circle
            IconMode::Unicode => "\u{24d8}",   // ⓘ
        }
    }

    // --- Provenance ---

    pub fn file(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f15b}", // nf-fa-file
            IconMode::Unicode => "\u{2190}",   // ←
        }
    }
}
