use serde::Deserialize;

/// Key bindings configuration
///
/// Only single-character keys are configurable; arrows, paging keys and the
/// section digits `1`-`6` are fixed.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct KeyBindingsConfig {
    // Global keys
    key_quit: Option<char>,
    key_help: Option<char>,
    key_theme: Option<char>,
    key_contact: Option<char>,

    // Scrolling
    key_down: Option<char>,
    key_up: Option<char>,
    key_back_to_top: Option<char>,

    // Projects
    key_next_project: Option<char>,
    key_prev_project: Option<char>,
    key_open_demo: Option<char>,
    key_open_source: Option<char>,
    key_all_projects: Option<char>,

    // Experience timeline
    key_toggle_experience: Option<char>,
    key_next_experience: Option<char>,
    key_prev_experience: Option<char>,

    // Contact details
    key_copy_email: Option<char>,
    key_open_cv: Option<char>,
}

impl KeyBindingsConfig {
    pub fn quit(&self) -> char {
        self.key_quit.unwrap_or('q')
    }

    pub fn help(&self) -> char {
        self.key_help.unwrap_or('?')
    }

    pub fn theme(&self) -> char {
        self.key_theme.unwrap_or('t')
    }

    pub fn contact(&self) -> char {
        self.key_contact.unwrap_or('c')
    }

    pub fn down(&self) -> char {
        self.key_down.unwrap_or('j')
    }

    pub fn up(&self) -> char {
        self.key_up.unwrap_or('k')
    }

    pub fn back_to_top(&self) -> char {
        self.key_back_to_top.unwrap_or('g')
    }

    pub fn next_project(&self) -> char {
        self.key_next_project.unwrap_or(']')
    }

    pub fn prev_project(&self) -> char {
        self.key_prev_project.unwrap_or('[')
    }

    pub fn open_demo(&self) -> char {
        self.key_open_demo.unwrap_or('o')
    }

    pub fn open_source(&self) -> char {
        self.key_open_source.unwrap_or('s')
    }

    pub fn all_projects(&self) -> char {
        self.key_all_projects.unwrap_or('p')
    }

    pub fn toggle_experience(&self) -> char {
        self.key_toggle_experience.unwrap_or('x')
    }

    pub fn next_experience(&self) -> char {
        self.key_next_experience.unwrap_or('}')
    }

    pub fn prev_experience(&self) -> char {
        self.key_prev_experience.unwrap_or('{')
    }

    pub fn copy_email(&self) -> char {
        self.key_copy_email.unwrap_or('y')
    }

    pub fn open_cv(&self) -> char {
        self.key_open_cv.unwrap_or('v')
    }
}
