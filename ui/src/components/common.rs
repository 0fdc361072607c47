use crate::components::toast::Toast;
use crate::sections::SectionId;
use server::contact::TransportError;
use uuid::Uuid;

#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub enum ComponentId {
    GlobalKeyWatcher,
    PageNavigator,
    ContactForm,
}

#[derive(Debug, PartialEq)]
pub enum Msg {
    AppClose,
    ForceRedraw,
    /// One animation frame
    Tick,
    Resize { width: u16, height: u16 },
    Navigation(NavigationMsg),
    Theme(ThemeMsg),
    Contact(ContactMsg),
    Interaction(InteractionMsg),
    Toast(ToastMsg),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMsg {
    ScrollLines(i32),
    ScrollPages(i32),
    Top,
    Bottom,
    JumpTo(SectionId),
    NextSection,
    PreviousSection,
    BackToTop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMsg {
    Toggle,
}

#[derive(Debug, PartialEq)]
pub enum ContactMsg {
    Open,
    Close,
    Input(char),
    Backspace,
    FocusNext,
    FocusPrevious,
    Submit,
    Delivered {
        ticket: Uuid,
        result: Result<(), TransportError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMsg {
    NextProject,
    PreviousProject,
    OpenDemo,
    OpenSource,
    OpenAllProjects,
    ToggleExperience,
    NextExperience,
    PreviousExperience,
    CopyEmail,
    OpenCv,
    ShowKeyHelp,
}

#[derive(Debug, PartialEq)]
pub enum ToastMsg {
    Show(Toast),
}

impl Default for Msg {
    fn default() -> Self {
        Self::AppClose
    }
}
