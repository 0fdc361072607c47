//! Message handlers, one file per message family.

mod contact;
mod frame;
mod interaction;
mod navigation;
mod theme;
