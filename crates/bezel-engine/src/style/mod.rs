//! Style model: the authored look of an item.
//!
//! Every object here is a plain owned value. Setters return
//! `Option<AppearanceAction>` so the owner knows whether to repaint or
//! rebuild geometry.

mod action;
mod border;
mod color_pair;
mod item;
mod text;
mod theme;

pub use action::AppearanceAction;
pub use border::AppearanceBorder;
pub use color_pair::{ColorPair, DEFAULT_GRADIENT};
pub use item::{AppearanceItem, ItemState};
pub use text::{AppearanceText, FontSpec, TextAlign, Trimming};
pub use theme::Theme;
