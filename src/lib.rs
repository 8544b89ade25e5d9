//! rime-modifiers - modifier vocabulary of the Rime input method engine
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  constants   raw u32 masks (engine ABI)  │
//! │      ↓                                   │
//! │  modifiers   Modifiers bit set           │
//! │      ↓                                   │
//! │  names, keysyms → event ("Control+a")    │
//! │      ↓                                   │
//! │  config      event filtering (TOML)      │
//! └──────────────────────────────────────────┘
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod keysyms;
pub mod modifiers;
pub mod names;

pub use config::{Config, ModifierConfig};
pub use error::ParseError;
pub use event::KeyEvent;
pub use modifiers::Modifiers;
pub use names::{format_modifiers, modifier_name, parse_modifiers};
