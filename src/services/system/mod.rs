pub mod theme;

pub use theme::{FilePreferenceStore, PreferenceStore, Theme, ThemePreference};
