//! Page helpers compiled to WebAssembly: click-to-sort tables and a
//! persisted light/dark theme switch.
//!
//! ```js
//! import init, { sortTable, bindSortHeaders, initThemeSwitcher } from "./page_helpers.js";
//!
//! await init();
//! const themeSwitcher = initThemeSwitcher();
//! const headers = bindSortHeaders("modules");
//! ```

mod dom;
mod error;
mod table;
mod theme;

pub use error::{FrontendError, FrontendResult};
pub use table::{bind_sort_headers, sort_table, DomRows, SortHeaders};
pub use theme::{
    init_theme_switcher, init_theme_switcher_with_config, start_theme_switcher,
    ThemeSwitcherHandle, WebThemeHost,
};
