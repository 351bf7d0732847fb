mod compare;
mod config;
mod scheme;
mod sorter;
mod theme;

pub use compare::{column_keys, looks_numeric, parse_number, CellKey};
pub use config::{ConfigError, ThemeConfig};
pub use scheme::{Scheme, SchemeParseError};
pub use sorter::{sort_rows, Direction, SortError, SortOutcome, SortableRows, FIRST_DATA_ROW};
pub use theme::{StorageError, ThemeError, ThemeHost, ThemeSwitcher};
