pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{header, info, muted, section, success, summary_row, swatch, warn};
pub use table::{pictogram_table, PictogramRow};
pub use theme::{term_theme, TermTheme};
