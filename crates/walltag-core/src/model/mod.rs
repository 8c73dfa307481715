pub mod category;
pub mod record;

pub use category::{Category, COLORS, PEOPLE, TIMES};
pub use record::WallpaperRecord;
