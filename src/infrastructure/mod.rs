pub mod content;
pub mod profile;
pub mod time;
pub mod util;
