mod loader;
pub use loader::{
    CONFIG_FILE_NAME, ColorMode, Config, Glyphs, init_configuration, show_configuration,
};
