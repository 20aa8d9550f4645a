// One module per layout. Each exposes `render(&Resume) -> Markup` and pulls
// date and icon formatting from `render::format` through its `Style` value.

pub mod enterprise;
pub mod namaste;
pub mod neo_brutalist;
pub mod standard;
pub mod traditional;
pub mod zine;
