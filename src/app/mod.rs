// Application layer: what each CLI subcommand does, on top of the core.

pub mod interactive;
pub mod render;
