pub mod gif_writer;

pub use gif_writer::{encode_gif, write_gif};
