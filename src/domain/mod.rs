pub mod icon_size;
pub mod output_dir;
pub mod output_icon;
pub mod source_image;
